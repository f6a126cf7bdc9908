//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use employee_directory::Trace;
#[cfg(debug_assertions)]
use employee_directory::doc::ApiDoc;
use employee_directory::domain::EmployeeDirectoryService;
use employee_directory::inbound::http::employees;
use employee_directory::inbound::http::health::{HealthState, live, ready};
use employee_directory::inbound::http::index::index;
use employee_directory::inbound::http::state::HttpState;
use employee_directory::inbound::http::validation::{json_config, path_config};
use employee_directory::outbound::persistence::{
    DbPool, DieselEmployeeRepository, MigrationError, PoolError,
};
use employee_directory::settings::SettingsError;

/// Failures that abort startup before the listener accepts requests.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// OrthoConfig could not read the environment.
    #[error("failed to load configuration: {0}")]
    Config(String),
    /// Settings could not be turned into a connection URL.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// Schema migrations failed.
    #[error(transparent)]
    Migration(#[from] MigrationError),
    /// The connection pool could not be built.
    #[error(transparent)]
    Pool(#[from] PoolError),
}

impl From<StartupError> for std::io::Error {
    fn from(value: StartupError) -> Self {
        Self::other(value)
    }
}

fn build_http_state(db_pool: DbPool) -> web::Data<HttpState> {
    let repository = Arc::new(DieselEmployeeRepository::new(db_pool));
    let service = Arc::new(EmployeeDirectoryService::new(repository));
    web::Data::new(HttpState::from_service(service))
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let base = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .app_data(path_config())
        .wrap(Trace)
        .service(index)
        .configure(employees::configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app =
        base.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = base;

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// The readiness check flips to healthy once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: &web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let ServerConfig {
        bind_addr: (host, port),
        db_pool,
    } = config;
    let http_state = build_http_state(db_pool);

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind((host.as_str(), port))?
    .run();

    info!(%host, port, "listening");
    health_state.mark_ready();
    Ok(server)
}
