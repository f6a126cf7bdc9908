//! Service entry-point: applies migrations, builds the pool and serves HTTP.

mod server;

use std::ffi::OsString;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use employee_directory::inbound::http::health::HealthState;
use employee_directory::outbound::persistence::{DbPool, migrate};
use employee_directory::settings::{DatabaseSettings, HttpSettings};
use server::{ServerConfig, StartupError, create_server};

const APP_NAME: &str = "employee-directory";

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(%error, "tracing init failed");
    }

    let config = build_server_config().await?;
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(&health_state, config)?;
    server.await
}

async fn build_server_config() -> Result<ServerConfig, StartupError> {
    let database = DatabaseSettings::load_from_iter([OsString::from(APP_NAME)])
        .map_err(|err| StartupError::Config(err.to_string()))?;
    let http = HttpSettings::load_from_iter([OsString::from(APP_NAME)])
        .map_err(|err| StartupError::Config(err.to_string()))?;

    let pool_config = database.pool_config()?;
    migrate(pool_config.database_url().to_owned()).await?;

    let pool = DbPool::new(pool_config).await?;
    info!(
        host = database.host(),
        port = database.port(),
        database = database.name(),
        max_size = database.pool_max_size(),
        "database pool ready"
    );

    Ok(ServerConfig::new(http.bind_addr(), pool))
}
