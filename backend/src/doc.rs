//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the request, response and error schemas. The document backs Swagger UI
//! (debug builds) and is exported via `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::employees::{
    DeleteEmployeeResponseBody, EmployeeBody, EmployeeRequestBody,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee directory API",
        description = "CRUD interface over the employee directory plus health checks."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::index::index,
        crate::inbound::http::employees::list_employees,
        crate::inbound::http::employees::get_employee,
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::employees::update_employee,
        crate::inbound::http::employees::delete_employee,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        EmployeeBody,
        EmployeeRequestBody,
        DeleteEmployeeResponseBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "employees", description = "Employee directory records"),
        (name = "health", description = "Endpoints for health checks"),
        (name = "index", description = "Service greeting")
    )
)]
pub struct ApiDoc;
