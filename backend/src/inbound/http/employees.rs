//! Employee HTTP handlers.
//!
//! ```text
//! GET    /employees
//! GET    /employees/{id}
//! POST   /employees
//! PUT    /employees/{id}
//! DELETE /employees/{id}
//! ```

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::ports::EMPLOYEE_NOT_FOUND;
use crate::domain::{Employee, EmployeeDraft, EmployeeId, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{employee_validation_error, parse_employee_id};

/// Message returned after a successful delete.
pub const EMPLOYEE_DELETED_MESSAGE: &str = "Employee deleted successfully";

/// Request payload for creating or replacing an employee.
///
/// Unknown fields, including `id`, are ignored.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct EmployeeRequestBody {
    /// Display name; trimmed before validation.
    #[schema(example = "Alice", min_length = 1, max_length = 255)]
    pub name: String,
    /// Job title; trimmed before validation.
    #[schema(example = "Developer", min_length = 1, max_length = 255)]
    pub role: String,
}

/// Employee representation returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct EmployeeBody {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    pub id: i32,
    /// Display name.
    #[schema(example = "Alice")]
    pub name: String,
    /// Job title.
    #[schema(example = "Developer")]
    pub role: String,
}

impl From<Employee> for EmployeeBody {
    fn from(value: Employee) -> Self {
        Self {
            id: value.id().get(),
            name: value.name().as_ref().to_owned(),
            role: value.role().as_ref().to_owned(),
        }
    }
}

/// Confirmation payload for deletes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct DeleteEmployeeResponseBody {
    /// Always the delete confirmation text.
    #[schema(example = "Employee deleted successfully")]
    pub message: String,
}

fn parse_draft(body: EmployeeRequestBody) -> Result<EmployeeDraft, Error> {
    let EmployeeRequestBody { name, role } = body;
    EmployeeDraft::try_from_parts(name, role).map_err(|err| employee_validation_error(&err))
}

fn employee_id(path: web::Path<String>) -> Result<EmployeeId, Error> {
    parse_employee_id(&path.into_inner())?.ok_or_else(|| Error::not_found(EMPLOYEE_NOT_FOUND))
}

/// List every employee ordered by id.
#[utoipa::path(
    get,
    path = "/employees",
    tags = ["employees"],
    operation_id = "listEmployees",
    responses(
        (status = 200, description = "All employees", body = [EmployeeBody]),
        (status = 500, description = "Store failure", body = ErrorSchema)
    )
)]
#[get("/employees")]
pub async fn list_employees(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<EmployeeBody>>> {
    let employees = state.employees.list_employees().await?;
    Ok(web::Json(
        employees.into_iter().map(EmployeeBody::from).collect(),
    ))
}

/// Fetch one employee.
#[utoipa::path(
    get,
    path = "/employees/{id}",
    tags = ["employees"],
    operation_id = "getEmployee",
    params(("id" = i32, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Employee found", body = EmployeeBody),
        (status = 404, description = "Employee not found", body = ErrorSchema),
        (status = 422, description = "Identifier is not an integer", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    )
)]
#[get("/employees/{id}")]
pub async fn get_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<EmployeeBody>> {
    let id = employee_id(path)?;
    let employee = state.employees.get_employee(id).await?;
    Ok(web::Json(EmployeeBody::from(employee)))
}

/// Create an employee. The store assigns the id.
#[utoipa::path(
    post,
    path = "/employees",
    tags = ["employees"],
    operation_id = "createEmployee",
    request_body = EmployeeRequestBody,
    responses(
        (status = 200, description = "Employee created", body = EmployeeBody),
        (status = 422, description = "Invalid payload", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    )
)]
#[post("/employees")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<EmployeeRequestBody>,
) -> ApiResult<web::Json<EmployeeBody>> {
    let draft = parse_draft(payload.into_inner())?;
    let employee = state.employees_command.create_employee(draft).await?;
    info!(employee_id = %employee.id(), "employee created");
    Ok(web::Json(EmployeeBody::from(employee)))
}

/// Replace an employee's name and role.
#[utoipa::path(
    put,
    path = "/employees/{id}",
    tags = ["employees"],
    operation_id = "updateEmployee",
    params(("id" = i32, Path, description = "Employee identifier")),
    request_body = EmployeeRequestBody,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeBody),
        (status = 404, description = "Employee not found", body = ErrorSchema),
        (status = 422, description = "Invalid payload or identifier", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    )
)]
#[put("/employees/{id}")]
pub async fn update_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<EmployeeRequestBody>,
) -> ApiResult<web::Json<EmployeeBody>> {
    let id = employee_id(path)?;
    let draft = parse_draft(payload.into_inner())?;
    let employee = state.employees_command.update_employee(id, draft).await?;
    info!(employee_id = %id, "employee updated");
    Ok(web::Json(EmployeeBody::from(employee)))
}

/// Delete an employee.
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    tags = ["employees"],
    operation_id = "deleteEmployee",
    params(("id" = i32, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Employee deleted", body = DeleteEmployeeResponseBody),
        (status = 404, description = "Employee not found", body = ErrorSchema),
        (status = 422, description = "Identifier is not an integer", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    )
)]
#[delete("/employees/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeleteEmployeeResponseBody>> {
    let id = employee_id(path)?;
    state.employees_command.delete_employee(id).await?;
    info!(employee_id = %id, "employee deleted");
    Ok(web::Json(DeleteEmployeeResponseBody {
        message: EMPLOYEE_DELETED_MESSAGE.to_owned(),
    }))
}

/// Register the employee routes on a service config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_employees)
        .service(get_employee)
        .service(create_employee)
        .service(update_employee)
        .service(delete_employee);
}

#[cfg(test)]
#[path = "employees_tests.rs"]
mod tests;
