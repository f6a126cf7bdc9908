//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;
use tracing::warn;

use crate::domain::ports::EmployeeRepositoryError;
use crate::domain::{
    Employee, EmployeeDraft, EmployeeId, EmployeeName, EmployeeRole, EmployeeValidationError,
};

use super::schema::employees;

/// Row struct for reading from the employees table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmployeeRow {
    pub id: i32,
    pub name: String,
    pub role: String,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = EmployeeRepositoryError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        let EmployeeRow { id, name, role } = row;
        let invalid = |err: EmployeeValidationError| {
            EmployeeRepositoryError::query(format!("stored employee {id} is invalid: {err}"))
        };
        Ok(Self::new(
            EmployeeId::new(id),
            EmployeeName::new(name).map_err(invalid)?,
            EmployeeRole::new(role).map_err(invalid)?,
        ))
    }
}

/// Convert a row read back from the store, dropping it if it is invalid.
///
/// The table only enforces `NOT NULL` and the length limit, so rows written
/// outside this service may hold a blank name or role.
pub(crate) fn readable_employee(row: EmployeeRow) -> Option<Employee> {
    let id = row.id;
    Employee::try_from(row)
        .inspect_err(|err| {
            warn!(employee_id = id, error = %err, "skipping stored employee that fails validation");
        })
        .ok()
}

/// Insertable and changeset struct carrying an employee's editable fields.
///
/// Used for both `INSERT` and `UPDATE`; the timestamps keep their column
/// defaults on insert and are left untouched on update.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = employees)]
pub(crate) struct EmployeeFields<'a> {
    pub name: &'a str,
    pub role: &'a str,
}

impl<'a> From<&'a EmployeeDraft> for EmployeeFields<'a> {
    fn from(draft: &'a EmployeeDraft) -> Self {
        Self {
            name: draft.name().as_ref(),
            role: draft.role().as_ref(),
        }
    }
}
