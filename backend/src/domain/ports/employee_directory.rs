//! Driving ports for the employee directory.
//!
//! Inbound adapters call these traits; they never see repository details or
//! store failures, only the transport-agnostic [`Error`].

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeDraft, EmployeeId, Error};

/// Message carried by every not-found failure for an employee id.
pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";

/// Read operations over the directory.
///
/// # Examples
///
/// ```rust,no_run
/// use employee_directory::domain::ports::EmployeeDirectoryQuery;
/// use employee_directory::domain::{EmployeeId, Error};
///
/// async fn print_one(query: &dyn EmployeeDirectoryQuery) -> Result<(), Error> {
///     let employee = query.get_employee(EmployeeId::new(1)).await?;
///     tracing::info!(name = %employee.name(), "found employee");
///     Ok(())
/// }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeDirectoryQuery: Send + Sync {
    /// Every employee, ordered by ascending id.
    async fn list_employees(&self) -> Result<Vec<Employee>, Error>;

    /// One employee, or a not-found error.
    async fn get_employee(&self, id: EmployeeId) -> Result<Employee, Error>;
}

/// Mutating operations over the directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeDirectoryCommand: Send + Sync {
    /// Create an employee; the store assigns the id.
    async fn create_employee(&self, draft: EmployeeDraft) -> Result<Employee, Error>;

    /// Replace an employee's name and role, keeping its id.
    async fn update_employee(&self, id: EmployeeId, draft: EmployeeDraft)
    -> Result<Employee, Error>;

    /// Delete an employee.
    async fn delete_employee(&self, id: EmployeeId) -> Result<(), Error>;
}
