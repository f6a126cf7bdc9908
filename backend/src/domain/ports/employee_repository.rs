//! Driven port for employee persistence.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeDraft, EmployeeId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by employee repository adapters.
    pub enum EmployeeRepositoryError {
        /// Repository connection could not be established.
        Connection {
            /// Driver or pool diagnostic.
            message: String,
        } =>
            "employee repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query {
            /// Driver diagnostic.
            message: String,
        } =>
            "employee repository query failed: {message}",
        /// The store did not answer within the configured bound.
        Timeout {
            /// Name of the repository call that ran out of time.
            operation: String,
        } =>
            "employee repository {operation} timed out",
    }
}

/// Port for reading and mutating employee records.
///
/// Mutations report a missing row through their return value rather than an
/// error: `update` yields `None` and `delete` yields `false`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// All employees ordered by ascending id.
    async fn list(&self) -> Result<Vec<Employee>, EmployeeRepositoryError>;

    /// Find an employee by id.
    async fn find_by_id(&self, id: EmployeeId)
    -> Result<Option<Employee>, EmployeeRepositoryError>;

    /// Persist a new employee and return it with its store-assigned id.
    async fn insert(&self, draft: &EmployeeDraft) -> Result<Employee, EmployeeRepositoryError>;

    /// Replace the name and role of an existing employee.
    async fn update(
        &self,
        id: EmployeeId,
        draft: &EmployeeDraft,
    ) -> Result<Option<Employee>, EmployeeRepositoryError>;

    /// Remove an employee, reporting whether a row was deleted.
    async fn delete(&self, id: EmployeeId) -> Result<bool, EmployeeRepositoryError>;
}
