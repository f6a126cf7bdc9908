//! Employee directory domain service.
//!
//! Implements both driving ports over an [`EmployeeRepository`]. Update and
//! delete trust the repository's mutation result for existence, so no
//! separate lookup precedes them.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    EMPLOYEE_NOT_FOUND, EmployeeDirectoryCommand, EmployeeDirectoryQuery, EmployeeRepository,
    EmployeeRepositoryError,
};
use crate::domain::{Employee, EmployeeDraft, EmployeeId, Error};

fn map_repository_error(error: &EmployeeRepositoryError) -> Error {
    Error::internal(error.to_string())
}

/// Employee directory service implementing the query and command ports.
#[derive(Clone)]
pub struct EmployeeDirectoryService<R> {
    employee_repo: Arc<R>,
}

impl<R> EmployeeDirectoryService<R> {
    /// Create a new service over the employee repository.
    #[must_use]
    pub const fn new(employee_repo: Arc<R>) -> Self {
        Self { employee_repo }
    }
}

#[async_trait]
impl<R> EmployeeDirectoryQuery for EmployeeDirectoryService<R>
where
    R: EmployeeRepository,
{
    async fn list_employees(&self) -> Result<Vec<Employee>, Error> {
        self.employee_repo
            .list()
            .await
            .map_err(|err| map_repository_error(&err))
    }

    async fn get_employee(&self, id: EmployeeId) -> Result<Employee, Error> {
        self.employee_repo
            .find_by_id(id)
            .await
            .map_err(|err| map_repository_error(&err))?
            .ok_or_else(|| Error::not_found(EMPLOYEE_NOT_FOUND))
    }
}

#[async_trait]
impl<R> EmployeeDirectoryCommand for EmployeeDirectoryService<R>
where
    R: EmployeeRepository,
{
    async fn create_employee(&self, draft: EmployeeDraft) -> Result<Employee, Error> {
        self.employee_repo
            .insert(&draft)
            .await
            .map_err(|err| map_repository_error(&err))
    }

    async fn update_employee(
        &self,
        id: EmployeeId,
        draft: EmployeeDraft,
    ) -> Result<Employee, Error> {
        self.employee_repo
            .update(id, &draft)
            .await
            .map_err(|err| map_repository_error(&err))?
            .ok_or_else(|| Error::not_found(EMPLOYEE_NOT_FOUND))
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<(), Error> {
        let deleted = self
            .employee_repo
            .delete(id)
            .await
            .map_err(|err| map_repository_error(&err))?;
        if deleted {
            Ok(())
        } else {
            Err(Error::not_found(EMPLOYEE_NOT_FOUND))
        }
    }
}

#[cfg(test)]
#[path = "employee_directory_service_tests.rs"]
mod tests;
