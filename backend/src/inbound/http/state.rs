//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{EmployeeDirectoryCommand, EmployeeDirectoryQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read side of the directory.
    pub employees: Arc<dyn EmployeeDirectoryQuery>,
    /// Write side of the directory.
    pub employees_command: Arc<dyn EmployeeDirectoryCommand>,
}

impl HttpState {
    /// Bundle the driving ports used by the employee handlers.
    #[must_use]
    pub const fn new(
        employees: Arc<dyn EmployeeDirectoryQuery>,
        employees_command: Arc<dyn EmployeeDirectoryCommand>,
    ) -> Self {
        Self {
            employees,
            employees_command,
        }
    }

    /// Build state from one value implementing both ports.
    #[must_use]
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: EmployeeDirectoryQuery + EmployeeDirectoryCommand + 'static,
    {
        Self::new(service.clone(), service)
    }
}
