//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod employee_directory;
mod employee_repository;

#[cfg(test)]
pub use self::employee_directory::{MockEmployeeDirectoryCommand, MockEmployeeDirectoryQuery};
pub use self::employee_directory::{
    EMPLOYEE_NOT_FOUND, EmployeeDirectoryCommand, EmployeeDirectoryQuery,
};
#[cfg(test)]
pub use self::employee_repository::MockEmployeeRepository;
pub use self::employee_repository::{EmployeeRepository, EmployeeRepositoryError};
