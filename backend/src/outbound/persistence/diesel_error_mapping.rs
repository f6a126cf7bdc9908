//! Diesel and pool error mapping for the employee repository.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::EmployeeRepositoryError;

use super::pool::PoolError;

/// Map pool errors to repository connection errors.
pub(crate) fn map_pool_error(error: PoolError) -> EmployeeRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            EmployeeRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to repository errors, keeping the driver message.
///
/// Closed or unreachable connections surface as connection errors; every
/// other failure is a query error.
pub(crate) fn map_diesel_error(error: DieselError, operation: &str) -> EmployeeRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), %operation, "diesel operation failed");
        }
        _ => debug!(error_message = %error, %operation, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            EmployeeRepositoryError::connection(info.message().to_owned())
        }
        DieselError::BrokenTransactionManager => {
            EmployeeRepositoryError::connection("transaction manager is broken")
        }
        other => EmployeeRepositoryError::query(other.to_string()),
    }
}
