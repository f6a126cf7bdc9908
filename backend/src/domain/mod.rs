//! Domain primitives, ports and services.
//!
//! Purpose: define the employee directory model and its use cases without
//! any knowledge of HTTP or the store. Inbound adapters call the driving
//! ports; outbound adapters implement the driven ones.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Employee and its validated value types.
//! - TraceId: request-scoped correlation identifier.
//! - EmployeeDirectoryService: use cases over an `EmployeeRepository`.

pub mod employee;
pub mod employee_directory_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::employee::{
    EMPLOYEE_TEXT_MAX, Employee, EmployeeDraft, EmployeeId, EmployeeName, EmployeeRole,
    EmployeeValidationError,
};
pub use self::employee_directory_service::EmployeeDirectoryService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
