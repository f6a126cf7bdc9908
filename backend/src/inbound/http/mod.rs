//! HTTP inbound adapter exposing REST endpoints.

pub mod employees;
pub mod error;
pub mod health;
pub mod index;
pub mod schemas;
pub mod state;
pub mod validation;

pub use error::ApiResult;
