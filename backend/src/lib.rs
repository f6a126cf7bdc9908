//! Employee directory library modules.
//!
//! The crate follows a hexagonal layout: [`domain`] holds the model, ports
//! and use cases; [`inbound`] exposes them over HTTP; [`outbound`] persists
//! them in PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
