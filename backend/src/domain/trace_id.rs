//! Correlation id for one employee directory request.
//!
//! The trace middleware mints a [`TraceId`] per request and runs the handler
//! inside [`TraceId::scope`]. Error constructors read it back with
//! [`TraceId::current`], which is how a 404 or 500 body ends up with the same
//! `traceId` as the `trace-id` response header.
//!
//! The id lives in a Tokio task-local, so work moved onto another task must be
//! wrapped in its own `scope` call or it will see no id at all.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

/// Response header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    static TRACE_ID: TraceId;
}

/// Random v4 UUID naming a single request.
///
/// # Examples
/// ```
/// use employee_directory::TraceId;
///
/// async fn log_lookup(id: i32) {
///     let trace = TraceId::current().map(|trace| trace.to_string());
///     tracing::debug!(employee_id = id, trace_id = ?trace, "looking up employee");
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Mint a fresh identifier for an incoming request.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Identifier of the request being served on this task, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        TRACE_ID.try_with(|id| *id).ok()
    }

    /// Borrow the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Run `fut` with `trace_id` visible through [`TraceId::current`].
    ///
    /// # Examples
    /// ```
    /// use employee_directory::TraceId;
    /// use employee_directory::domain::Error;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let trace_id: TraceId = "6f1c2b7e-8d4a-4f3e-9b1a-2c3d4e5f6a7b"
    ///     .parse()
    ///     .expect("valid UUID");
    /// let error =
    ///     TraceId::scope(trace_id, async { Error::not_found("Employee not found") }).await;
    /// assert_eq!(error.trace_id(), Some("6f1c2b7e-8d4a-4f3e-9b1a-2c3d4e5f6a7b"));
    /// # });
    /// ```
    pub async fn scope<Fut>(trace_id: Self, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        TRACE_ID.scope(trace_id, fut).await
    }
}

impl From<Uuid> for TraceId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}
