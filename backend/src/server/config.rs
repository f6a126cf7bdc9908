//! HTTP server configuration object.

use employee_directory::outbound::persistence::DbPool;

/// Listener address and store handle needed to start the server.
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    /// Construct a server configuration around an established pool.
    #[must_use]
    pub const fn new(bind_addr: (String, u16), db_pool: DbPool) -> Self {
        Self { bind_addr, db_pool }
    }
}
