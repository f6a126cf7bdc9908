//! Embedded schema migrations.
//!
//! Diesel's migration harness is synchronous, so the async entry point runs
//! it on a blocking thread with a dedicated `PgConnection`.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// Migrations from the backend/migrations directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while applying migrations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    /// The migration connection could not be opened.
    #[error("failed to connect for migrations: {message}")]
    Connection {
        /// Driver diagnostic.
        message: String,
    },
    /// A migration failed to run.
    #[error("failed to apply migrations: {message}")]
    Apply {
        /// Harness diagnostic.
        message: String,
    },
    /// The blocking task panicked or was cancelled.
    #[error("migration task did not complete: {message}")]
    Join {
        /// Join error text.
        message: String,
    },
}

/// Apply all pending migrations, returning the versions that ran.
///
/// # Errors
///
/// Returns [`MigrationError::Connection`] if the database is unreachable and
/// [`MigrationError::Apply`] if any migration fails.
pub fn run_pending_migrations(database_url: &str) -> Result<Vec<String>, MigrationError> {
    let mut conn = PgConnection::establish(database_url).map_err(|err| {
        MigrationError::Connection {
            message: err.to_string(),
        }
    })?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply {
            message: err.to_string(),
        })?;
    Ok(applied.iter().map(ToString::to_string).collect())
}

/// Async wrapper around [`run_pending_migrations`].
///
/// # Errors
///
/// As [`run_pending_migrations`], plus [`MigrationError::Join`] if the
/// blocking task fails.
pub async fn migrate(database_url: String) -> Result<Vec<String>, MigrationError> {
    let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&database_url))
        .await
        .map_err(|err| MigrationError::Join {
            message: err.to_string(),
        })??;
    info!(applied = applied.len(), versions = ?applied, "database migrations complete");
    Ok(applied)
}
