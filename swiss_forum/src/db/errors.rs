//! Store error types shared by the tournament and forum modules.

use std::time::Duration;
use thiserror::Error;

/// Errors raised while talking to the backing store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached (connect, pool or socket failure)
    #[error("Store unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    /// A query did not finish within its deadline
    #[error("Database operation timed out after {0:?}")]
    Timeout(Duration),

    /// The store was reached but rejected or failed the statement
    #[error("Database error: {0}")]
    Query(#[source] sqlx::Error),

    /// Applying the bundled schema failed
    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

impl StoreError {
    /// Whether the error means the store itself is unreachable
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreError::Unavailable(_) | StoreError::Timeout(_))
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if is_connection_failure(&err) {
            StoreError::Unavailable(err)
        } else {
            StoreError::Query(err)
        }
    }
}

fn is_connection_failure(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
    )
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
