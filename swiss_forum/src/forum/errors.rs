//! Forum error types.

use thiserror::Error;

use crate::db::StoreError;

/// Forum errors
#[derive(Debug, Error)]
pub enum ForumError {
    /// Backing store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ForumError {
    /// Get a client-safe error message that doesn't leak store details
    pub fn client_message(&self) -> String {
        match self {
            ForumError::Store(err) if err.is_unavailable() => "Forum unavailable".to_string(),
            ForumError::Store(_) => "Internal server error".to_string(),
        }
    }
}

/// Result type for forum operations
pub type ForumResult<T> = Result<T, ForumError>;
