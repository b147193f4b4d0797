//! Forum post models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post ID type (store-assigned serial)
pub type PostId = i32;

/// A stored forum post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub content: String,
    /// Assigned by the store at insert time
    pub time: DateTime<Utc>,
}
