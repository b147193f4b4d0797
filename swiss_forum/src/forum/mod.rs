//! Forum post store.
//!
//! Two operations: append a post (the store stamps the time) and list every
//! post newest first.

pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{ForumError, ForumResult};
pub use manager::ForumManager;
pub use models::{Post, PostId};
