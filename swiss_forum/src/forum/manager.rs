//! Forum manager: append posts and list them newest first.

use log::debug;
use sqlx::PgPool;
use std::sync::Arc;

use super::errors::ForumResult;
use super::models::{Post, PostId};
use crate::db::{PgPostRepository, PostRepository};

/// Forum post manager
#[derive(Clone)]
pub struct ForumManager {
    repo: Arc<dyn PostRepository>,
}

impl ForumManager {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Create a forum manager backed by PostgreSQL
    pub fn with_pool(pool: PgPool) -> Self {
        Self::new(Arc::new(PgPostRepository::new(pool)))
    }

    /// Store a post; content is kept as given, empty text included
    pub async fn add_post(&self, content: &str) -> ForumResult<PostId> {
        let id = self.repo.insert_post(content).await?;
        debug!("Stored post {} ({} bytes)", id, content.len());
        Ok(id)
    }

    /// All posts, newest first
    pub async fn all_posts(&self) -> ForumResult<Vec<Post>> {
        self.repo.posts().await
    }
}
