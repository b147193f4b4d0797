//! # Swiss Forum
//!
//! Two small stores backed by PostgreSQL: a Swiss-system tournament manager
//! and a forum post store.
//!
//! Both talk to the database only through the repository traits in [`db`],
//! so every manager can run against [`db::MemoryStore`] in tests.
//!
//! ## Core Modules
//!
//! - [`db`]: connection handle, schema, repositories and store errors
//! - [`tournament`]: players, match results, standings and Swiss pairings
//! - [`forum`]: append-only posts listed newest first
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use swiss_forum::{MemoryStore, TournamentManager};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tournament = TournamentManager::new(Arc::new(MemoryStore::new()));
//! let a = tournament.register_player("Bruno Walton").await?;
//! let b = tournament.register_player("Boots O'Neal").await?;
//!
//! let pairings = tournament.swiss_pairings().await?;
//! assert_eq!((pairings[0].id1, pairings[0].id2), (a, b));
//! # Ok(())
//! # }
//! ```

/// Database handle, repositories and store errors.
pub mod db;
pub use db::{Database, DatabaseConfig, MemoryStore, StoreError};

/// Forum post store.
pub mod forum;
pub use forum::{ForumError, ForumManager, Post};

/// Swiss tournament management.
pub mod tournament;
pub use tournament::{Pairing, PlayerStanding, TournamentError, TournamentManager};
