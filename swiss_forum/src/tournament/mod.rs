//! Swiss-system tournament module.
//!
//! This module provides:
//! - Player registration and bulk clearing
//! - Match reporting with precondition checks
//! - Standings derived from recorded matches
//! - Next-round Swiss pairings that avoid rematches
//!
//! ## Example
//!
//! ```no_run
//! use swiss_forum::db::{Database, DatabaseConfig};
//! use swiss_forum::tournament::TournamentManager;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::new(&DatabaseConfig::from_env()).await?;
//!     let tournament = TournamentManager::with_pool(db.pool().clone());
//!
//!     let twilight = tournament.register_player("Twilight Sparkle").await?;
//!     let fluttershy = tournament.register_player("Fluttershy").await?;
//!     tournament.report_match(twilight, fluttershy).await?;
//!
//!     for standing in tournament.player_standings().await? {
//!         println!("{}: {}/{}", standing.name, standing.wins, standing.matches);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod manager;
pub mod models;
pub mod pairing;

pub use errors::{TournamentError, TournamentResult};
pub use manager::TournamentManager;
pub use models::{MatchRecord, Pairing, Player, PlayerId, PlayerStanding};
pub use pairing::pair_players;
