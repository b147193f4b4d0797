//! Runs parsed commands against the tournament and forum managers.

use anyhow::{Context, Result, bail};
use std::sync::Arc;
use swiss_forum::{
    Database, ForumError, ForumManager, MemoryStore, Pairing, Post, PlayerStanding,
    TournamentError, TournamentManager, forum::PostId, tournament::PlayerId,
};

use crate::commands::Command;

/// Result of one command, rendered by [`crate::render`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Migrated,
    Registered(PlayerId),
    Count(i64),
    Reported { winner: PlayerId, loser: PlayerId },
    Standings(Vec<PlayerStanding>),
    Pairings(Vec<Pairing>),
    Cleared { what: &'static str, removed: u64 },
    Posted(PostId),
    Posts(Vec<Post>),
}

/// Managers plus the database handle they were built from
pub struct App {
    db: Option<Database>,
    tournament: TournamentManager,
    forum: ForumManager,
}

impl App {
    /// Managers backed by PostgreSQL
    pub fn new(db: Database) -> Self {
        let tournament = TournamentManager::with_pool(db.pool().clone());
        let forum = ForumManager::with_pool(db.pool().clone());
        Self {
            db: Some(db),
            tournament,
            forum,
        }
    }

    /// Managers backed by a throwaway in-memory store
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            db: None,
            tournament: TournamentManager::new(store.clone()),
            forum: ForumManager::new(store),
        }
    }

    pub async fn execute(&self, command: Command) -> Result<Output> {
        let output = match command {
            Command::Migrate => {
                let Some(db) = &self.db else {
                    bail!("migrate needs a database connection");
                };
                db.migrate().await.context("Failed to apply schema")?;
                Output::Migrated
            }
            Command::Register(name) => {
                Output::Registered(self.tournament.register_player(&name).await?)
            }
            Command::Count => Output::Count(self.tournament.count_players().await?),
            Command::Report { winner, loser } => {
                self.tournament.report_match(winner, loser).await?;
                Output::Reported { winner, loser }
            }
            Command::Standings => Output::Standings(self.tournament.player_standings().await?),
            Command::Pairings => Output::Pairings(self.tournament.swiss_pairings().await?),
            Command::ClearMatches => Output::Cleared {
                what: "match(es)",
                removed: self.tournament.delete_matches().await?,
            },
            Command::ClearPlayers => Output::Cleared {
                what: "player(s)",
                removed: self.tournament.delete_players().await?,
            },
            Command::Post(content) => Output::Posted(self.forum.add_post(&content).await?),
            Command::Posts => Output::Posts(self.forum.all_posts().await?),
        };
        Ok(output)
    }

    /// Close the database pool, if there is one
    pub async fn close(self) {
        if let Some(db) = self.db {
            db.close().await;
        }
    }
}

/// Message shown to the user for a failed command
///
/// Tournament and forum errors go through their `client_message`, so store
/// internals only reach the log.
pub fn error_message(err: &anyhow::Error) -> String {
    if let Some(err) = err.downcast_ref::<TournamentError>() {
        err.client_message()
    } else if let Some(err) = err.downcast_ref::<ForumError>() {
        err.client_message()
    } else {
        format!("{err:#}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use swiss_forum::StoreError;

    #[tokio::test]
    async fn test_register_report_and_pair() {
        let app = App::in_memory();
        for name in ["A", "B", "C", "D"] {
            app.execute(Command::Register(name.to_string())).await.unwrap();
        }

        let output = app
            .execute(Command::Report { winner: 1, loser: 2 })
            .await
            .unwrap();
        assert_eq!(output, Output::Reported { winner: 1, loser: 2 });
        app.execute(Command::Report { winner: 3, loser: 4 })
            .await
            .unwrap();

        let Output::Pairings(pairings) = app.execute(Command::Pairings).await.unwrap() else {
            panic!("expected pairings");
        };
        assert_eq!((pairings[0].id1, pairings[0].id2), (1, 3));
        assert_eq!((pairings[1].id1, pairings[1].id2), (2, 4));
    }

    #[tokio::test]
    async fn test_tournament_errors_surface_typed() {
        let app = App::in_memory();
        app.execute(Command::Register("Solo".to_string()))
            .await
            .unwrap();

        let err = app.execute(Command::Pairings).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TournamentError>(),
            Some(TournamentError::OddPlayerCount(1))
        ));
    }

    #[tokio::test]
    async fn test_migrate_needs_database() {
        let app = App::in_memory();
        assert!(app.execute(Command::Migrate).await.is_err());
    }

    #[tokio::test]
    async fn test_clear_counts() {
        let app = App::in_memory();
        app.execute(Command::Register("A".to_string())).await.unwrap();
        app.execute(Command::Post("hi".to_string())).await.unwrap();

        assert_eq!(
            app.execute(Command::ClearPlayers).await.unwrap(),
            Output::Cleared {
                what: "player(s)",
                removed: 1
            }
        );
        assert_eq!(app.execute(Command::Count).await.unwrap(), Output::Count(0));
        assert!(matches!(
            app.execute(Command::Posts).await.unwrap(),
            Output::Posts(posts) if posts.len() == 1
        ));
    }

    #[test]
    fn test_error_message_hides_store_details() {
        let err = anyhow::Error::from(TournamentError::from(StoreError::Timeout(
            Duration::from_secs(5),
        )));
        assert_eq!(error_message(&err), "Tournament store unavailable");

        let err = anyhow::Error::from(ForumError::from(StoreError::Timeout(Duration::from_secs(5))));
        assert_eq!(error_message(&err), "Forum unavailable");
    }

    #[tokio::test]
    async fn test_error_message_keeps_rejections_readable() {
        let app = App::in_memory();
        app.execute(Command::Register("Solo".to_string()))
            .await
            .unwrap();

        let err = app
            .execute(Command::Report { winner: 1, loser: 1 })
            .await
            .unwrap_err();
        assert_eq!(error_message(&err), "Player 1 cannot play against themselves");

        let err = app.execute(Command::Migrate).await.unwrap_err();
        assert_eq!(error_message(&err), "migrate needs a database connection");
    }
}
