//! Repository trait definitions for testability and dependency injection.
//!
//! Managers receive a store handle through these traits instead of opening
//! their own connections, so tests can swap in [`super::memory::MemoryStore`].

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use super::timeouts::{with_default_timeout, with_long_timeout};
use crate::forum::{ForumResult, Post, PostId};
use crate::tournament::{MatchRecord, PlayerId, PlayerStanding, TournamentResult};

/// Trait for player and match storage
#[async_trait]
pub trait TournamentRepository: Send + Sync {
    /// Insert a player and return the store-assigned id
    async fn insert_player(&self, name: &str) -> TournamentResult<PlayerId>;

    /// Remove every match, returning how many were removed
    async fn delete_matches(&self) -> TournamentResult<u64>;

    /// Remove every player together with their matches
    async fn delete_players(&self) -> TournamentResult<u64>;

    /// Number of registered players
    async fn count_players(&self) -> TournamentResult<i64>;

    /// Whether a player with this id is registered
    async fn player_exists(&self, id: PlayerId) -> TournamentResult<bool>;

    /// Whether `a` and `b` already played each other, in either role
    async fn match_exists(&self, a: PlayerId, b: PlayerId) -> TournamentResult<bool>;

    /// Record one match outcome
    async fn insert_match(&self, record: MatchRecord) -> TournamentResult<()>;

    /// Every player's record, ranked by wins, then fewer matches, then id
    async fn standings(&self) -> TournamentResult<Vec<PlayerStanding>>;

    /// Every recorded match
    async fn matches(&self) -> TournamentResult<Vec<MatchRecord>>;
}

/// Trait for forum post storage
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a post stamped with the current time
    async fn insert_post(&self, content: &str) -> ForumResult<PostId>;

    /// Every post, newest first
    async fn posts(&self) -> ForumResult<Vec<Post>>;
}

/// PostgreSQL implementation of `TournamentRepository`
#[derive(Clone)]
pub struct PgTournamentRepository {
    pool: PgPool,
}

impl PgTournamentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TournamentRepository for PgTournamentRepository {
    async fn insert_player(&self, name: &str) -> TournamentResult<PlayerId> {
        let row = with_default_timeout(
            sqlx::query("INSERT INTO players (name) VALUES ($1) RETURNING id")
                .bind(name)
                .fetch_one(&self.pool),
        )
        .await?;

        Ok(row.get("id"))
    }

    async fn delete_matches(&self) -> TournamentResult<u64> {
        let result =
            with_long_timeout(sqlx::query("DELETE FROM matches").execute(&self.pool)).await?;
        Ok(result.rows_affected())
    }

    async fn delete_players(&self) -> TournamentResult<u64> {
        // matches go with them through ON DELETE CASCADE
        let result =
            with_long_timeout(sqlx::query("DELETE FROM players").execute(&self.pool)).await?;
        Ok(result.rows_affected())
    }

    async fn count_players(&self) -> TournamentResult<i64> {
        let count = with_default_timeout(
            sqlx::query_scalar::<_, i64>("SELECT count(*) FROM players").fetch_one(&self.pool),
        )
        .await?;
        Ok(count)
    }

    async fn player_exists(&self, id: PlayerId) -> TournamentResult<bool> {
        let exists = with_default_timeout(
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM players WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool),
        )
        .await?;
        Ok(exists)
    }

    async fn match_exists(&self, a: PlayerId, b: PlayerId) -> TournamentResult<bool> {
        let exists = with_default_timeout(
            sqlx::query_scalar::<_, bool>(
                r#"
                SELECT EXISTS(
                    SELECT 1 FROM matches
                    WHERE (winner_id = $1 AND loser_id = $2)
                       OR (winner_id = $2 AND loser_id = $1)
                )
                "#,
            )
            .bind(a)
            .bind(b)
            .fetch_one(&self.pool),
        )
        .await?;
        Ok(exists)
    }

    async fn insert_match(&self, record: MatchRecord) -> TournamentResult<()> {
        with_default_timeout(
            sqlx::query("INSERT INTO matches (winner_id, loser_id) VALUES ($1, $2)")
                .bind(record.winner_id)
                .bind(record.loser_id)
                .execute(&self.pool),
        )
        .await?;
        Ok(())
    }

    async fn standings(&self) -> TournamentResult<Vec<PlayerStanding>> {
        let rows = with_default_timeout(
            sqlx::query(
                r#"
                SELECT players.id AS id,
                       players.name AS name,
                       COALESCE(won.matches_won, 0) AS wins,
                       COALESCE(played.matches_played, 0) AS matches
                FROM players
                LEFT JOIN completed_matches_by_players_id played
                       ON players.id = played.player_id
                LEFT JOIN matches_won_by_players_id won
                       ON players.id = won.player_id
                ORDER BY wins DESC, matches ASC, players.id ASC
                "#,
            )
            .fetch_all(&self.pool),
        )
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| PlayerStanding {
                id: row.get("id"),
                name: row.get("name"),
                wins: row.get("wins"),
                matches: row.get("matches"),
            })
            .collect())
    }

    async fn matches(&self) -> TournamentResult<Vec<MatchRecord>> {
        let rows = with_default_timeout(
            sqlx::query("SELECT winner_id, loser_id FROM matches ORDER BY id")
                .fetch_all(&self.pool),
        )
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| MatchRecord::new(row.get("winner_id"), row.get("loser_id")))
            .collect())
    }
}

/// PostgreSQL implementation of `PostRepository`
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn insert_post(&self, content: &str) -> ForumResult<PostId> {
        let row = with_default_timeout(
            sqlx::query("INSERT INTO posts (content) VALUES ($1) RETURNING id")
                .bind(content)
                .fetch_one(&self.pool),
        )
        .await?;

        Ok(row.get("id"))
    }

    async fn posts(&self) -> ForumResult<Vec<Post>> {
        let rows = with_default_timeout(
            sqlx::query("SELECT id, content, time FROM posts ORDER BY time DESC, id DESC")
                .fetch_all(&self.pool),
        )
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Post {
                id: row.get("id"),
                content: row.get("content"),
                time: row.get("time"),
            })
            .collect())
    }
}
