//! In-memory store implementing every repository trait.
//!
//! Mirrors the PostgreSQL schema closely enough for tests: serial ids,
//! cascading player deletes, the same standings order and newest-first
//! posts. It can also be switched offline to exercise store failures.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::errors::StoreError;
use super::repository::{PostRepository, TournamentRepository};
use crate::forum::{ForumResult, Post, PostId};
use crate::tournament::{MatchRecord, Player, PlayerId, PlayerStanding, TournamentResult};

#[derive(Debug)]
struct State {
    players: Vec<Player>,
    matches: Vec<MatchRecord>,
    posts: Vec<Post>,
    next_player_id: PlayerId,
    next_post_id: PostId,
}

impl Default for State {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            matches: Vec::new(),
            posts: Vec::new(),
            next_player_id: 1,
            next_post_id: 1,
        }
    }
}

/// Shared in-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<State>,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// While offline every call fails with [`StoreError::Unavailable`]
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn state(&self) -> Result<MutexGuard<'_, State>, StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(sqlx::Error::PoolClosed));
        }
        Ok(self.state.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

#[async_trait]
impl TournamentRepository for MemoryStore {
    async fn insert_player(&self, name: &str) -> TournamentResult<PlayerId> {
        let mut state = self.state()?;
        let id = state.next_player_id;
        state.next_player_id += 1;
        state.players.push(Player {
            id,
            name: name.to_string(),
        });
        Ok(id)
    }

    async fn delete_matches(&self) -> TournamentResult<u64> {
        let mut state = self.state()?;
        let removed = state.matches.len() as u64;
        state.matches.clear();
        Ok(removed)
    }

    async fn delete_players(&self) -> TournamentResult<u64> {
        let mut state = self.state()?;
        let removed = state.players.len() as u64;
        state.players.clear();
        state.matches.clear();
        Ok(removed)
    }

    async fn count_players(&self) -> TournamentResult<i64> {
        Ok(self.state()?.players.len() as i64)
    }

    async fn player_exists(&self, id: PlayerId) -> TournamentResult<bool> {
        Ok(self.state()?.players.iter().any(|p| p.id == id))
    }

    async fn match_exists(&self, a: PlayerId, b: PlayerId) -> TournamentResult<bool> {
        Ok(self.state()?.matches.iter().any(|m| m.involves_pair(a, b)))
    }

    async fn insert_match(&self, record: MatchRecord) -> TournamentResult<()> {
        self.state()?.matches.push(record);
        Ok(())
    }

    async fn standings(&self) -> TournamentResult<Vec<PlayerStanding>> {
        let state = self.state()?;
        let mut standings: Vec<PlayerStanding> = state
            .players
            .iter()
            .map(|player| {
                let mut standing = PlayerStanding::new(player.id, player.name.clone());
                for record in &state.matches {
                    if record.winner_id == player.id {
                        standing.wins += 1;
                        standing.matches += 1;
                    } else if record.loser_id == player.id {
                        standing.matches += 1;
                    }
                }
                standing
            })
            .collect();

        standings.sort_by(PlayerStanding::rank_cmp);
        Ok(standings)
    }

    async fn matches(&self) -> TournamentResult<Vec<MatchRecord>> {
        Ok(self.state()?.matches.clone())
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn insert_post(&self, content: &str) -> ForumResult<PostId> {
        let mut state = self.state()?;
        let id = state.next_post_id;
        state.next_post_id += 1;
        // keep insert order even if the wall clock steps back
        let now = Utc::now();
        let time = state.posts.last().map_or(now, |last| last.time.max(now));
        state.posts.push(Post {
            id,
            content: content.to_string(),
            time,
        });
        Ok(id)
    }

    async fn posts(&self) -> ForumResult<Vec<Post>> {
        let mut posts = self.state()?.posts.clone();
        posts.sort_by(|a, b| b.time.cmp(&a.time).then(b.id.cmp(&a.id)));
        Ok(posts)
    }
}
