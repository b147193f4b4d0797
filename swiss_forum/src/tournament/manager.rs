//! Tournament manager for registering players, recording results and
//! pairing Swiss rounds.

use log::{debug, info, warn};
use sqlx::PgPool;
use std::sync::Arc;

use super::errors::{TournamentError, TournamentResult};
use super::models::{MatchRecord, Pairing, PlayerId, PlayerStanding};
use super::pairing::pair_players;
use crate::db::{PgTournamentRepository, TournamentRepository};

/// Tournament manager
#[derive(Clone)]
pub struct TournamentManager {
    repo: Arc<dyn TournamentRepository>,
}

impl TournamentManager {
    /// Create a tournament manager over any store
    pub fn new(repo: Arc<dyn TournamentRepository>) -> Self {
        Self { repo }
    }

    /// Create a tournament manager backed by PostgreSQL
    pub fn with_pool(pool: PgPool) -> Self {
        Self::new(Arc::new(PgTournamentRepository::new(pool)))
    }

    /// Register a player; the store assigns the id
    pub async fn register_player(&self, name: &str) -> TournamentResult<PlayerId> {
        let id = self.repo.insert_player(name).await?;
        info!("Registered player {} as {}", name, id);
        Ok(id)
    }

    /// Remove all match records
    pub async fn delete_matches(&self) -> TournamentResult<u64> {
        let removed = self.repo.delete_matches().await?;
        info!("Deleted {} match(es)", removed);
        Ok(removed)
    }

    /// Remove all players and, with them, all match records
    pub async fn delete_players(&self) -> TournamentResult<u64> {
        let removed = self.repo.delete_players().await?;
        info!("Deleted {} player(s)", removed);
        Ok(removed)
    }

    /// Number of registered players
    pub async fn count_players(&self) -> TournamentResult<i64> {
        self.repo.count_players().await
    }

    /// Record the outcome of a single match
    ///
    /// Rejects a player beating themselves, unknown ids, and a pair that
    /// already has a recorded match.
    pub async fn report_match(&self, winner: PlayerId, loser: PlayerId) -> TournamentResult<()> {
        if winner == loser {
            warn!("Rejected match report: player {} against themselves", winner);
            return Err(TournamentError::SelfMatch(winner));
        }

        for id in [winner, loser] {
            if !self.repo.player_exists(id).await? {
                warn!("Rejected match report: unknown player {}", id);
                return Err(TournamentError::PlayerNotFound(id));
            }
        }

        if self.repo.match_exists(winner, loser).await? {
            warn!(
                "Rejected match report: {} and {} already played",
                winner, loser
            );
            return Err(TournamentError::DuplicateMatch(winner, loser));
        }

        self.repo
            .insert_match(MatchRecord::new(winner, loser))
            .await?;
        debug!("Recorded match: {} beat {}", winner, loser);
        Ok(())
    }

    /// Players with their win records, first place first
    ///
    /// Ties on wins go to the player with fewer matches played, then to the
    /// earlier registration.
    pub async fn player_standings(&self) -> TournamentResult<Vec<PlayerStanding>> {
        self.repo.standings().await
    }

    /// Pairings for the next round
    ///
    /// Each player appears exactly once and meets the nearest-ranked player
    /// they have not played yet. See [`pair_players`].
    pub async fn swiss_pairings(&self) -> TournamentResult<Vec<Pairing>> {
        let standings = self.repo.standings().await?;
        if standings.len() % 2 != 0 {
            return Err(TournamentError::OddPlayerCount(standings.len()));
        }

        let history = self.repo.matches().await?;
        let pairings = pair_players(&standings, &history)?;
        debug!(
            "Paired {} player(s) with {} previous match(es)",
            standings.len(),
            history.len()
        );
        Ok(pairings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    fn manager() -> TournamentManager {
        TournamentManager::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_register_and_count() {
        let mgr = manager();
        assert_eq!(mgr.count_players().await.unwrap(), 0);

        mgr.register_player("Chandra Nalaar").await.unwrap();
        mgr.register_player("Chandra Nalaar").await.unwrap();
        assert_eq!(mgr.count_players().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_report_match_rejects_self_match() {
        let mgr = manager();
        let id = mgr.register_player("Solo").await.unwrap();

        let err = mgr.report_match(id, id).await.unwrap_err();
        assert!(matches!(err, TournamentError::SelfMatch(i) if i == id));
        assert_eq!(mgr.player_standings().await.unwrap()[0].matches, 0);
    }

    #[tokio::test]
    async fn test_report_match_rejects_unknown_player() {
        let mgr = manager();
        let id = mgr.register_player("Known").await.unwrap();

        let err = mgr.report_match(id, 99).await.unwrap_err();
        assert!(matches!(err, TournamentError::PlayerNotFound(99)));

        let err = mgr.report_match(42, id).await.unwrap_err();
        assert!(matches!(err, TournamentError::PlayerNotFound(42)));
    }

    #[tokio::test]
    async fn test_report_match_rejects_rematch_in_either_order() {
        let mgr = manager();
        let a = mgr.register_player("A").await.unwrap();
        let b = mgr.register_player("B").await.unwrap();

        mgr.report_match(a, b).await.unwrap();
        let err = mgr.report_match(b, a).await.unwrap_err();
        assert!(matches!(err, TournamentError::DuplicateMatch(..)));
    }

    #[tokio::test]
    async fn test_swiss_pairings_odd_count() {
        let mgr = manager();
        for name in ["A", "B", "C"] {
            mgr.register_player(name).await.unwrap();
        }

        let err = mgr.swiss_pairings().await.unwrap_err();
        assert!(matches!(err, TournamentError::OddPlayerCount(3)));
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let store = Arc::new(MemoryStore::new());
        let mgr = TournamentManager::new(store.clone());
        store.set_offline(true);

        let err = mgr.register_player("Nobody").await.unwrap_err();
        assert!(matches!(err, TournamentError::Store(ref e) if e.is_unavailable()));
    }
}
