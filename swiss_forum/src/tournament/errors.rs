//! Tournament error types.

use thiserror::Error;

use super::models::PlayerId;
use crate::db::StoreError;

/// Tournament errors
#[derive(Debug, Error)]
pub enum TournamentError {
    /// A player cannot be reported as beating themselves
    #[error("Player {0} cannot play against themselves")]
    SelfMatch(PlayerId),

    /// A reported id does not belong to a registered player
    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),

    /// This pair of players already has a recorded match
    #[error("Match between players {0} and {1} already reported")]
    DuplicateMatch(PlayerId, PlayerId),

    /// Pairing needs every player to have an opponent
    #[error("Odd player count ({0}), cannot pair")]
    OddPlayerCount(usize),

    /// Every possible pairing would repeat an earlier match
    #[error("No pairing of {0} players avoids a rematch")]
    NoValidPairing(usize),

    /// Backing store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl TournamentError {
    /// Get a client-safe error message that doesn't leak store details
    pub fn client_message(&self) -> String {
        match self {
            TournamentError::Store(err) if err.is_unavailable() => {
                "Tournament store unavailable".to_string()
            }
            TournamentError::Store(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type for tournament operations
pub type TournamentResult<T> = Result<T, TournamentError>;
