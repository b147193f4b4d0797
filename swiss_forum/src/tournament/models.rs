//! Tournament data models for Swiss-system events.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Player ID type (store-assigned serial)
pub type PlayerId = i32;

/// A registered player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Free text, not required to be unique
    pub name: String,
}

/// Outcome of a single match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
}

impl MatchRecord {
    pub fn new(winner_id: PlayerId, loser_id: PlayerId) -> Self {
        Self {
            winner_id,
            loser_id,
        }
    }

    /// Both ids in ascending order, so a pair compares equal regardless of
    /// who won.
    pub fn pair_key(&self) -> (PlayerId, PlayerId) {
        pair_key(self.winner_id, self.loser_id)
    }

    /// Whether this match was played between `a` and `b`, in either role
    pub fn involves_pair(&self, a: PlayerId, b: PlayerId) -> bool {
        self.pair_key() == pair_key(a, b)
    }
}

/// Order-independent key for a pair of players
pub fn pair_key(a: PlayerId, b: PlayerId) -> (PlayerId, PlayerId) {
    if a <= b { (a, b) } else { (b, a) }
}

/// A player's derived record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStanding {
    pub id: PlayerId,
    pub name: String,
    /// Matches won
    pub wins: i64,
    /// Matches played (won + lost)
    pub matches: i64,
}

impl PlayerStanding {
    /// Zero record for a player with no matches
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            wins: 0,
            matches: 0,
        }
    }

    /// Ranking order: more wins first, then fewer matches played, then
    /// registration order.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .wins
            .cmp(&self.wins)
            .then(self.matches.cmp(&other.matches))
            .then(self.id.cmp(&other.id))
    }
}

/// One pairing for the next round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}

impl Pairing {
    pub fn new(first: &PlayerStanding, second: &PlayerStanding) -> Self {
        Self {
            id1: first.id,
            name1: first.name.clone(),
            id2: second.id,
            name2: second.name.clone(),
        }
    }
}
