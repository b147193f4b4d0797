//! Swiss pairing for the next round.
//!
//! Players are taken in standings order. The highest-ranked unpaired player
//! is matched with the next-ranked unpaired player they have not met yet;
//! if that choice leaves the rest of the field unpairable, the search backs
//! up and tries the following candidate. With no previous meetings this is
//! plain adjacent pairing: ranks (0, 1), (2, 3), ...
//!
//! A branch is abandoned as soon as the remaining players split into a group
//! of odd size whose members can only meet each other, and a remaining set
//! that failed once is not searched again.

use std::collections::HashSet;

use super::errors::{TournamentError, TournamentResult};
use super::models::{MatchRecord, Pairing, PlayerId, PlayerStanding, pair_key};

/// Pair `standings` (already in rank order) for the next round without
/// repeating any of `history`.
///
/// # Errors
///
/// * [`TournamentError::OddPlayerCount`] if someone would be left over
/// * [`TournamentError::NoValidPairing`] if every complete pairing contains
///   a rematch
pub fn pair_players(
    standings: &[PlayerStanding],
    history: &[MatchRecord],
) -> TournamentResult<Vec<Pairing>> {
    if standings.len() % 2 != 0 {
        return Err(TournamentError::OddPlayerCount(standings.len()));
    }

    let mut search = PairingSearch {
        standings,
        played: history.iter().map(MatchRecord::pair_key).collect(),
        dead_ends: HashSet::new(),
    };
    let ranked: Vec<usize> = (0..standings.len()).collect();
    let mut chosen = Vec::with_capacity(standings.len() / 2);

    if !search.pair_remaining(&ranked, &mut chosen) {
        return Err(TournamentError::NoValidPairing(standings.len()));
    }

    Ok(chosen
        .into_iter()
        .map(|(first, second)| Pairing::new(&standings[first], &standings[second]))
        .collect())
}

/// Backtracking state; indices are positions in `standings`.
struct PairingSearch<'a> {
    standings: &'a [PlayerStanding],
    played: HashSet<(PlayerId, PlayerId)>,
    /// Remaining sets (sorted by rank) already shown to have no pairing
    dead_ends: HashSet<Vec<usize>>,
}

impl PairingSearch<'_> {
    fn can_meet(&self, a: usize, b: usize) -> bool {
        !self
            .played
            .contains(&pair_key(self.standings[a].id, self.standings[b].id))
    }

    fn pair_remaining(&mut self, remaining: &[usize], chosen: &mut Vec<(usize, usize)>) -> bool {
        let Some((&top, rest)) = remaining.split_first() else {
            return true;
        };
        if self.dead_ends.contains(remaining) || self.has_odd_component(remaining) {
            return false;
        }

        for (offset, &candidate) in rest.iter().enumerate() {
            if !self.can_meet(top, candidate) {
                continue;
            }

            let next: Vec<usize> = rest
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != offset)
                .map(|(_, &idx)| idx)
                .collect();

            chosen.push((top, candidate));
            if self.pair_remaining(&next, chosen) {
                return true;
            }
            chosen.pop();
        }

        self.dead_ends.insert(remaining.to_vec());
        false
    }

    /// A group of players who can only meet each other must be even in size.
    /// A player who has met everyone left is a group of one.
    fn has_odd_component(&self, remaining: &[usize]) -> bool {
        let mut seen = vec![false; remaining.len()];
        for start in 0..remaining.len() {
            if seen[start] {
                continue;
            }
            seen[start] = true;
            let mut stack = vec![start];
            let mut size = 0;
            while let Some(i) = stack.pop() {
                size += 1;
                for j in 0..remaining.len() {
                    if !seen[j] && self.can_meet(remaining[i], remaining[j]) {
                        seen[j] = true;
                        stack.push(j);
                    }
                }
            }
            if size % 2 != 0 {
                return true;
            }
        }
        false
    }
}
