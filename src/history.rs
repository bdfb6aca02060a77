use super::bid::{Bid, Value};
use serde::{Deserialize, Serialize};

/// Append-only sequence of per-round vectors, one entry per player.
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq, Debug)]
pub struct History<T> {
    rounds: Vec<Vec<T>>,
}

pub type BidHistory = History<Bid>;
pub type ValueHistory = History<Value>;

impl<T: Copy> History<T> {
    pub fn new() -> Self {
        History { rounds: Vec::new() }
    }

    pub(crate) fn push(&mut self, round: Vec<T>) {
        self.rounds.push(round);
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn rounds(&self) -> &[Vec<T>] {
        &self.rounds
    }

    pub fn last(&self) -> Option<&[T]> {
        self.rounds.last().map(|round| round.as_slice())
    }

    /// Every entry of every round, round by round.
    pub fn all(&self) -> impl Iterator<Item = T> + '_ {
        self.rounds.iter().flat_map(|round| round.iter().copied())
    }

    /// Entries of one player slot across rounds.
    pub fn column(&self, slot: usize) -> impl Iterator<Item = T> + '_ {
        self.rounds.iter().map(move |round| round[slot])
    }
}

impl<T: Copy> Default for History<T> {
    fn default() -> Self {
        History::new()
    }
}

impl BidHistory {
    /// Bids of every player but `player`, pooled over all rounds.
    pub fn opponent_sample(&self, player: usize) -> Vec<Bid> {
        self.rounds
            .iter()
            .flat_map(|round| {
                round
                    .iter()
                    .enumerate()
                    .filter(move |(slot, _)| *slot != player)
                    .map(|(_, bid)| *bid)
            })
            .collect()
    }
}
