//! Per-round private value draws.

use super::{
    bid::Value,
    rule::{Rule, ValuationRule},
};
use rand::Rng;

/// Source of one valuation vector per round, one entry per player slot.
pub trait Sampler {
    fn draw<R: Rng>(&mut self, rng: &mut R) -> Vec<Value>;
}

/// Draws according to the run's [`ValuationRule`].
#[derive(Clone, Debug)]
pub struct Valuations {
    players: usize,
    bid_space: usize,
    kind: ValuationRule,
    weak_upper: Value,
    strong_slot: usize,
}

impl Valuations {
    pub fn new(rule: &Rule) -> Self {
        Valuations {
            players: rule.players,
            bid_space: rule.bid_space,
            kind: rule.valuation.clone(),
            weak_upper: rule.weak_upper(),
            strong_slot: rule.strong_slot().unwrap_or(rule.players - 1),
        }
    }
}

impl Sampler for Valuations {
    fn draw<R: Rng>(&mut self, rng: &mut R) -> Vec<Value> {
        match self.kind {
            ValuationRule::Uniform => (0..self.players)
                .map(|_| rng.random_range(0..self.bid_space))
                .collect(),
            ValuationRule::Asymmetric { .. } => {
                let mut values: Vec<Value> = (1..self.players)
                    .map(|_| rng.random_range(0..=self.weak_upper))
                    .collect();
                let strong = (0..self.players)
                    .map(|_| rng.random_range(0..=self.bid_space))
                    .max()
                    .unwrap_or(0);
                values.insert(self.strong_slot, strong);
                values
            }
        }
    }
}

/// Replays a fixed list of valuation vectors, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct Replay {
    rounds: Vec<Vec<Value>>,
    next: usize,
}

impl Replay {
    pub fn new(rounds: Vec<Vec<Value>>) -> Self {
        Replay { rounds, next: 0 }
    }
}

impl Sampler for Replay {
    fn draw<R: Rng>(&mut self, _rng: &mut R) -> Vec<Value> {
        if self.rounds.is_empty() {
            return Vec::new();
        }
        let values = self.rounds[self.next % self.rounds.len()].clone();
        self.next += 1;
        values
    }
}
