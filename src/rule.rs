use super::{bid::Value, combinatorics::choose, error::Error};
use rand::{rngs::SmallRng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs;

/// Largest player count whose tie coefficients `C(n - 1, j)` are all exact.
pub const MAX_PLAYERS: usize = 126;

/// Who pays what.
#[derive(Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// The winner pays their bid.
    FirstPrice,
    /// Every bidder pays their bid.
    AllPay,
}

/// How private values are drawn each round.
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ValuationRule {
    /// Every player draws uniformly from `[0, x)`.
    Uniform,
    /// Weak players draw uniformly from `[0, weak_upper]`; the strong player
    /// in `strong_slot` draws the max of `n` uniform draws from `[0, x]`.
    Asymmetric {
        #[serde(default)]
        weak_upper: Option<Value>,
        #[serde(default)]
        strong_slot: Option<usize>,
    },
}

impl Default for ValuationRule {
    fn default() -> Self {
        ValuationRule::Uniform
    }
}

#[derive(Clone, Deserialize, Serialize, PartialEq, Eq, Debug)]
pub struct Rule {
    /// Size `x` of the bid grid `[0, x)`.
    pub bid_space: usize,
    pub format: Format,
    pub players: usize,
    /// Iterating rounds after the seed round, minus one.
    pub rounds: usize,
    #[serde(default)]
    pub valuation: ValuationRule,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub parallel: bool,
}

impl Rule {
    pub fn new(bid_space: usize, format: Format, players: usize, rounds: usize) -> Self {
        Rule {
            bid_space,
            format,
            players,
            rounds,
            valuation: ValuationRule::Uniform,
            seed: None,
            parallel: false,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.bid_space == 0 {
            return Err(Error::InvalidBidSpace(self.bid_space));
        }
        if self.players < 2 {
            return Err(Error::TooFewPlayers(self.players));
        }
        let others = (self.players - 1) as u64;
        if choose(others, others / 2).is_none() {
            return Err(Error::TooManyPlayers(self.players));
        }
        if let Some(slot) = self.strong_slot() {
            if slot >= self.players {
                return Err(Error::InvalidStrongSlot(slot, self.players));
            }
            if self.weak_upper() > self.bid_space {
                return Err(Error::InvalidWeakUpper(self.weak_upper(), self.bid_space));
            }
        }
        Ok(())
    }

    /// Iterating rounds a complete run plays after the seed round.
    pub fn iterations(&self) -> usize {
        self.rounds + 1
    }

    /// Upper bound (inclusive) of weak valuations, `floor(x (n + 1) / 2n)`
    /// unless configured.
    pub fn weak_upper(&self) -> Value {
        match self.valuation {
            ValuationRule::Asymmetric {
                weak_upper: Some(upper),
                ..
            } => upper,
            _ => self.bid_space * (self.players + 1) / (2 * self.players),
        }
    }

    /// Slot of the strong bidder, `None` for symmetric runs.
    pub fn strong_slot(&self) -> Option<usize> {
        match self.valuation {
            ValuationRule::Uniform => None,
            ValuationRule::Asymmetric { strong_slot, .. } => {
                Some(strong_slot.unwrap_or(self.players - 1))
            }
        }
    }

    /// Generator for valuation draws, reproducible when a seed is set.
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }
}

pub fn from_json(json: &str) -> Result<Rule, Error> {
    let rule: Rule = serde_json::from_str(json)?;
    rule.validate()?;
    Ok(rule)
}

pub fn from_file(path: &str) -> Result<Rule, Error> {
    from_json(&fs::read_to_string(path)?)
}

pub fn from_name(rule_name: &str) -> Result<Rule, Error> {
    match rule_name {
        "symmetric" => from_json(include_str!("../resources/rule/symmetric.json")),
        "asymmetric" => from_json(include_str!("../resources/rule/asymmetric.json")),
        _ => Err(Error::UnknownPreset(rule_name.to_string())),
    }
}
