//! Round-by-round fictitious play.

use super::{
    bid::{Bid, BidRound, Pool, Value},
    error::Error,
    history::{BidHistory, ValueHistory},
    rule::Rule,
    solver,
    valuation::Sampler,
};
use indicatif::ProgressIterator;
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle of a run.
#[derive(Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Debug)]
pub enum Phase {
    /// No history yet; the next round is the closed-form seed.
    Seeding,
    /// Each round best-responds to all earlier rounds.
    Iterating,
    /// The configured number of rounds has been played.
    Done,
}

/// Fictitious-play state: both histories plus bid counts kept in step with
/// the bid history.
///
/// `totals` counts every recorded bid and `own[p]` the bids of player `p`, so
/// player `p`'s opponent sample is `totals` without `own[p]`.
pub struct FictitiousPlay {
    rule: Rule,
    phase: Phase,
    bids: BidHistory,
    values: ValueHistory,
    totals: Pool,
    own: Vec<Pool>,
    iterations: usize,
}

impl FictitiousPlay {
    pub fn new(rule: Rule) -> Result<Self, Error> {
        rule.validate()?;
        let totals = Pool::new(rule.bid_space);
        let own = vec![totals.clone(); rule.players];
        Ok(FictitiousPlay {
            rule,
            phase: Phase::Seeding,
            bids: BidHistory::new(),
            values: ValueHistory::new(),
            totals,
            own,
            iterations: 0,
        })
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Iterating rounds played so far, not counting the seed round.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn bid_history(&self) -> &BidHistory {
        &self.bids
    }

    pub fn value_history(&self) -> &ValueHistory {
        &self.values
    }

    pub fn into_histories(self) -> (BidHistory, ValueHistory) {
        (self.bids, self.values)
    }

    /// Plays the seed round: every player bids [`solver::fallback_bid`].
    pub fn seed(&mut self, values: Vec<Value>) -> Result<&[Bid], Error> {
        self.expect_phase(Phase::Seeding)?;
        self.check_values(&values)?;
        let round: BidRound = values
            .iter()
            .map(|value| solver::fallback_bid(&self.rule, *value))
            .collect();
        debug!("seed round: values {:?}, bids {:?}", values, round);
        self.record(values, round);
        self.phase = Phase::Iterating;
        Ok(self.last_round())
    }

    /// Plays one iterating round: every player best-responds to the bids of
    /// all other players over all earlier rounds.
    pub fn step(&mut self, values: Vec<Value>) -> Result<&[Bid], Error> {
        self.expect_phase(Phase::Iterating)?;
        self.check_values(&values)?;

        let (rule, totals, own) = (&self.rule, &self.totals, &self.own);
        let respond = |player: usize| -> Bid {
            let pool = totals.without(&own[player]);
            let bid = solver::best_response_in(rule, values[player], &pool);
            trace!("player {}: value {} -> bid {}", player, values[player], bid);
            bid
        };
        let round: BidRound = if rule.parallel {
            (0..rule.players).into_par_iter().map(respond).collect()
        } else {
            (0..rule.players).map(respond).collect()
        };

        self.iterations += 1;
        debug!("round {}: values {:?}, bids {:?}", self.iterations, values, round);
        self.record(values, round);
        if self.iterations >= self.rule.iterations() {
            self.phase = Phase::Done;
        }
        Ok(self.last_round())
    }

    /// Seeds if needed, then plays rounds until the run is done.
    pub fn run<S, R>(&mut self, sampler: &mut S, rng: &mut R) -> Result<(), Error>
    where
        S: Sampler,
        R: Rng,
    {
        self.run_while(sampler, rng, |_| true)
    }

    /// Like [`FictitiousPlay::run`], but checks `keep_going` before every
    /// round and stops early when it returns false. The run can be resumed.
    pub fn run_while<S, R, F>(
        &mut self,
        sampler: &mut S,
        rng: &mut R,
        mut keep_going: F,
    ) -> Result<(), Error>
    where
        S: Sampler,
        R: Rng,
        F: FnMut(&Self) -> bool,
    {
        info!(
            "start: {} players, bid space {}, {:?}, {} rounds",
            self.rule.players,
            self.rule.bid_space,
            self.rule.format,
            self.rule.iterations()
        );
        if self.phase == Phase::Seeding {
            let values = sampler.draw(rng);
            self.seed(values)?;
        }
        for _ in (self.iterations..self.rule.iterations()).progress() {
            if !keep_going(self) {
                info!("interrupted after {} rounds", self.iterations);
                return Ok(());
            }
            let values = sampler.draw(rng);
            self.step(values)?;
        }
        info!("finish: {} rounds recorded", self.bids.len());
        Ok(())
    }

    fn record(&mut self, values: Vec<Value>, round: BidRound) {
        for (player, bid) in round.iter().enumerate() {
            self.totals.add(*bid);
            self.own[player].add(*bid);
        }
        self.values.push(values);
        self.bids.push(round);
    }

    fn last_round(&self) -> &[Bid] {
        self.bids.last().unwrap_or(&[])
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), Error> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(Error::Phase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn check_values(&self, values: &[Value]) -> Result<(), Error> {
        if values.len() == self.rule.players {
            Ok(())
        } else {
            Err(Error::ValueCount(self.rule.players, values.len()))
        }
    }
}

/// One iterating round computed straight from the history, flattening each
/// player's opponent sample.
///
/// # Panics
/// Panics if `history` is empty.
pub fn evolve(rule: &Rule, history: &BidHistory, values: &[Value]) -> BidRound {
    values
        .iter()
        .enumerate()
        .map(|(player, value)| solver::best_response(rule, *value, &history.opponent_sample(player)))
        .collect()
}
