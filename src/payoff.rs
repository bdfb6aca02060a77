//! Win probability and expected payoff of a bid against an opponent sample.
//!
//! The sample is read as the empirical distribution of a single opponent,
//! and the `n - 1` opponents are treated as i.i.d. draws from it. Ties are
//! broken uniformly at random.

use super::{
    bid::{Bid, Pool, Value},
    combinatorics::choose,
    rule::{Format, Rule},
};

/// Probability that `bid` wins against `n - 1` opponents bidding like
/// `opponents`.
///
/// # Panics
/// Panics if `opponents` is empty, or if `rule.players` exceeds
/// [`MAX_PLAYERS`](super::rule::MAX_PLAYERS).
pub fn win_prob(rule: &Rule, bid: Bid, opponents: &[Bid]) -> f64 {
    assert!(!opponents.is_empty(), "win probability needs opponent bids");
    let lower = opponents.iter().filter(|&&b| b < bid).count();
    let tied = opponents.iter().filter(|&&b| b == bid).count();
    win_prob_from_counts(rule.players, lower, tied, opponents.len())
}

/// Same as [`win_prob`], reading counts from a pool.
///
/// # Panics
/// Panics if `pool` is empty, or if `rule.players` exceeds
/// [`MAX_PLAYERS`](super::rule::MAX_PLAYERS).
pub fn win_prob_in(rule: &Rule, bid: Bid, pool: &Pool) -> f64 {
    assert!(!pool.is_empty(), "win probability needs opponent bids");
    let lower: usize = pool.counts()[..bid.min(pool.bid_space())].iter().sum();
    let tied = if bid < pool.bid_space() { pool.count(bid) } else { 0 };
    win_prob_from_counts(rule.players, lower, tied, pool.len())
}

/// `sum_j C(n-1, j) p_lower^(n-1-j) p_tied^j / (j+1)` over `j` tied opponents.
pub(crate) fn win_prob_from_counts(players: usize, lower: usize, tied: usize, len: usize) -> f64 {
    let p_lower = lower as f64 / len as f64;
    let p_tied = tied as f64 / len as f64;
    let others = players - 1;
    (0..=others)
        .map(|j| {
            let ways = match choose(others as u64, j as u64) {
                Some(ways) => ways,
                None => panic!("C({}, {}) does not fit in u128", others, j),
            };
            ways as f64
                * p_lower.powi((others - j) as i32)
                * p_tied.powi(j as i32)
                * (1.0 / (j + 1) as f64)
        })
        .sum()
}

/// Expected payoff of bidding `bid` with valuation `value`.
pub fn payoff(rule: &Rule, value: Value, bid: Bid, opponents: &[Bid]) -> f64 {
    payoff_from_prob(rule.format, value, bid, win_prob(rule, bid, opponents))
}

pub fn payoff_in(rule: &Rule, value: Value, bid: Bid, pool: &Pool) -> f64 {
    payoff_from_prob(rule.format, value, bid, win_prob_in(rule, bid, pool))
}

pub(crate) fn payoff_from_prob(format: Format, value: Value, bid: Bid, p_win: f64) -> f64 {
    match format {
        Format::FirstPrice => (value as f64 - bid as f64) * p_win,
        Format::AllPay => value as f64 * p_win - bid as f64,
    }
}
