//! Best responses over the bid grid.

use super::{
    bid::{Bid, Pool, Value},
    payoff::{self, payoff_from_prob, win_prob_from_counts},
    rule::{Format, Rule},
};

/// Payoff-maximising bid for `value` against `opponents`, by full scan of the
/// grid.
///
/// Ties go to the lowest bid. When no bid earns a strictly positive payoff
/// the closed-form [`fallback_bid`] is returned instead.
///
/// # Panics
/// Panics if `opponents` is empty.
pub fn best_response(rule: &Rule, value: Value, opponents: &[Bid]) -> Bid {
    select(
        rule,
        value,
        (0..rule.bid_space).map(|bid| (bid, payoff::payoff(rule, value, bid, opponents))),
    )
}

/// [`best_response`] against the opponent bids counted in `pool`.
///
/// Walks the grid once, carrying the count of strictly lower bids, so the cost
/// does not depend on the pool size. Returns the same bid as the full scan.
///
/// # Panics
/// Panics if `pool` is empty.
pub fn best_response_in(rule: &Rule, value: Value, pool: &Pool) -> Bid {
    assert!(!pool.is_empty(), "best response needs opponent bids");
    let mut lower = 0;
    let payoffs = (0..rule.bid_space).map(|bid| {
        let tied = pool.count(bid);
        let p_win = win_prob_from_counts(rule.players, lower, tied, pool.len());
        lower += tied;
        (bid, payoff_from_prob(rule.format, value, bid, p_win))
    });
    select(rule, value, payoffs)
}

fn select<I>(rule: &Rule, value: Value, payoffs: I) -> Bid
where
    I: Iterator<Item = (Bid, f64)>,
{
    let mut best: Option<(Bid, f64)> = None;
    for (bid, util) in payoffs {
        // strict: the first maximum wins
        if best.map_or(true, |(_, top)| util > top) {
            best = Some((bid, util));
        }
    }
    match best {
        Some((bid, util)) if util > 0.0 => bid,
        _ => {
            let bid = fallback_bid(rule, value);
            trace!("no profitable bid for value {}, falling back to {}", value, bid);
            bid
        }
    }
}

/// Closed-form bid used for the seed round and when no bid is profitable.
///
/// First-price: `floor((n - 1) v / n)`.
/// All-pay: `floor((n - 1) / n * v^n / x^(n - 1))`, the symmetric equilibrium
/// bid under uniform values.
pub fn fallback_bid(rule: &Rule, value: Value) -> Bid {
    let n = rule.players;
    let bid = match rule.format {
        Format::FirstPrice => (n - 1) * value / n,
        Format::AllPay => {
            let share = (n - 1) as f64 / n as f64;
            (share * (value as f64).powi(n as i32) / (rule.bid_space as f64).powi(n as i32 - 1))
                .floor() as Bid
        }
    };
    bid.min(rule.bid_space - 1)
}
