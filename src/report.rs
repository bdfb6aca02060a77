//! Empirical bid distributions of a finished run and their printing.

use super::{
    bid::{Bid, Distribution},
    history::{BidHistory, History},
    player::Role,
    rule::Rule,
};
use ord_subset::OrdSubsetIterExt;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Fraction of `bids` equal to each bid of the grid. All zeros when `bids`
/// is empty.
pub fn distribution<I>(rule: &Rule, bids: I) -> Distribution
where
    I: IntoIterator<Item = Bid>,
{
    let mut counts = vec![0usize; rule.bid_space];
    let mut total = 0usize;
    for bid in bids {
        counts[bid] += 1;
        total += 1;
    }
    if total == 0 {
        return vec![0.0; rule.bid_space];
    }
    counts
        .into_iter()
        .map(|count| count as f64 / total as f64)
        .collect()
}

/// Distribution of the bids made from one player slot.
pub fn player_distribution(rule: &Rule, history: &BidHistory, player: usize) -> Distribution {
    distribution(rule, history.column(player))
}

/// Distribution of the bids made from every slot holding `role`.
pub fn role_distribution(rule: &Rule, history: &BidHistory, role: Role) -> Distribution {
    let slots = role.slots(rule);
    distribution(
        rule,
        history
            .rounds()
            .iter()
            .flat_map(|round| slots.iter().map(move |slot| round[*slot])),
    )
}

pub fn mean(dist: &Distribution) -> f64 {
    dist.iter()
        .enumerate()
        .map(|(bid, freq)| bid as f64 * freq)
        .sum()
}

/// Most frequent bid; the lowest one on ties, as in the best-response search.
pub fn mode(dist: &Distribution) -> Option<Bid> {
    // max_by_key keeps the last maximum, so scan from the top
    dist.iter()
        .enumerate()
        .rev()
        .ord_subset_max_by_key(|(_, freq)| **freq)
        .map(|(bid, _)| bid)
}

#[derive(Clone, Deserialize, Serialize, Debug)]
pub struct Summary {
    pub role: Role,
    pub slots: Vec<usize>,
    pub mean: f64,
    pub mode: Option<Bid>,
    pub distribution: Distribution,
}

impl Summary {
    fn new(rule: &Rule, history: &BidHistory, role: Role) -> Self {
        let distribution = role_distribution(rule, history, role);
        Summary {
            role,
            slots: role.slots(rule),
            mean: mean(&distribution),
            mode: mode(&distribution),
            distribution,
        }
    }
}

#[derive(Clone, Deserialize, Serialize, Debug)]
pub struct Report {
    pub rule: Rule,
    /// Recorded rounds, seed included.
    pub rounds: usize,
    pub elapsed_secs: f64,
    /// All bids of all players.
    pub overall: Distribution,
    pub roles: Vec<Summary>,
}

impl Report {
    pub fn new(rule: &Rule, history: &BidHistory, elapsed_secs: f64) -> Self {
        Report {
            rule: rule.clone(),
            rounds: history.len(),
            elapsed_secs,
            overall: distribution(rule, history.all()),
            roles: Role::all(rule)
                .into_iter()
                .map(|role| Summary::new(rule, history, role))
                .collect(),
        }
    }
}

pub fn print_dist(dist: &Distribution) {
    println!("{{");
    for (bid, freq) in dist.iter().enumerate() {
        println!("    {}: {}", bid, freq);
    }
    print!("  }}");
}

pub fn print_history<T: Copy + Debug>(label: &str, history: &History<T>) {
    println!("{} history", label);
    for (i, round) in history.rounds().iter().enumerate() {
        println!("  {}: {:?}", i, round);
    }
}

pub fn print_report(report: &Report) {
    println!(
        "There are {} players and {} rounds.",
        report.rule.players, report.rounds
    );
    println!("Format: {:?}", report.rule.format);
    if let Some(slot) = report.rule.strong_slot() {
        println!("Strong bidder in slot {}, weak upper bound {}", slot, report.rule.weak_upper());
    }
    for summary in report.roles.iter() {
        print!("{:?} (mean {:.4}, mode {:?}): ", summary.role, summary.mean, summary.mode);
        print_dist(&summary.distribution);
        println!(",");
    }
    println!("Run time: {:.1} seconds.", report.elapsed_secs);
}
