//! Approximate Bayes-Nash equilibrium bidding in first-price and all-pay
//! auctions by discrete-time fictitious play.
//! # Example
//! ```
//! use auction_fp::*;
//! let mut rule = rule::from_name("symmetric").unwrap();
//! rule.rounds = 20;
//! rule.seed = Some(7);
//!
//! let mut fp = fictitious_play::FictitiousPlay::new(rule.clone()).unwrap();
//! let mut sampler = valuation::Valuations::new(&rule);
//! let mut rng = rule.rng();
//! fp.run(&mut sampler, &mut rng).unwrap();
//! let dist = report::distribution(&rule, fp.bid_history().all());
//! assert!((dist.iter().sum::<f64>() - 1.0).abs() < 1e-9);
//! ```
#[macro_use]
extern crate log;

pub mod bid;
pub mod combinatorics;
pub mod error;
pub mod history;
pub mod player;
pub mod rule;
pub mod valuation;

pub mod payoff;
pub mod solver;
pub mod fictitious_play;
pub mod report;

pub use error::Error;
