use super::rule::Rule;
use serde::{Deserialize, Serialize};

/// Bidder type, as far as valuations are concerned.
#[derive(Clone, Copy, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Symmetric,
    Weak,
    Strong,
}

impl Role {
    pub fn of(rule: &Rule, slot: usize) -> Role {
        match rule.strong_slot() {
            None => Role::Symmetric,
            Some(strong) if strong == slot => Role::Strong,
            Some(_) => Role::Weak,
        }
    }

    /// Roles present in a run, in report order.
    pub fn all(rule: &Rule) -> Vec<Role> {
        match rule.strong_slot() {
            None => vec![Role::Symmetric],
            Some(_) => vec![Role::Weak, Role::Strong],
        }
    }

    /// Player slots holding this role.
    pub fn slots(&self, rule: &Rule) -> Vec<usize> {
        (0..rule.players)
            .filter(|slot| Role::of(rule, *slot) == *self)
            .collect()
    }
}
