//! Weighted output groups and multi-roll resolution.
//!
//! A [`ProbabilitySet`] is rolled `rolls` times. In relative mode each roll
//! picks exactly one group, weighted by `probability` against the sum of all
//! weights. In absolute mode every group fires independently with a
//! `probability` in 100 chance, so a roll may emit nothing or several groups.

use crate::item::Stack;
use crate::rng::SimRng;
use serde::{Deserialize, Serialize};

/// Default weight of a group whose definition omits one.
pub const DEFAULT_PROBABILITY: u32 = 100;

/// A set of stacks emitted together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbabilityGroup {
    pub outputs: Vec<Stack>,
    pub probability: u32,
}

impl ProbabilityGroup {
    pub fn new(outputs: Vec<Stack>, probability: u32) -> Self {
        Self {
            outputs,
            probability,
        }
    }
}

/// Weighted groups plus the rules for rolling them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbabilitySet {
    pub groups: Vec<ProbabilityGroup>,
    pub relative: bool,
    rolls: u32,
}

impl ProbabilitySet {
    /// Rolls below 1 are raised to 1.
    pub fn new(groups: Vec<ProbabilityGroup>, relative: bool, rolls: u32) -> Self {
        Self {
            groups,
            relative,
            rolls: rolls.max(1),
        }
    }

    pub fn relative(groups: Vec<ProbabilityGroup>) -> Self {
        Self::new(groups, true, 1)
    }

    pub fn absolute(groups: Vec<ProbabilityGroup>) -> Self {
        Self::new(groups, false, 1)
    }

    pub fn with_rolls(mut self, rolls: u32) -> Self {
        self.rolls = rolls.max(1);
        self
    }

    pub fn rolls(&self) -> u32 {
        self.rolls
    }

    fn total_weight(&self) -> u64 {
        self.groups.iter().map(|g| g.probability as u64).sum()
    }

    /// Roll the set and return every emitted stack, in trial order.
    pub fn resolve(&self, rng: &mut SimRng) -> Vec<Stack> {
        let mut out = Vec::new();
        for _ in 0..self.rolls {
            if self.relative {
                if let Some(group) = self.pick_weighted(rng) {
                    out.extend_from_slice(&group.outputs);
                }
            } else {
                for group in &self.groups {
                    if rng.roll_percent(group.probability) {
                        out.extend_from_slice(&group.outputs);
                    }
                }
            }
        }
        out
    }

    fn pick_weighted(&self, rng: &mut SimRng) -> Option<&ProbabilityGroup> {
        let total = self.total_weight();
        if total == 0 {
            return None;
        }
        let mut target = rng.next_below(total);
        for group in &self.groups {
            let weight = group.probability as u64;
            if target < weight {
                return Some(group);
            }
            target -= weight;
        }
        None
    }

    /// Every stack some roll could emit, in group order.
    pub fn possible_outputs(&self) -> Vec<Stack> {
        self.groups
            .iter()
            .filter(|g| g.probability > 0)
            .flat_map(|g| g.outputs.iter().copied())
            .collect()
    }

    /// Chance (0.0..=1.0) that the group at `index` fires on a single roll.
    pub fn group_chance(&self, index: usize) -> f64 {
        let Some(group) = self.groups.get(index) else {
            return 0.0;
        };
        if self.relative {
            let total = self.total_weight();
            if total == 0 {
                0.0
            } else {
                group.probability as f64 / total as f64
            }
        } else {
            (group.probability.min(100) as f64) / 100.0
        }
    }
}
