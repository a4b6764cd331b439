//! Per-step reward.

use serde::{Deserialize, Serialize};

use super::termination::Outcome;
use crate::board::POP_THRESHOLD;

/// Reward values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rewards {
    /// Touched at least one same-color bubble without popping.
    pub hit: f64,
    /// Landed with no same-color neighbor.
    pub miss: f64,
    /// Paid per bubble in a popped group.
    pub pop: f64,
    /// Board cleared.
    pub win: f64,
    /// Death line reached.
    pub lost: f64,
}

impl Default for Rewards {
    fn default() -> Self {
        Self {
            hit: 1.0,
            miss: -1.0,
            pop: 10.0,
            win: 200.0,
            lost: -200.0,
        }
    }
}

impl Rewards {
    /// Reward for a step whose matched group had `group_size` cells.
    ///
    /// A terminal outcome overrides hit/miss/pop scoring.
    #[must_use]
    pub fn score(&self, group_size: usize, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Win => self.win,
            Outcome::Lost => self.lost,
            Outcome::Continue => match group_size {
                0 | 1 => self.miss,
                n if n < POP_THRESHOLD => self.hit,
                n => n as f64 * self.pop,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_terminal_scores() {
        let rewards = Rewards::default();
        assert_eq!(rewards.score(1, Outcome::Continue), -1.0);
        assert_eq!(rewards.score(2, Outcome::Continue), 1.0);
        assert_eq!(rewards.score(3, Outcome::Continue), 30.0);
        assert_eq!(rewards.score(7, Outcome::Continue), 70.0);
    }

    #[test]
    fn test_terminal_overrides() {
        let rewards = Rewards::default();
        assert_eq!(rewards.score(1, Outcome::Win), 200.0);
        assert_eq!(rewards.score(12, Outcome::Win), 200.0);
        assert_eq!(rewards.score(5, Outcome::Lost), -200.0);
    }

    #[test]
    fn test_custom_rewards() {
        let rewards = Rewards {
            pop: 2.5,
            ..Rewards::default()
        };
        assert_eq!(rewards.score(4, Outcome::Continue), 10.0);
    }
}
