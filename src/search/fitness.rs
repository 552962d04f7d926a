//! Fitness scoring.

use serde::{Deserialize, Serialize};

use crate::sim::Metrics;

/// Weights for the terms subtracted from the win rate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitnessWeights {
    /// Cost per average round played.
    pub turns: f64,
    /// Cost per point of average damage taken.
    pub damage: f64,
    /// Cost per point of constraint penalty.
    pub penalty: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            turns: 0.1,
            damage: 0.1,
            penalty: 0.1,
        }
    }
}

impl FitnessWeights {
    #[must_use]
    pub fn new(turns: f64, damage: f64, penalty: f64) -> Self {
        Self {
            turns,
            damage,
            penalty,
        }
    }
}

/// Score a deck. Higher is better.
///
/// `winrate - turns * avg_turns - damage * avg_damage - penalty * penalty`
#[must_use]
pub fn fitness(metrics: &Metrics, penalty: f64, weights: &FitnessWeights) -> f64 {
    metrics.winrate
        - weights.turns * metrics.avg_turns
        - weights.damage * metrics.avg_damage
        - weights.penalty * penalty
}
