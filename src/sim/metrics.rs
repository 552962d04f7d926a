//! Batch metrics.
//!
//! Reduces the results of one seed batch into the three numbers the
//! fitness function consumes.

use serde::{Deserialize, Serialize};

use super::runner::MatchResult;
use crate::core::DEFAULT_STARTING_LIFE;
use crate::error::EmptyMetricsBatch;

/// Summary of a batch of matches.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Fraction of matches the player survived, in `[0, 1]`.
    pub winrate: f64,
    /// Mean rounds per match.
    pub avg_turns: f64,
    /// Mean life lost per match. Negative if life was gained.
    pub avg_damage: f64,
}

/// Aggregate assuming the default starting life of 20.
pub fn aggregate(results: &[MatchResult]) -> Result<Metrics, EmptyMetricsBatch> {
    aggregate_with_life(results, DEFAULT_STARTING_LIFE)
}

/// Aggregate with an explicit starting life for the damage baseline.
pub fn aggregate_with_life(
    results: &[MatchResult],
    starting_life: i64,
) -> Result<Metrics, EmptyMetricsBatch> {
    if results.is_empty() {
        return Err(EmptyMetricsBatch);
    }

    let n = results.len() as f64;
    let wins = results.iter().filter(|r| r.won).count() as f64;
    let turns: f64 = results.iter().map(|r| f64::from(r.turns)).sum();
    let damage: f64 = results
        .iter()
        .map(|r| (starting_life - r.life) as f64)
        .sum();

    Ok(Metrics {
        winrate: wins / n,
        avg_turns: turns / n,
        avg_damage: damage / n,
    })
}
