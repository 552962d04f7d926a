//! Per-generation search statistics.

use serde::{Deserialize, Serialize};

/// Fitness spread of one evaluated generation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Zero-based generation index.
    pub generation: usize,

    /// Highest fitness.
    pub best: f64,

    /// Mean fitness.
    pub mean: f64,

    /// Lowest fitness.
    pub worst: f64,
}

impl GenerationStats {
    /// Summarize a generation's fitness values. Empty input gives zeros.
    #[must_use]
    pub fn from_fitness(generation: usize, values: impl IntoIterator<Item = f64>) -> Self {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut best = f64::NEG_INFINITY;
        let mut worst = f64::INFINITY;

        for value in values {
            count += 1;
            sum += value;
            best = best.max(value);
            worst = worst.min(value);
        }

        if count == 0 {
            return Self {
                generation,
                ..Self::default()
            };
        }

        Self {
            generation,
            best,
            mean: sum / count as f64,
            worst,
        }
    }

    /// Gap between best and worst.
    #[must_use]
    pub fn spread(&self) -> f64 {
        self.best - self.worst
    }
}
