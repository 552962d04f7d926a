//! Population search configuration.

use serde::{Deserialize, Serialize};

use super::fitness::FitnessWeights;
use super::penalty::PenaltyConfig;
use crate::core::MatchConfig;

/// Seeds each candidate is evaluated on.
pub const DEFAULT_SEED_COUNT: usize = 5;

/// Population search parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Candidates per generation.
    pub population_size: usize,

    /// Generations to evaluate. The last one is evaluated but not bred.
    pub generations: usize,

    /// Length of the seed-bank prefix every candidate plays.
    pub seed_count: usize,

    /// Share of each generation carried over unchanged, rounded up.
    pub elite_fraction: f64,

    /// Candidates drawn per tournament.
    pub tournament_size: usize,

    /// Chance that a child comes from crossover rather than a clone.
    pub crossover_rate: f64,

    /// Upper bound on slots replaced per mutation.
    pub max_mutations: usize,

    /// Seed for the search RNG. Match seeds come from the seed bank.
    pub seed: u64,

    pub weights: FitnessWeights,
    pub penalty: PenaltyConfig,
    pub match_config: MatchConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            generations: 5,
            seed_count: DEFAULT_SEED_COUNT,
            elite_fraction: 0.2,
            tournament_size: 3,
            crossover_rate: 0.7,
            max_mutations: 3,
            seed: 42,
            weights: FitnessWeights::default(),
            penalty: PenaltyConfig::default(),
            match_config: MatchConfig::default(),
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn new(population_size: usize, generations: usize) -> Self {
        Self {
            population_size,
            generations,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_seed_count(mut self, count: usize) -> Self {
        self.seed_count = count;
        self
    }

    #[must_use]
    pub fn with_elite_fraction(mut self, fraction: f64) -> Self {
        self.elite_fraction = fraction;
        self
    }

    #[must_use]
    pub fn with_tournament_size(mut self, size: usize) -> Self {
        self.tournament_size = size;
        self
    }

    #[must_use]
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    #[must_use]
    pub fn with_max_mutations(mut self, slots: usize) -> Self {
        self.max_mutations = slots;
        self
    }

    #[must_use]
    pub fn with_weights(mut self, weights: FitnessWeights) -> Self {
        self.weights = weights;
        self
    }

    #[must_use]
    pub fn with_penalty(mut self, penalty: PenaltyConfig) -> Self {
        self.penalty = penalty;
        self
    }

    #[must_use]
    pub fn with_match_config(mut self, config: MatchConfig) -> Self {
        self.match_config = config;
        self
    }
}
