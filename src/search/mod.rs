//! Deck search.
//!
//! ## Key Types
//!
//! - `PopulationSearch`: Generational search over decks
//! - `SearchConfig`: Population, selection and scoring parameters
//! - `Evaluated`: A deck with metrics, penalty and fitness
//! - `GenerationStats`: Fitness spread per generation

pub mod config;
pub mod fitness;
pub mod operators;
pub mod penalty;
pub mod population;
pub mod stats;

pub use config::{SearchConfig, DEFAULT_SEED_COUNT};
pub use fitness::{fitness, FitnessWeights};
pub use operators::{crossover, elite_count, mutate, tournament_select};
pub use penalty::{penalty, PenaltyConfig};
pub use population::{search, Evaluated, PopulationSearch, SearchOutcome};
pub use stats::GenerationStats;
