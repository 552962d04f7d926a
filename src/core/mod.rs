//! Core types: RNG, match configuration, per-match state.

pub mod config;
pub mod rng;
pub mod state;

pub use config::{MatchConfig, DEFAULT_MAX_ROUNDS, DEFAULT_STARTING_LIFE};
pub use rng::GameRng;
pub use state::{GameState, HordeLibrary};
