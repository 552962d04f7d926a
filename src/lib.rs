//! # horde-lab
//!
//! Match simulator and deck search for the Horde variant: one player
//! against an automated deck of zombies that reveals cards until it hits
//! a non-token and attacks with everything it has.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Every match is driven by an explicit seed. Same
//!    deck, Horde and seed give the same events and the same result.
//!
//! 2. **Validated once**: Cards and decks are checked where they are
//!    built. The simulation core never fails on a constructed `Deck`.
//!
//! 3. **Shared, immutable inputs**: Cards are `Arc`s and decks are
//!    persistent vectors. Each match owns its own state and its own copy
//!    of the Horde library.
//!
//! ## Modules
//!
//! - `cards`: Card definitions, records, local and HTTP lookup, the stock catalog
//! - `deck`: Validated decks and text decklists
//! - `core`: RNG, match configuration, per-match state
//! - `rules`: Player turn, mill, Horde turn, terminal checks
//! - `sim`: Match runner, metrics, seed banks, event logs
//! - `search`: Fitness, penalty, evolutionary operators, population search
//! - `logging`: Subscriber setup for the binary

pub mod cards;
pub mod core;
pub mod deck;
pub mod error;
pub mod logging;
pub mod rules;
pub mod search;
pub mod sim;

// Re-export commonly used types
pub use crate::cards::{
    ApiCardSource, Card, CardId, CardRecord, CardRef, CardRegistry, CardSource, Layered, Stats,
};

pub use crate::core::{GameRng, GameState, HordeLibrary, MatchConfig};

pub use crate::deck::{load_deck, load_decklist, Deck};

pub use crate::error::{
    CardLookupError, DeckLegalityError, EmptyMetricsBatch, LoadError, RecordError, ReplayError,
    SearchError, SeedBankError,
};

pub use crate::rules::{MatchEvent, MatchOutcome};

pub use crate::sim::{
    aggregate, run_match, simulate, EventSink, MatchResult, MatchRunner, Metrics, ReplayLog,
    SeedBank,
};

pub use crate::search::{
    fitness, penalty, search, Evaluated, FitnessWeights, PenaltyConfig, PopulationSearch,
    SearchConfig, SearchOutcome,
};
