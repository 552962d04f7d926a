//! Match simulation and batch evaluation.
//!
//! ## Key Types
//!
//! - `MatchRunner`: Plays seeded matches against a fixed Horde
//! - `MatchResult`: Outcome of one match
//! - `Metrics`: Summary of a seed batch
//! - `SeedBank`: Shared, ordered match seeds
//! - `EventSink` / `ReplayLog`: Optional event capture

pub mod event;
pub mod metrics;
pub mod replay;
pub mod runner;
pub mod seed_bank;

pub use event::{EventSink, NullSink};
pub use metrics::{aggregate, aggregate_with_life, Metrics};
pub use replay::{ReplayLog, ReplayRecord};
pub use runner::{run_match, simulate, MatchResult, MatchRunner};
pub use seed_bank::SeedBank;
