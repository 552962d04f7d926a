//! Error types.
//!
//! Loading errors (card records, lookups, deck legality) surface to the
//! caller that builds decks. The simulation core itself never fails on
//! well-formed decks; only aggregation and search setup can.

use std::path::PathBuf;

use thiserror::Error;

use crate::cards::CardId;

/// A deck violated a composition rule at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckLegalityError {
    #[error("deck must contain at least one card")]
    Empty,

    #[error("card {name} ({id}) appears {count} times, limit is {limit}")]
    CopyLimit {
        id: CardId,
        name: String,
        count: usize,
        limit: usize,
    },
}

/// A raw card record could not be turned into a `Card`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("card record has an empty id")]
    EmptyId,

    #[error("card cost must be non-negative, got {0}")]
    NegativeCost(i64),

    #[error("power and toughness must be set together")]
    PartialStats,

    #[error("power and toughness must be non-negative, got {power}/{toughness}")]
    NegativeStat { power: i64, toughness: i64 },

    #[error("`pt` and `power`/`toughness` disagree")]
    ConflictingStats,
}

/// A card source could not produce a card.
///
/// `NotFound` is a clean miss; every other variant is a transport or
/// parse failure.
#[derive(Debug, Error)]
pub enum CardLookupError {
    #[error("card '{name}' not found")]
    NotFound { name: String },

    #[error("invalid card record '{id}': {source}")]
    InvalidRecord {
        id: String,
        #[source]
        source: RecordError,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse card data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("card lookup for '{name}' failed: {source}")]
    Transport {
        name: String,
        #[source]
        source: reqwest::Error,
    },
}

impl CardLookupError {
    /// True for a clean "no such card" miss.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, CardLookupError::NotFound { .. })
    }
}

/// Aggregation was asked to summarize zero match results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot aggregate an empty batch of match results")]
pub struct EmptyMetricsBatch;

/// Seed bank loading or slicing failed.
#[derive(Debug, Error)]
pub enum SeedBankError {
    #[error("failed to read seed bank {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed bank: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("seed bank holds {available} seeds, {requested} requested")]
    TooShort { requested: usize, available: usize },
}

/// Persisting a replay log failed.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to write replay log: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode replay event: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Loading a deck from external data failed.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Lookup(#[from] CardLookupError),

    #[error(transparent)]
    Legality(#[from] DeckLegalityError),

    #[error("unsupported deck format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Population search could not run.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("population size must be at least 1")]
    EmptyPopulation,

    #[error("generation count must be at least 1")]
    NoGenerations,

    #[error(transparent)]
    SeedBank(#[from] SeedBankError),

    #[error(transparent)]
    Metrics(#[from] EmptyMetricsBatch),

    #[error("template deck is illegal: {0}")]
    Template(#[from] DeckLegalityError),
}
