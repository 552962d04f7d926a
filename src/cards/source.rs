//! Card lookup capability and file loaders.
//!
//! Anything that can resolve a card name implements `CardSource`. Callers
//! receive the source as an argument, so tests substitute an in-memory
//! registry without touching shared state.

use std::path::Path;

use super::definition::{Card, CardRef};
use super::record::CardRecord;
use crate::error::CardLookupError;

/// Name-keyed card lookup.
pub trait CardSource {
    /// Resolve a card by name.
    ///
    /// Returns `CardLookupError::NotFound` for a clean miss; other variants
    /// report transport or parse failures.
    fn lookup(&self, name: &str) -> Result<CardRef, CardLookupError>;
}

impl<S: CardSource + ?Sized> CardSource for &S {
    fn lookup(&self, name: &str) -> Result<CardRef, CardLookupError> {
        (**self).lookup(name)
    }
}

/// Two sources tried in order: `fallback` is asked only when `primary`
/// reports a clean miss. Failures from `primary` are returned as-is.
#[derive(Clone, Debug)]
pub struct Layered<P, F> {
    pub primary: P,
    pub fallback: F,
}

impl<P, F> Layered<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: CardSource, F: CardSource> CardSource for Layered<P, F> {
    fn lookup(&self, name: &str) -> Result<CardRef, CardLookupError> {
        match self.primary.lookup(name) {
            Err(err) if err.is_not_found() => self.fallback.lookup(name),
            result => result,
        }
    }
}

/// Validate a batch of records, keeping their order.
pub fn cards_from_records(
    records: impl IntoIterator<Item = CardRecord>,
) -> Result<Vec<CardRef>, CardLookupError> {
    records
        .into_iter()
        .map(|record| {
            let id = record.id.clone();
            Card::try_from(record)
                .map(Card::into_ref)
                .map_err(|source| CardLookupError::InvalidRecord { id, source })
        })
        .collect()
}

/// Parse a JSON array of card records.
pub fn parse_cards_json(json: &str) -> Result<Vec<CardRef>, CardLookupError> {
    let records: Vec<CardRecord> = serde_json::from_str(json)?;
    cards_from_records(records)
}

/// Read a JSON array of card records from disk, in file order.
///
/// Duplicated entries are kept, so a file can list one record per copy.
pub fn load_cards_json(path: impl AsRef<Path>) -> Result<Vec<CardRef>, CardLookupError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| CardLookupError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_cards_json(&json)
}
