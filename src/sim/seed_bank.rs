//! Seed banks.
//!
//! A seed bank is a fixed, ordered list of match seeds. Every candidate in
//! a search is evaluated on the same prefix of the same bank so fitness
//! differences come from the decks, not the dice.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SeedBankError;

const BUNDLED_SEEDS: &str = include_str!("../../data/seed_bank.json");

/// Ordered list of match seeds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeedBank {
    seeds: Vec<u64>,
}

impl SeedBank {
    #[must_use]
    pub fn from_seeds(seeds: impl IntoIterator<Item = u64>) -> Self {
        Self {
            seeds: seeds.into_iter().collect(),
        }
    }

    /// Seeds `0..n`.
    #[must_use]
    pub fn sequential(n: usize) -> Self {
        Self::from_seeds(0..n as u64)
    }

    /// The seed bank shipped in `data/seed_bank.json`.
    pub fn bundled() -> Result<Self, SeedBankError> {
        Self::parse_json(BUNDLED_SEEDS)
    }

    /// Parse a JSON array of integers.
    pub fn parse_json(text: &str) -> Result<Self, SeedBankError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a JSON array of integers from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SeedBankError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SeedBankError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_json(&text)
    }

    #[must_use]
    pub fn seeds(&self) -> &[u64] {
        &self.seeds
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    /// The first `n` seeds. Asking for more than the bank holds is an error.
    pub fn prefix(&self, n: usize) -> Result<&[u64], SeedBankError> {
        self.seeds.get(..n).ok_or(SeedBankError::TooShort {
            requested: n,
            available: self.seeds.len(),
        })
    }
}
