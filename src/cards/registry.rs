//! Card registry for lookup by id and by name.
//!
//! The `CardRegistry` stores every card known to a run. It is the
//! in-memory `CardSource` used by decklist loading and by tests.

use std::path::Path;

use rustc_hash::FxHashMap;

use super::definition::{CardId, CardRef};
use super::source::{load_cards_json, CardSource};
use crate::error::CardLookupError;

/// Registry of cards keyed by id, with a case-insensitive name index.
///
/// ## Example
///
/// ```
/// use horde_lab::cards::{Card, CardRegistry, CardSource};
///
/// let mut registry = CardRegistry::new();
/// registry.register(Card::new("forest", "Forest", 0).with_types(["Basic", "Land"]).into_ref());
///
/// let found = registry.lookup("forest").unwrap();
/// assert_eq!(found.name, "Forest");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardRef>,
    by_name: FxHashMap<String, CardId>,
    order: Vec<CardId>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from cards. Later duplicates of an id are ignored.
    pub fn from_cards(cards: impl IntoIterator<Item = CardRef>) -> Self {
        let mut registry = Self::new();
        for card in cards {
            registry.register(card);
        }
        registry
    }

    /// Load a registry from a JSON array of card records.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, CardLookupError> {
        Ok(Self::from_cards(load_cards_json(path)?))
    }

    /// Register a card.
    ///
    /// Returns false if a card with the same id was already registered;
    /// the first registration wins.
    pub fn register(&mut self, card: CardRef) -> bool {
        if self.cards.contains_key(&card.id) {
            return false;
        }
        self.by_name
            .entry(normalize(&card.name))
            .or_insert_with(|| card.id.clone());
        self.order.push(card.id.clone());
        self.cards.insert(card.id.clone(), card);
        true
    }

    /// Get a card by id.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&CardRef> {
        self.cards.get(id)
    }

    /// Get a card by name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&CardRef> {
        self.by_name
            .get(&normalize(name))
            .and_then(|id| self.cards.get(id))
    }

    /// Check if a card id is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over cards in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardRef> {
        self.order.iter().filter_map(|id| self.cards.get(id))
    }

    /// Find cards matching a predicate, in registration order.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardRef>
    where
        F: Fn(&CardRef) -> bool,
    {
        self.iter().filter(move |c| predicate(c))
    }
}

impl CardSource for CardRegistry {
    fn lookup(&self, name: &str) -> Result<CardRef, CardLookupError> {
        self.get_by_name(name)
            .cloned()
            .ok_or_else(|| CardLookupError::NotFound {
                name: name.trim().to_string(),
            })
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
