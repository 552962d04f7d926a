//! Validated decks.

use im::Vector;
use rustc_hash::FxHashMap;

use crate::cards::{CardId, CardRef};
use crate::error::DeckLegalityError;

/// Maximum copies of any card that is not a basic land.
pub const COPY_LIMIT: usize = 4;

/// An ordered, non-empty collection of cards obeying the copy limit.
///
/// Legality is checked once, in `Deck::new`; a `Deck` value is always
/// legal. Cards live in a persistent vector, so cloning a deck (or handing
/// its cards to a match as a fresh library) is O(1).
#[derive(Clone, Debug, PartialEq)]
pub struct Deck {
    cards: Vector<CardRef>,
}

impl Deck {
    /// Validate and wrap a card sequence.
    pub fn new(cards: impl IntoIterator<Item = CardRef>) -> Result<Self, DeckLegalityError> {
        let cards: Vector<CardRef> = cards.into_iter().collect();
        validate(&cards)?;
        Ok(Self { cards })
    }

    /// The cards, top of the deck first.
    #[must_use]
    pub fn cards(&self) -> &Vector<CardRef> {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a constructed deck.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardRef> {
        self.cards.iter()
    }

    /// Number of cards tagged "Land".
    #[must_use]
    pub fn land_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_land()).count()
    }

    /// Number of copies of a card.
    #[must_use]
    pub fn count_of(&self, id: &CardId) -> usize {
        self.cards.iter().filter(|c| &c.id == id).count()
    }

    /// Copies per card id.
    #[must_use]
    pub fn copy_counts(&self) -> FxHashMap<CardId, usize> {
        copy_counts(&self.cards)
    }

    /// Replace the card at `index`, re-checking legality.
    ///
    /// Panics if `index` is out of bounds.
    pub fn with_replaced(&self, index: usize, card: CardRef) -> Result<Self, DeckLegalityError> {
        let mut cards = self.cards.clone();
        cards.set(index, card);
        Self::new(cards)
    }

    /// Cards with their quantities, in order of first appearance.
    #[must_use]
    pub fn decklist(&self) -> Vec<(CardRef, usize)> {
        let mut entries: Vec<(CardRef, usize)> = Vec::new();
        let mut index: FxHashMap<&CardId, usize> = FxHashMap::default();

        for card in &self.cards {
            match index.get(&card.id) {
                Some(&i) => entries[i].1 += 1,
                None => {
                    index.insert(&card.id, entries.len());
                    entries.push((card.clone(), 1));
                }
            }
        }
        entries
    }
}

/// Whether one more copy of `card` fits next to `counts`.
#[must_use]
pub fn within_copy_limit(card: &CardRef, counts: &FxHashMap<CardId, usize>) -> bool {
    card.is_basic_land() || counts.get(&card.id).copied().unwrap_or(0) < COPY_LIMIT
}

fn copy_counts(cards: &Vector<CardRef>) -> FxHashMap<CardId, usize> {
    let mut counts = FxHashMap::default();
    for card in cards {
        *counts.entry(card.id.clone()).or_insert(0) += 1;
    }
    counts
}

fn validate(cards: &Vector<CardRef>) -> Result<(), DeckLegalityError> {
    if cards.is_empty() {
        return Err(DeckLegalityError::Empty);
    }

    let counts = copy_counts(cards);
    // Report the first offender in deck order so errors are deterministic.
    for card in cards {
        let count = counts[&card.id];
        if !card.is_basic_land() && count > COPY_LIMIT {
            return Err(DeckLegalityError::CopyLimit {
                id: card.id.clone(),
                name: card.name.clone(),
                count,
                limit: COPY_LIMIT,
            });
        }
    }
    Ok(())
}
