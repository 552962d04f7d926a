//! Card definitions - static card data.
//!
//! A `Card` is created once when card data is loaded and shared for the
//! rest of the process as a `CardRef`. Decks, libraries and battlefields
//! hold references, never copies.
//!
//! Ability text is carried as inert data; nothing interprets it.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::record::CardRecord;

/// Type tag for lands.
pub const LAND: &str = "Land";
/// Type tag for basic cards (basic lands are exempt from the copy limit).
pub const BASIC: &str = "Basic";
/// Type tag for tokens.
pub const TOKEN: &str = "Token";
/// Type tag for creatures.
pub const CREATURE: &str = "Creature";

/// Shared handle to an immutable card.
pub type CardRef = Arc<Card>;

/// Unique identifier for a card.
///
/// Identifies the card itself (e.g., "Forest"), not a copy of it in a deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Power and toughness, always set as a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    pub power: u32,
    pub toughness: u32,
}

impl Stats {
    #[must_use]
    pub const fn new(power: u32, toughness: u32) -> Self {
        Self { power, toughness }
    }
}

/// Static card data.
///
/// Equality and hashing use the `id` only. Serde goes through
/// `CardRecord`, so deserialized cards are validated like loaded ones.
///
/// ## Example
///
/// ```
/// use horde_lab::cards::Card;
///
/// let bear = Card::new("bear", "Grizzly Bears", 2)
///     .with_types(["Creature", "Bear"])
///     .with_colors(["G"])
///     .with_stats(2, 2);
///
/// assert_eq!(bear.power(), 2);
/// assert!(!bear.is_land());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "CardRecord", into = "CardRecord")]
pub struct Card {
    pub id: CardId,

    pub name: String,

    /// Converted cost. Not enforced by the simulator.
    pub cost: u32,

    /// Type tags in insertion order, without duplicates.
    pub types: SmallVec<[String; 4]>,

    /// Color symbols in insertion order.
    pub colors: SmallVec<[String; 2]>,

    /// `None` for cards that never deal combat damage.
    pub stats: Option<Stats>,

    /// Ability text. Inert.
    pub text: String,
}

impl Card {
    /// Create a card with no types, colors, stats or text.
    pub fn new(id: impl Into<String>, name: impl Into<String>, cost: u32) -> Self {
        Self {
            id: CardId::new(id),
            name: name.into(),
            cost,
            types: SmallVec::new(),
            colors: SmallVec::new(),
            stats: None,
            text: String::new(),
        }
    }

    /// Add type tags (builder pattern). Repeated tags are ignored.
    #[must_use]
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in types {
            let tag = tag.into();
            if !self.types.contains(&tag) {
                self.types.push(tag);
            }
        }
        self
    }

    /// Add color symbols (builder pattern).
    #[must_use]
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors.extend(colors.into_iter().map(Into::into));
        self
    }

    /// Set power and toughness (builder pattern).
    #[must_use]
    pub fn with_stats(mut self, power: u32, toughness: u32) -> Self {
        self.stats = Some(Stats::new(power, toughness));
        self
    }

    /// Set ability text (builder pattern).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Wrap in a shared handle.
    #[must_use]
    pub fn into_ref(self) -> CardRef {
        Arc::new(self)
    }

    #[must_use]
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }

    #[must_use]
    pub fn is_land(&self) -> bool {
        self.has_type(LAND)
    }

    #[must_use]
    pub fn is_token(&self) -> bool {
        self.has_type(TOKEN)
    }

    /// Basic lands are exempt from the four-copy rule.
    #[must_use]
    pub fn is_basic_land(&self) -> bool {
        self.has_type(BASIC) && self.has_type(LAND)
    }

    /// Combat power, or 0 for cards without stats.
    #[must_use]
    pub fn power(&self) -> u32 {
        self.stats.map_or(0, |s| s.power)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Sum of power over cards that carry stats.
///
/// Widened to `u64` and saturating, so no board of valid cards overflows.
pub fn total_power<'a>(cards: impl IntoIterator<Item = &'a CardRef>) -> u64 {
    cards
        .into_iter()
        .map(|c| u64::from(c.power()))
        .fold(0, u64::saturating_add)
}
