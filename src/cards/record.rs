//! Untyped card records and their validating conversion into `Card`.
//!
//! Records follow the JSON layout of the card data files:
//!
//! ```json
//! {"id": "token", "name": "Zombie Token", "cmc": 0,
//!  "types": ["Token", "Creature"], "colors": [], "pt": [2, 2], "text_dsl": ""}
//! ```
//!
//! `cost`/`text` are accepted as aliases, and `power`/`toughness` may be
//! given as separate fields instead of `pt`.

use serde::{Deserialize, Serialize};

use super::definition::{Card, Stats};
use crate::error::RecordError;

/// A card as it appears in external data, before validation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: String,

    pub name: String,

    #[serde(default, alias = "cost")]
    pub cmc: i64,

    #[serde(default)]
    pub types: Vec<String>,

    #[serde(default)]
    pub colors: Vec<String>,

    #[serde(default)]
    pub pt: Option<(i64, i64)>,

    #[serde(default)]
    pub power: Option<i64>,

    #[serde(default)]
    pub toughness: Option<i64>,

    #[serde(default, alias = "text")]
    pub text_dsl: String,
}

impl CardRecord {
    fn stats(&self) -> Result<Option<Stats>, RecordError> {
        let split = match (self.power, self.toughness) {
            (Some(p), Some(t)) => Some((p, t)),
            (None, None) => None,
            _ => return Err(RecordError::PartialStats),
        };

        let pair = match (self.pt, split) {
            (Some(a), Some(b)) if a != b => return Err(RecordError::ConflictingStats),
            (Some(a), _) => Some(a),
            (None, b) => b,
        };

        pair.map(|(power, toughness)| {
            match (u32::try_from(power), u32::try_from(toughness)) {
                (Ok(p), Ok(t)) => Ok(Stats::new(p, t)),
                _ => Err(RecordError::NegativeStat { power, toughness }),
            }
        })
        .transpose()
    }
}

impl TryFrom<CardRecord> for Card {
    type Error = RecordError;

    fn try_from(record: CardRecord) -> Result<Self, Self::Error> {
        if record.id.trim().is_empty() {
            return Err(RecordError::EmptyId);
        }
        let cost = u32::try_from(record.cmc).map_err(|_| RecordError::NegativeCost(record.cmc))?;
        let stats = record.stats()?;

        let mut card = Card::new(record.id, record.name, cost)
            .with_types(record.types)
            .with_colors(record.colors)
            .with_text(record.text_dsl);
        card.stats = stats;
        Ok(card)
    }
}

impl From<Card> for CardRecord {
    fn from(card: Card) -> Self {
        Self::from(&card)
    }
}

impl From<&Card> for CardRecord {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id.to_string(),
            name: card.name.clone(),
            cmc: i64::from(card.cost),
            types: card.types.to_vec(),
            colors: card.colors.to_vec(),
            pt: card
                .stats
                .map(|s| (i64::from(s.power), i64::from(s.toughness))),
            power: None,
            toughness: None,
            text_dsl: card.text.clone(),
        }
    }
}
