//! Plain-text decklists.
//!
//! One entry per line, `<quantity> <card name>`:
//!
//! ```text
//! # Mono-green
//! 4 Grizzly Bears
//! 56 Forest
//! ```
//!
//! Blank lines and `#` comments are ignored. Malformed lines are skipped
//! with a warning; unknown card names are errors.

use std::path::Path;

use tracing::warn;

use super::validated::Deck;
use crate::cards::{load_cards_json, CardRef, CardSource};
use crate::error::{CardLookupError, LoadError};

/// One parsed decklist line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecklistEntry {
    pub quantity: usize,
    pub name: String,
}

/// Result of reading a single line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedLine {
    /// Blank or comment.
    Skip,
    Entry(DecklistEntry),
    /// Neither blank nor a valid entry.
    Malformed,
}

/// Parse a single decklist line.
#[must_use]
pub fn parse_line(line: &str) -> ParsedLine {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return ParsedLine::Skip;
    }

    let Some((qty, name)) = line.split_once(char::is_whitespace) else {
        return ParsedLine::Malformed;
    };
    let name = name.trim();
    match qty.parse::<usize>() {
        Ok(quantity) if !name.is_empty() => ParsedLine::Entry(DecklistEntry {
            quantity,
            name: name.to_string(),
        }),
        _ => ParsedLine::Malformed,
    }
}

/// Parse a whole decklist, skipping malformed lines.
pub fn parse_decklist(text: &str) -> Vec<DecklistEntry> {
    text.lines()
        .enumerate()
        .filter_map(|(i, line)| match parse_line(line) {
            ParsedLine::Entry(entry) => Some(entry),
            ParsedLine::Skip => None,
            ParsedLine::Malformed => {
                warn!(line = i + 1, text = line.trim(), "skipping malformed decklist line");
                None
            }
        })
        .collect()
}

/// Resolve entries against a card source, expanding quantities.
pub fn expand_entries(
    entries: &[DecklistEntry],
    source: &dyn CardSource,
) -> Result<Vec<CardRef>, CardLookupError> {
    let mut cards = Vec::new();
    for entry in entries {
        let card = source.lookup(&entry.name)?;
        cards.extend(std::iter::repeat(card).take(entry.quantity));
    }
    Ok(cards)
}

/// Parse, resolve and validate a decklist.
pub fn load_decklist(text: &str, source: &dyn CardSource) -> Result<Deck, LoadError> {
    let cards = expand_entries(&parse_decklist(text), source)?;
    Ok(Deck::new(cards)?)
}

/// Load an ordered card sequence from a `.json` record array or a `.txt`
/// decklist. Text decklists need a card source to resolve names.
pub fn load_card_file(
    path: impl AsRef<Path>,
    source: Option<&dyn CardSource>,
) -> Result<Vec<CardRef>, LoadError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match (extension.as_str(), source) {
        ("json", _) => Ok(load_cards_json(path)?),
        ("txt", Some(source)) => {
            let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(expand_entries(&parse_decklist(&text), source)?)
        }
        ("txt", None) => Err(LoadError::UnsupportedFormat(
            "text decklists need a card database".to_string(),
        )),
        (other, _) => Err(LoadError::UnsupportedFormat(format!(".{other}"))),
    }
}

/// Load and validate a deck file. See `load_card_file`.
pub fn load_deck(path: impl AsRef<Path>, source: Option<&dyn CardSource>) -> Result<Deck, LoadError> {
    Ok(Deck::new(load_card_file(path, source)?)?)
}

/// Render a deck as a text decklist, one line per distinct card in order
/// of first appearance. Loading the output back yields the same card
/// counts.
#[must_use]
pub fn format_decklist(deck: &Deck) -> String {
    deck.decklist()
        .iter()
        .map(|(card, quantity)| format!("{quantity} {}\n", card.name))
        .collect()
}
