//! Decks: validated card sequences and decklist loading.
//!
//! ## Key Types
//!
//! - `Deck`: Non-empty card sequence obeying the four-copy rule
//! - `DecklistEntry`: One `<quantity> <name>` line of a text decklist

pub mod decklist;
pub mod validated;

pub use decklist::{
    expand_entries, format_decklist, load_card_file, load_deck, load_decklist, parse_decklist,
    parse_line, DecklistEntry, ParsedLine,
};
pub use validated::{within_copy_limit, Deck, COPY_LIMIT};
