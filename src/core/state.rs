//! Per-match game state.
//!
//! ## GameState
//!
//! Everything one match mutates on the player's side of the table, plus
//! the Horde's battlefield:
//! - Library (front = top) and hand
//! - Player battlefield and a separate Horde battlefield
//! - Life total and round counter
//!
//! The Horde's library lives outside the state as a `HordeLibrary` so the
//! turn functions can take it explicitly.
//!
//! A `GameState` belongs to exactly one match. Libraries are persistent
//! vectors, so building one from a `Deck` shares structure with the deck
//! instead of copying it, while mutations stay private to the match.

use im::Vector;

use super::config::MatchConfig;
use crate::cards::{total_power, CardRef};
use crate::deck::Deck;

/// The Horde's library, front = top.
pub type HordeLibrary = Vector<CardRef>;

/// Mutable state of one match.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Player library, top card first.
    pub library: Vector<CardRef>,

    /// Player hand in draw order. Scans for plays run front to back.
    pub hand: Vec<CardRef>,

    /// Permanents the player has put onto the battlefield.
    pub battlefield: Vec<CardRef>,

    /// Permanents the Horde has put onto the battlefield.
    pub horde_battlefield: Vec<CardRef>,

    /// Player life. May go negative.
    pub life: i64,

    /// Rounds completed so far.
    pub round: u32,

    /// Horde cards milled so far.
    pub milled: usize,
}

impl GameState {
    /// Fresh state with the deck as library and default starting life.
    #[must_use]
    pub fn new(deck: &Deck) -> Self {
        Self::with_config(deck, &MatchConfig::default())
    }

    /// Fresh state with the deck as library.
    #[must_use]
    pub fn with_config(deck: &Deck, config: &MatchConfig) -> Self {
        Self::from_library(deck.cards().clone(), config.starting_life)
    }

    /// Fresh state from an arbitrary library, which may be empty.
    #[must_use]
    pub fn from_library(library: Vector<CardRef>, life: i64) -> Self {
        Self {
            library,
            hand: Vec::new(),
            battlefield: Vec::new(),
            horde_battlefield: Vec::new(),
            life,
            round: 0,
            milled: 0,
        }
    }

    /// Total power of the player's permanents.
    #[must_use]
    pub fn player_power(&self) -> u64 {
        total_power(&self.battlefield)
    }

    /// Total power of the Horde's permanents.
    #[must_use]
    pub fn horde_power(&self) -> u64 {
        total_power(&self.horde_battlefield)
    }

    /// True once life has dropped to zero or below.
    #[must_use]
    pub fn is_player_dead(&self) -> bool {
        self.life <= 0
    }
}
