//! Turn rules for the Horde variant.
//!
//! ## Key Types
//!
//! - `MatchEvent`: One observable sub-step of a round
//! - `HordeTurn`: What the Horde revealed and how hard it hit
//! - `MatchOutcome`: How a match ended
//!
//! A round is always: player turn, mill the Horde by the player's power,
//! Horde turn. The runner in `sim` drives rounds; these functions only
//! transform state.

pub mod event;
pub mod horde;
pub mod outcome;
pub mod player;

pub use event::MatchEvent;
pub use horde::{mill, play_horde_turn, reveal_until_non_token, HordeTurn};
pub use outcome::{check_terminal, MatchOutcome};
pub use player::play_player_turn;
