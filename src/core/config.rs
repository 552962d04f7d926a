//! Match configuration.
//!
//! `MatchConfig` fixes the parameters every match in a batch shares:
//! the player's starting life and the round cap after which a match is
//! a timeout.

use serde::{Deserialize, Serialize};

/// Default starting life for the player.
pub const DEFAULT_STARTING_LIFE: i64 = 20;

/// Default number of rounds before a match times out.
pub const DEFAULT_MAX_ROUNDS: u32 = 3;

/// Parameters for a single match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Player life at the start of the match.
    pub starting_life: i64,

    /// Round cap. A match still running after this many rounds is a
    /// timeout. Zero plays no rounds at all.
    pub max_rounds: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            starting_life: DEFAULT_STARTING_LIFE,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl MatchConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_starting_life(mut self, life: i64) -> Self {
        self.starting_life = life;
        self
    }

    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }
}
