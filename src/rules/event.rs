//! Match events.
//!
//! One event is produced per observable sub-step of a round. Events carry
//! card names rather than references so they can be persisted as-is.

use serde::{Deserialize, Serialize};

/// Something that happened during a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MatchEvent {
    /// The player drew a card.
    Draw { card: String },

    /// The player put a card onto the battlefield.
    Play { card: String },

    /// The player's creatures milled the Horde.
    PlayerAttack { damage: u64, horde_library: usize },

    /// The Horde revealed a card and put it onto its battlefield.
    Reveal { card: String },

    /// The Horde's creatures attacked the player.
    HordeAttack { damage: u64, life: i64 },
}

impl MatchEvent {
    /// Short kind name, matching the serialized `event` tag.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            MatchEvent::Draw { .. } => "draw",
            MatchEvent::Play { .. } => "play",
            MatchEvent::PlayerAttack { .. } => "player_attack",
            MatchEvent::Reveal { .. } => "reveal",
            MatchEvent::HordeAttack { .. } => "horde_attack",
        }
    }
}
