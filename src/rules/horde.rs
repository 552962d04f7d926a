//! The Horde's side of a round: mill and the Horde turn.
//!
//! The Horde has no life total. Damage dealt to it mills its library from
//! the top, and it loses once the library is empty. Its own turn reveals
//! cards until a non-token shows up and then attacks with everything it
//! has on the battlefield.

use super::event::MatchEvent;
use crate::cards::CardRef;
use crate::core::{GameRng, GameState, HordeLibrary};

/// What a single Horde turn did.
#[derive(Clone, Debug, PartialEq)]
pub struct HordeTurn {
    /// Cards revealed this turn, in reveal order.
    pub revealed: Vec<CardRef>,

    /// Damage dealt to the player.
    pub damage: u64,
}

impl HordeTurn {
    /// Events for this turn: one `Reveal` per card, then the attack.
    #[must_use]
    pub fn events(&self, life_after: i64) -> Vec<MatchEvent> {
        self.revealed
            .iter()
            .map(|card| MatchEvent::Reveal {
                card: card.name.clone(),
            })
            .chain(std::iter::once(MatchEvent::HordeAttack {
                damage: self.damage,
                life: life_after,
            }))
            .collect()
    }
}

/// Pop cards from the top until a non-token is popped or the library is
/// empty. Every popped card is returned, in order.
pub fn reveal_until_non_token(library: &mut HordeLibrary) -> Vec<CardRef> {
    let mut revealed = Vec::new();
    while let Some(card) = library.pop_front() {
        let stop = !card.is_token();
        revealed.push(card);
        if stop {
            break;
        }
    }
    revealed
}

/// Remove up to `amount` cards from the top. Returns how many were removed.
pub fn mill(library: &mut HordeLibrary, amount: usize) -> usize {
    let removed = amount.min(library.len());
    if removed > 0 {
        *library = library.skip(removed);
    }
    removed
}

/// Play one Horde turn.
///
/// Revealed cards join the Horde battlefield, then every Horde permanent
/// attacks. Permanents stay and attack again next turn, so damage is dealt
/// even when nothing was revealed.
pub fn play_horde_turn(
    state: &mut GameState,
    library: &mut HordeLibrary,
    _rng: &mut GameRng,
) -> HordeTurn {
    let revealed = reveal_until_non_token(library);
    state.horde_battlefield.extend(revealed.iter().cloned());

    let damage = state.horde_power();
    let loss = i64::try_from(damage).unwrap_or(i64::MAX);
    state.life = state.life.saturating_sub(loss);

    HordeTurn { revealed, damage }
}
