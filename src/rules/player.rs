//! The player's turn.
//!
//! A fixed heuristic, not a decision maker: draw, play the first land in
//! hand, then play the first non-land. Costs are not paid and nothing on
//! the battlefield is reconsidered. No randomness is consumed.

use super::event::MatchEvent;
use crate::cards::CardRef;
use crate::core::GameState;

/// Play one player turn and return what happened.
///
/// Missing cards (empty library, no land, no spell) skip the step.
pub fn play_player_turn(state: &mut GameState) -> Vec<MatchEvent> {
    let mut events = Vec::with_capacity(3);

    if let Some(card) = state.library.pop_front() {
        events.push(MatchEvent::Draw {
            card: card.name.clone(),
        });
        state.hand.push(card);
    }

    if let Some(event) = play_first(state, |c| c.is_land()) {
        events.push(event);
    }

    if let Some(event) = play_first(state, |c| !c.is_land()) {
        events.push(event);
    }

    events
}

/// Move the first matching card in hand onto the battlefield.
fn play_first(state: &mut GameState, matches: impl Fn(&CardRef) -> bool) -> Option<MatchEvent> {
    let index = state.hand.iter().position(matches)?;
    let card = state.hand.remove(index);
    let event = MatchEvent::Play {
        card: card.name.clone(),
    };
    state.battlefield.push(card);
    Some(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::catalog::{forest, sample_creature};
    use crate::cards::Card;
    use im::Vector;

    fn state_with(library: Vec<CardRef>) -> GameState {
        GameState::from_library(library.into_iter().collect(), 20)
    }

    #[test]
    fn test_draw_then_play_land() {
        let mut state = state_with(vec![forest(), sample_creature()]);
        let events = play_player_turn(&mut state);

        assert_eq!(
            events,
            vec![
                MatchEvent::Draw { card: "Forest".into() },
                MatchEvent::Play { card: "Forest".into() },
            ]
        );
        assert!(state.hand.is_empty());
        assert_eq!(state.battlefield.len(), 1);
        assert_eq!(state.library.len(), 1);
    }

    #[test]
    fn test_plays_one_land_and_one_spell() {
        let mut state = state_with(vec![sample_creature()]);
        state.hand = vec![forest(), forest(), sample_creature()];

        let events = play_player_turn(&mut state);

        assert_eq!(events.len(), 3);
        assert_eq!(events[1], MatchEvent::Play { card: "Forest".into() });
        assert_eq!(events[2], MatchEvent::Play { card: "Sample Creature".into() });
        assert_eq!(state.battlefield.len(), 2);
        // One forest and the second creature stay behind.
        assert_eq!(state.hand.len(), 2);
        assert!(state.hand[0].is_land());
    }

    #[test]
    fn test_first_match_in_hand_order() {
        let first = Card::new("x", "First Spell", 1).with_types(["Sorcery"]).into_ref();
        let second = Card::new("y", "Second Spell", 1).with_types(["Sorcery"]).into_ref();

        let mut state = state_with(Vec::new());
        state.hand = vec![first, second];
        play_player_turn(&mut state);

        assert_eq!(state.battlefield[0].name, "First Spell");
        assert_eq!(state.hand[0].name, "Second Spell");
    }

    #[test]
    fn test_empty_everything_is_a_no_op() {
        let mut state = GameState::from_library(Vector::new(), 20);
        let events = play_player_turn(&mut state);

        assert!(events.is_empty());
        assert!(state.battlefield.is_empty());
    }

    #[test]
    fn test_battlefield_not_reconsidered() {
        let mut state = state_with(Vec::new());
        state.battlefield = vec![sample_creature()];
        play_player_turn(&mut state);
        assert_eq!(state.battlefield.len(), 1);
    }
}
