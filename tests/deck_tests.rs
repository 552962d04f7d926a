//! Deck construction and legality tests.

use proptest::prelude::*;

use horde_lab::cards::catalog::{forest, sample_creature, starter_cards};
use horde_lab::cards::{Card, CardRef};
use horde_lab::deck::COPY_LIMIT;
use horde_lab::search::penalty;
use horde_lab::{Deck, DeckLegalityError};

fn nonbasic(id: &str) -> CardRef {
    Card::new(id, id, 1).with_types(["Creature"]).with_stats(1, 1).into_ref()
}

fn nonbasic_land(id: &str) -> CardRef {
    Card::new(id, id, 0).with_types(["Land"]).into_ref()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_starter_deck_is_legal() {
    let deck = Deck::new(starter_cards()).unwrap();
    assert_eq!(deck.len(), 60);
    assert_eq!(deck.land_count(), 56);
    assert_eq!(deck.count_of(&sample_creature().id), 4);
}

#[test]
fn test_fifth_copy_is_rejected() {
    let cards: Vec<CardRef> = std::iter::repeat_with(sample_creature).take(5).collect();
    let err = Deck::new(cards).unwrap_err();

    match err {
        DeckLegalityError::CopyLimit { count, limit, .. } => {
            assert_eq!(count, 5);
            assert_eq!(limit, COPY_LIMIT);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_deck_is_rejected() {
    assert_eq!(Deck::new(Vec::<CardRef>::new()), Err(DeckLegalityError::Empty));
}

#[test]
fn test_nonbasic_land_is_limited() {
    let cards: Vec<CardRef> = (0..5).map(|_| nonbasic_land("wasteland")).collect();
    assert!(Deck::new(cards).is_err());
}

#[test]
fn test_basic_lands_are_unlimited() {
    let deck = Deck::new(std::iter::repeat_with(forest).take(200)).unwrap();
    assert_eq!(deck.len(), 200);
}

#[test]
fn test_penalty_pure_and_nonnegative() {
    let deck = Deck::new(vec![nonbasic("a"), forest()]).unwrap();
    let first = penalty(&deck);
    assert_eq!(first, penalty(&deck));
    assert!(first >= 0.0);
}

// =============================================================================
// Legality Property
// =============================================================================

/// Cards a generated deck draws from: two basics, two non-basics.
fn palette() -> Vec<CardRef> {
    vec![forest(), nonbasic("bear"), nonbasic("elf"), nonbasic_land("grove")]
}

proptest! {
    #[test]
    fn prop_construction_fails_iff_rule_broken(picks in prop::collection::vec(0usize..4, 0..24)) {
        let palette = palette();
        let cards: Vec<CardRef> = picks.iter().map(|&i| palette[i].clone()).collect();

        let over_limit = (1..4).any(|i| picks.iter().filter(|&&p| p == i).count() > COPY_LIMIT);
        let expected_ok = !cards.is_empty() && !over_limit;

        prop_assert_eq!(Deck::new(cards).is_ok(), expected_ok);
    }

    #[test]
    fn prop_penalty_nonnegative(lands in 0usize..80, spells in 1usize..5) {
        let cards = std::iter::repeat_with(forest)
            .take(lands)
            .chain(std::iter::repeat_with(|| nonbasic("bear")).take(spells));
        let deck = Deck::new(cards).unwrap();
        prop_assert!(penalty(&deck) >= 0.0);
    }
}
