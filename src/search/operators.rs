//! Evolutionary operators.
//!
//! Every operator takes the search RNG explicitly and is deterministic for
//! a given RNG state. Operators only ever produce legal decks: mutation
//! skips replacements that would break the copy limit, and crossover
//! reports an illegal child instead of repairing it.

use std::sync::Arc;

use super::population::Evaluated;
use crate::cards::CardRef;
use crate::core::GameRng;
use crate::deck::{within_copy_limit, Deck};
use crate::error::DeckLegalityError;

/// Replace between 1 and `max_slots` random slots with random pool cards.
///
/// Deck size never changes. A slot whose only candidates would break the
/// copy limit is left alone, so the result may differ in fewer slots than
/// were drawn. An empty pool or `max_slots == 0` returns the deck as-is.
#[must_use]
pub fn mutate(deck: &Deck, pool: &[CardRef], max_slots: usize, rng: &mut GameRng) -> Deck {
    if pool.is_empty() || max_slots == 0 {
        return deck.clone();
    }

    let slots = rng.gen_range_inclusive(1..=max_slots);
    let mut child = deck.clone();

    for _ in 0..slots {
        let index = rng.gen_range_usize(0..child.len());
        let current = child.cards()[index].id.clone();
        let counts = child.copy_counts();

        let candidates: Vec<&CardRef> = pool
            .iter()
            .filter(|card| card.id != current && within_copy_limit(card, &counts))
            .collect();

        let Some(&card) = rng.choose(&candidates) else {
            continue;
        };

        match child.with_replaced(index, Arc::clone(card)) {
            Ok(next) => child = next,
            Err(err) => tracing::trace!(%err, "mutation rejected"),
        }
    }

    child
}

/// One-point crossover: the head of `first` followed by the tail of
/// `second`.
///
/// The cut is drawn from `0..=min(len)`, so the child has the length of
/// `second`. Children that break the copy limit are returned as errors;
/// callers usually fall back to a parent.
pub fn crossover(first: &Deck, second: &Deck, rng: &mut GameRng) -> Result<Deck, DeckLegalityError> {
    let cut = rng.gen_range_inclusive(0..=first.len().min(second.len()));
    let head = first.cards().iter().take(cut);
    let tail = second.cards().iter().skip(cut);
    Deck::new(head.chain(tail).cloned())
}

/// Draw `size` candidates with replacement and return the index of the
/// fittest. Ties go to the first drawn.
///
/// Panics if `population` is empty.
#[must_use]
pub fn tournament_select(population: &[Evaluated], size: usize, rng: &mut GameRng) -> usize {
    let mut winner = rng.gen_range_usize(0..population.len());
    for _ in 1..size.max(1) {
        let challenger = rng.gen_range_usize(0..population.len());
        if population[challenger].fitness > population[winner].fitness {
            winner = challenger;
        }
    }
    winner
}

/// Number of elites for a population: `ceil(fraction * population)`,
/// clamped to the population.
#[must_use]
pub fn elite_count(population: usize, fraction: f64) -> usize {
    let fraction = fraction.clamp(0.0, 1.0);
    ((population as f64 * fraction).ceil() as usize).min(population)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::catalog::{default_pool, forest, sample_creature, starter_cards};
    use crate::cards::Card;
    use crate::sim::Metrics;

    fn starter() -> Deck {
        Deck::new(starter_cards()).unwrap()
    }

    fn evaluated(fitness: f64) -> Evaluated {
        Evaluated {
            deck: starter(),
            metrics: Metrics {
                winrate: 0.0,
                avg_turns: 0.0,
                avg_damage: 0.0,
            },
            penalty: 0.0,
            fitness,
        }
    }

    #[test]
    fn test_mutate_keeps_size_and_legality() {
        let pool = default_pool();
        let mut rng = GameRng::new(3);
        let mut deck = starter();

        for _ in 0..50 {
            deck = mutate(&deck, &pool, 4, &mut rng);
            assert_eq!(deck.len(), 60);
            assert!(Deck::new(deck.cards().clone()).is_ok());
        }
    }

    #[test]
    fn test_mutate_changes_something() {
        let pool = default_pool();
        let mut rng = GameRng::new(11);
        let base = starter();

        let changed = (0..20).any(|_| mutate(&base, &pool, 2, &mut rng) != base);
        assert!(changed);
    }

    #[test]
    fn test_mutate_deterministic() {
        let pool = default_pool();
        let a = mutate(&starter(), &pool, 3, &mut GameRng::new(5));
        let b = mutate(&starter(), &pool, 3, &mut GameRng::new(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_mutate_no_op_cases() {
        let deck = starter();
        let mut rng = GameRng::new(0);
        assert_eq!(mutate(&deck, &[], 3, &mut rng), deck);
        assert_eq!(mutate(&deck, &default_pool(), 0, &mut rng), deck);
    }

    #[test]
    fn test_mutate_respects_copy_limit() {
        // Only candidate is already at four copies.
        let deck = Deck::new(
            std::iter::repeat_with(sample_creature)
                .take(4)
                .chain(std::iter::repeat_with(forest).take(4)),
        )
        .unwrap();
        let pool = vec![sample_creature()];

        let mut rng = GameRng::new(1);
        for _ in 0..20 {
            let child = mutate(&deck, &pool, 4, &mut rng);
            assert_eq!(child.count_of(&sample_creature().id), 4);
        }
    }

    #[test]
    fn test_crossover_takes_head_and_tail() {
        let lands = Deck::new(vec![forest(); 10]).unwrap();
        let spell = Card::new("bolt", "Bolt", 1).with_types(["Instant"]).into_ref();
        let mixed = Deck::new(
            std::iter::repeat_with(forest)
                .take(6)
                .chain(std::iter::repeat(spell).take(4)),
        )
        .unwrap();

        let mut rng = GameRng::new(9);
        for _ in 0..20 {
            let child = crossover(&lands, &mixed, &mut rng).unwrap();
            assert_eq!(child.len(), 10);
            // The tail of `mixed` holds every spell, so the head is all lands.
            let spells = child.iter().filter(|c| !c.is_land()).count();
            assert!(spells <= 4);
        }
    }

    #[test]
    fn test_crossover_can_be_illegal() {
        let a = Deck::new(vec![sample_creature(); 4]).unwrap();
        let other = Card::new("other", "Other", 1).into_ref();
        let b = Deck::new(
            std::iter::repeat(other)
                .take(4)
                .chain(std::iter::repeat_with(sample_creature).take(4)),
        )
        .unwrap();

        // Any cut in 1..=4 keeps the four heads of `a` and adds more from `b`'s tail.
        let mut rng = GameRng::new(0);
        let results: Vec<_> = (0..30).map(|_| crossover(&a, &b, &mut rng)).collect();
        assert!(results.iter().any(Result::is_err));
        assert!(results.iter().all(|r| match r {
            Ok(deck) => deck.len() == 8,
            Err(err) => matches!(err, DeckLegalityError::CopyLimit { .. }),
        }));
    }

    #[test]
    fn test_tournament_prefers_fitter() {
        let population = vec![evaluated(0.1), evaluated(0.9), evaluated(0.5)];
        let mut rng = GameRng::new(2);

        // With a tournament as large as it gets, the best wins almost always.
        let wins = (0..100)
            .filter(|_| tournament_select(&population, 16, &mut rng) == 1)
            .count();
        assert!(wins > 90);
    }

    #[test]
    fn test_tournament_of_one_is_uniform_index() {
        let population = vec![evaluated(0.0); 3];
        let mut rng = GameRng::new(4);
        for _ in 0..20 {
            assert!(tournament_select(&population, 1, &mut rng) < 3);
        }
    }

    #[test]
    fn test_elite_count() {
        assert_eq!(elite_count(30, 0.2), 6);
        assert_eq!(elite_count(4, 0.2), 1);
        assert_eq!(elite_count(10, 0.0), 0);
        assert_eq!(elite_count(10, 1.5), 10);
        assert_eq!(elite_count(0, 0.5), 0);
    }
}
