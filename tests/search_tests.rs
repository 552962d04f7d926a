//! Population search integration tests.

use horde_lab::cards::catalog::{basic_horde, default_pool, starter_cards};
use horde_lab::core::GameRng;
use horde_lab::search::{
    crossover, fitness, mutate, search, FitnessWeights, PopulationSearch, SearchConfig,
};
use horde_lab::sim::Metrics;
use horde_lab::{Deck, SearchError, SeedBank};

fn template() -> Deck {
    Deck::new(starter_cards()).unwrap()
}

fn run(config: SearchConfig) -> horde_lab::SearchOutcome {
    PopulationSearch::new(template(), default_pool(), basic_horde(), &SeedBank::sequential(5), config)
        .unwrap()
        .run()
        .unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_single_generation_returns_initial_best() {
    let outcome = search(4, 1).unwrap();

    assert_eq!(outcome.history.len(), 1);
    assert_eq!(outcome.final_population.len(), 4);
    for other in &outcome.final_population {
        assert!(outcome.best.fitness >= other.fitness);
    }
    assert_eq!(outcome.best, outcome.final_population[0]);
}

#[test]
fn test_single_generation_best_is_from_initial_population() {
    // With one generation nothing is bred, so every candidate is either the
    // template or one mutation pass away from it.
    let outcome = search(4, 1).unwrap();
    let template = template();

    assert!(outcome
        .final_population
        .iter()
        .any(|e| e.deck == template));
    assert_eq!(outcome.best.deck.len(), template.len());
}

#[test]
fn test_best_deck_size_is_reported() {
    let outcome = search(6, 2).unwrap();
    assert_eq!(outcome.best.deck.len(), 60);
}

#[test]
fn test_fitness_scenario() {
    let metrics = Metrics {
        winrate: 0.5,
        avg_turns: 3.0,
        avg_damage: 15.0,
    };
    let score = fitness(&metrics, 0.0, &FitnessWeights::default());
    assert!((score - (0.5 - 0.3 - 1.5)).abs() < 1e-12);
}

// =============================================================================
// Determinism Tests
// =============================================================================

#[test]
fn test_search_deterministic() {
    let config = SearchConfig::new(6, 3).with_seed(1234);
    let a = run(config.clone());
    let b = run(config);

    assert_eq!(a.best, b.best);
    assert_eq!(a.history, b.history);
}

#[test]
fn test_operators_deterministic() {
    let pool = default_pool();
    let a = mutate(&template(), &pool, 5, &mut GameRng::new(8));
    let b = mutate(&template(), &pool, 5, &mut GameRng::new(8));
    assert_eq!(a, b);

    let x = crossover(&a, &template(), &mut GameRng::new(2));
    let y = crossover(&b, &template(), &mut GameRng::new(2));
    assert_eq!(x, y);
}

// =============================================================================
// Progress and Errors
// =============================================================================

#[test]
fn test_elites_never_regress() {
    let outcome = run(SearchConfig::new(8, 4).with_elite_fraction(0.25));
    // The best individual is always carried over and every candidate plays
    // the same seeds, so the best score can only stay or rise.
    for pair in outcome.history.windows(2) {
        assert!(pair[1].best >= pair[0].best);
    }
}

#[test]
fn test_invalid_setups() {
    assert!(matches!(search(0, 1), Err(SearchError::EmptyPopulation)));
    assert!(matches!(search(1, 0), Err(SearchError::NoGenerations)));

    let err = PopulationSearch::new(
        template(),
        default_pool(),
        basic_horde(),
        &SeedBank::sequential(5),
        SearchConfig::new(2, 1).with_seed_count(0),
    )
    .unwrap()
    .run()
    .unwrap_err();
    assert!(matches!(err, SearchError::Metrics(_)));
}
