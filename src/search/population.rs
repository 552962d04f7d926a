//! Population search over decks.
//!
//! ## Generation loop
//!
//! 1. Evaluate every candidate on the same seed-bank prefix against the
//!    same Horde
//! 2. Score and stable-sort by fitness, best first
//! 3. If generations remain, breed the next population: elites carry over
//!    unchanged, the rest come from tournament selection, crossover and
//!    mutation
//!
//! The search is deterministic: the same template, pool, Horde, seed bank
//! and config always return the same deck.

use super::config::SearchConfig;
use super::fitness::fitness;
use super::operators::{crossover, elite_count, mutate, tournament_select};
use super::stats::GenerationStats;
use crate::cards::catalog::{basic_horde, default_pool, starter_cards};
use crate::cards::CardRef;
use crate::core::GameRng;
use crate::deck::Deck;
use crate::error::SearchError;
use crate::sim::{MatchRunner, Metrics, SeedBank};

/// A candidate deck with its score.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluated {
    pub deck: Deck,
    pub metrics: Metrics,
    pub penalty: f64,
    pub fitness: f64,
}

/// Result of a finished search.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Best candidate of the last evaluated generation.
    pub best: Evaluated,

    /// The last evaluated generation, best first.
    pub final_population: Vec<Evaluated>,

    /// One entry per evaluated generation.
    pub history: Vec<GenerationStats>,
}

/// Evolves a population of decks toward higher fitness.
#[derive(Clone, Debug)]
pub struct PopulationSearch {
    template: Deck,
    pool: Vec<CardRef>,
    runner: MatchRunner,
    seeds: Vec<u64>,
    config: SearchConfig,
}

impl PopulationSearch {
    /// Set up a search.
    ///
    /// Fails if the population or generation count is zero, or if the
    /// seed bank is shorter than `config.seed_count`.
    pub fn new(
        template: Deck,
        pool: Vec<CardRef>,
        horde: impl IntoIterator<Item = CardRef>,
        seed_bank: &SeedBank,
        config: SearchConfig,
    ) -> Result<Self, SearchError> {
        if config.population_size == 0 {
            return Err(SearchError::EmptyPopulation);
        }
        if config.generations == 0 {
            return Err(SearchError::NoGenerations);
        }

        let seeds = seed_bank.prefix(config.seed_count)?.to_vec();
        let runner = MatchRunner::new(horde).with_config(config.match_config);

        Ok(Self {
            template,
            pool,
            runner,
            seeds,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Seeds every candidate is evaluated on.
    #[must_use]
    pub fn seeds(&self) -> &[u64] {
        &self.seeds
    }

    /// Run every generation and return the best candidate of the last one.
    pub fn run(&self) -> Result<SearchOutcome, SearchError> {
        let mut rng = GameRng::new(self.config.seed);
        let mut population = self.initial_population(&mut rng.fork());
        let mut history = Vec::with_capacity(self.config.generations);

        for generation in 0..self.config.generations {
            let ranked = self.evaluate(&population)?;
            let stats = GenerationStats::from_fitness(generation, ranked.iter().map(|e| e.fitness));
            tracing::info!(
                generation,
                best = stats.best,
                mean = stats.mean,
                worst = stats.worst,
                "generation evaluated"
            );
            history.push(stats);

            if generation + 1 == self.config.generations {
                let best = ranked[0].clone();
                return Ok(SearchOutcome {
                    best,
                    final_population: ranked,
                    history,
                });
            }

            population = self.breed(&ranked, &mut rng.fork());
        }

        // `new` guarantees at least one generation.
        Err(SearchError::NoGenerations)
    }

    /// Score one deck on the shared seeds.
    pub fn evaluate_deck(&self, deck: &Deck) -> Result<Evaluated, SearchError> {
        let metrics = self.runner.evaluate(deck, &self.seeds, None)?;
        let penalty = self.config.penalty.score(deck);
        Ok(Evaluated {
            deck: deck.clone(),
            metrics,
            penalty,
            fitness: fitness(&metrics, penalty, &self.config.weights),
        })
    }

    /// The template first, then mutated copies of it.
    fn initial_population(&self, rng: &mut GameRng) -> Vec<Deck> {
        let mut population = Vec::with_capacity(self.config.population_size);
        population.push(self.template.clone());
        while population.len() < self.config.population_size {
            population.push(mutate(&self.template, &self.pool, self.config.max_mutations, rng));
        }
        population
    }

    /// Evaluate and sort best first. Equal scores keep their order.
    fn evaluate(&self, population: &[Deck]) -> Result<Vec<Evaluated>, SearchError> {
        let mut ranked = population
            .iter()
            .map(|deck| self.evaluate_deck(deck))
            .collect::<Result<Vec<_>, _>>()?;
        ranked.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
        Ok(ranked)
    }

    fn breed(&self, ranked: &[Evaluated], rng: &mut GameRng) -> Vec<Deck> {
        let size = self.config.population_size;
        let elites = elite_count(size, self.config.elite_fraction);

        let mut next: Vec<Deck> = ranked.iter().take(elites).map(|e| e.deck.clone()).collect();

        while next.len() < size {
            let first = tournament_select(ranked, self.config.tournament_size, rng);
            let child = if rng.gen_bool(self.config.crossover_rate) {
                let second = tournament_select(ranked, self.config.tournament_size, rng);
                match crossover(&ranked[first].deck, &ranked[second].deck, rng) {
                    Ok(child) => child,
                    Err(err) => {
                        tracing::trace!(%err, "crossover rejected, keeping fitter parent");
                        ranked[first.min(second)].deck.clone()
                    }
                }
            } else {
                ranked[first].deck.clone()
            };
            next.push(mutate(&child, &self.pool, self.config.max_mutations, rng));
        }

        next
    }
}

/// Search from the starter deck against the basic Horde with default
/// settings and the first seeds of the bundled seed bank.
pub fn search(population_size: usize, generations: usize) -> Result<SearchOutcome, SearchError> {
    let config = SearchConfig::new(population_size, generations);
    let seed_bank = SeedBank::bundled()?;
    let template = Deck::new(starter_cards())?;
    PopulationSearch::new(template, default_pool(), basic_horde(), &seed_bank, config)?.run()
}
