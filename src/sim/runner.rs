//! Match execution.
//!
//! ## Round order
//!
//! Each round is: player turn, mill the Horde by the player's power, Horde
//! turn. After every round the terminal checks run in order: player dead,
//! Horde library empty, round cap reached.
//!
//! A match owns its `GameState` and its copy of the Horde library. Decks
//! and Horde libraries are persistent vectors, so the per-match copies are
//! cheap and the inputs are never mutated.

use serde::{Deserialize, Serialize};

use super::event::{EventSink, NullSink};
use super::metrics::{aggregate_with_life, Metrics};
use crate::cards::CardRef;
use crate::core::{GameRng, GameState, HordeLibrary, MatchConfig};
use crate::deck::Deck;
use crate::error::EmptyMetricsBatch;
use crate::rules::{
    check_terminal, mill, play_horde_turn, play_player_turn, MatchEvent, MatchOutcome,
};

/// Result of one match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Player life is above zero at the end.
    pub won: bool,
    /// Final life total.
    pub life: i64,
    /// Rounds played.
    pub turns: u32,
    /// Which terminal state ended the match.
    pub outcome: MatchOutcome,
}

/// Play one match with a fresh state and a private copy of the Horde.
///
/// The same deck, Horde, seed and config always give the same events and
/// the same result.
pub fn run_match(
    deck: &Deck,
    horde: &HordeLibrary,
    seed: u64,
    config: &MatchConfig,
    sink: Option<&mut dyn EventSink>,
) -> MatchResult {
    match sink {
        Some(sink) => play_match(deck, horde, seed, config, sink),
        None => play_match(deck, horde, seed, config, &mut NullSink),
    }
}

fn play_match(
    deck: &Deck,
    horde: &HordeLibrary,
    seed: u64,
    config: &MatchConfig,
    sink: &mut dyn EventSink,
) -> MatchResult {
    let mut rng = GameRng::new(seed);
    let mut state = GameState::with_config(deck, config);
    let mut library = horde.clone();

    sink.begin_match(seed);

    let outcome = loop {
        if state.round >= config.max_rounds {
            // Only reachable with a cap of zero.
            break MatchOutcome::Timeout;
        }

        for event in play_player_turn(&mut state) {
            sink.record(event);
        }

        let damage = state.player_power();
        state.milled += mill(&mut library, usize::try_from(damage).unwrap_or(usize::MAX));
        sink.record(MatchEvent::PlayerAttack {
            damage,
            horde_library: library.len(),
        });

        let turn = play_horde_turn(&mut state, &mut library, &mut rng);
        for event in turn.events(state.life) {
            sink.record(event);
        }

        state.round += 1;
        if let Some(outcome) = check_terminal(&state, &library, config) {
            break outcome;
        }
    };

    let result = MatchResult {
        won: state.life > 0,
        life: state.life,
        turns: state.round,
        outcome,
    };

    tracing::debug!(
        seed,
        won = result.won,
        life = result.life,
        turns = result.turns,
        milled = state.milled,
        outcome = ?result.outcome,
        "match finished"
    );

    result
}

/// Runs batches of matches against a fixed Horde.
#[derive(Clone, Debug)]
pub struct MatchRunner {
    horde: HordeLibrary,
    config: MatchConfig,
}

impl MatchRunner {
    /// Runner for the given Horde cards, top card first.
    #[must_use]
    pub fn new(horde: impl IntoIterator<Item = CardRef>) -> Self {
        Self {
            horde: horde.into_iter().collect(),
            config: MatchConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn horde(&self) -> &HordeLibrary {
        &self.horde
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play a single match.
    pub fn run(&self, deck: &Deck, seed: u64, sink: Option<&mut dyn EventSink>) -> MatchResult {
        run_match(deck, &self.horde, seed, &self.config, sink)
    }

    /// Play one match per seed, in seed order.
    pub fn run_batch(
        &self,
        deck: &Deck,
        seeds: &[u64],
        sink: Option<&mut dyn EventSink>,
    ) -> Vec<MatchResult> {
        let mut discard = NullSink;
        let sink: &mut dyn EventSink = match sink {
            Some(sink) => sink,
            None => &mut discard,
        };

        seeds
            .iter()
            .map(|&seed| play_match(deck, &self.horde, seed, &self.config, &mut *sink))
            .collect()
    }

    /// Play one match per seed and aggregate the results.
    pub fn evaluate(
        &self,
        deck: &Deck,
        seeds: &[u64],
        sink: Option<&mut dyn EventSink>,
    ) -> Result<Metrics, EmptyMetricsBatch> {
        let results = self.run_batch(deck, seeds, sink);
        aggregate_with_life(&results, self.config.starting_life)
    }
}

/// Simulate `deck` against `horde` on every seed and aggregate.
///
/// An empty seed list is an error rather than a zero-filled summary.
pub fn simulate(
    deck: &Deck,
    horde: &[CardRef],
    seeds: &[u64],
    config: &MatchConfig,
    sink: Option<&mut dyn EventSink>,
) -> Result<Metrics, EmptyMetricsBatch> {
    MatchRunner::new(horde.iter().cloned())
        .with_config(*config)
        .evaluate(deck, seeds, sink)
}
