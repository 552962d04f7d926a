//! Soft deck-construction penalty.
//!
//! Pushes candidates toward 60 cards and at least 20 lands without ever
//! rejecting one outright.

use serde::{Deserialize, Serialize};

use crate::deck::Deck;

/// Penalty targets and per-unit costs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PenaltyConfig {
    pub target_size: usize,
    pub min_lands: usize,
    /// Cost per card away from `target_size`, in either direction.
    pub size_weight: f64,
    /// Cost per land short of `min_lands`.
    pub land_weight: f64,
}

impl Default for PenaltyConfig {
    fn default() -> Self {
        Self {
            target_size: 60,
            min_lands: 20,
            size_weight: 0.1,
            land_weight: 0.1,
        }
    }
}

impl PenaltyConfig {
    /// Penalty for `deck`, always `>= 0` for non-negative weights.
    #[must_use]
    pub fn score(&self, deck: &Deck) -> f64 {
        let size_diff = deck.len().abs_diff(self.target_size);
        let missing_lands = self.min_lands.saturating_sub(deck.land_count());
        self.size_weight * size_diff as f64 + self.land_weight * missing_lands as f64
    }
}

/// Penalty with the default targets.
#[must_use]
pub fn penalty(deck: &Deck) -> f64 {
    PenaltyConfig::default().score(deck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::catalog::{forest, sample_creature, starter_cards};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_starter_has_no_penalty() {
        let deck = Deck::new(starter_cards()).unwrap();
        assert_eq!(penalty(&deck), 0.0);
    }

    #[test]
    fn test_small_deck_without_lands() {
        let deck = Deck::new(vec![sample_creature(); 4]).unwrap();
        // 56 cards short and 20 lands short.
        assert!(close(penalty(&deck), 5.6 + 2.0));
    }

    #[test]
    fn test_oversized_deck() {
        let deck = Deck::new(vec![forest(); 70]).unwrap();
        assert!(close(penalty(&deck), 1.0));
    }

    #[test]
    fn test_custom_targets() {
        let config = PenaltyConfig {
            target_size: 40,
            min_lands: 17,
            ..PenaltyConfig::default()
        };
        let deck = Deck::new(vec![forest(); 40]).unwrap();
        assert_eq!(config.score(&deck), 0.0);
    }
}
