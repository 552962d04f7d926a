//! Terminal states.
//!
//! A match ends at the close of a round when one of these holds, checked
//! in this order: the player is dead, the Horde library is empty, or the
//! round cap has been reached.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, HordeLibrary, MatchConfig};

/// How a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    /// The Horde library ran out with the player still alive.
    PlayerWin,
    /// Player life reached zero or below.
    HordeWin,
    /// Round cap reached with neither side finished.
    Timeout,
}

impl MatchOutcome {
    /// True if the match ended before the round cap.
    #[must_use]
    pub fn is_decisive(self) -> bool {
        !matches!(self, MatchOutcome::Timeout)
    }
}

/// Check whether the match is over after the current round.
///
/// `state.round` must already count the round just played.
#[must_use]
pub fn check_terminal(
    state: &GameState,
    horde: &HordeLibrary,
    config: &MatchConfig,
) -> Option<MatchOutcome> {
    if state.is_player_dead() {
        Some(MatchOutcome::HordeWin)
    } else if horde.is_empty() {
        Some(MatchOutcome::PlayerWin)
    } else if state.round >= config.max_rounds {
        Some(MatchOutcome::Timeout)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::catalog::zombie_token;
    use im::Vector;

    fn horde(n: usize) -> HordeLibrary {
        std::iter::repeat_with(zombie_token).take(n).collect()
    }

    #[test]
    fn test_running_match_is_not_terminal() {
        let mut state = GameState::from_library(Vector::new(), 20);
        state.round = 1;
        assert_eq!(check_terminal(&state, &horde(3), &MatchConfig::default()), None);
    }

    #[test]
    fn test_death_wins_over_empty_horde() {
        let mut state = GameState::from_library(Vector::new(), 0);
        state.round = 1;
        assert_eq!(
            check_terminal(&state, &horde(0), &MatchConfig::default()),
            Some(MatchOutcome::HordeWin)
        );
    }

    #[test]
    fn test_empty_horde_is_player_win() {
        let mut state = GameState::from_library(Vector::new(), 5);
        state.round = 3;
        assert_eq!(
            check_terminal(&state, &horde(0), &MatchConfig::default()),
            Some(MatchOutcome::PlayerWin)
        );
    }

    #[test]
    fn test_round_cap_is_timeout() {
        let mut state = GameState::from_library(Vector::new(), 20);
        state.round = 3;
        let outcome = check_terminal(&state, &horde(3), &MatchConfig::default());
        assert_eq!(outcome, Some(MatchOutcome::Timeout));
        assert!(!MatchOutcome::Timeout.is_decisive());
    }
}
