//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::state::GameState;
use crate::types::Player;

/// Invariant: Players alternate turns.
///
/// The move log must show X, O, X, O, ... with X first, and `to_move`
/// must agree with the log's parity.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if let Some(first) = history.first()
            && first.player != Player::X
        {
            return false;
        }

        for window in history.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };

        state.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
