//! Active board invariant: routing output matches the last move.

use super::Invariant;
use crate::rules;
use crate::state::GameState;
use crate::types::ActiveBoard;

/// Invariant: `active_board` is consistent with the routing rule.
///
/// A fresh game is unconstrained. Otherwise the active board equals the
/// router's output for the last played cell, which also guarantees that
/// a pinned board is never a decided one.
pub struct ActiveBoardInvariant;

impl Invariant<GameState> for ActiveBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let expected = match state.history().last() {
            None => ActiveBoard::Any,
            Some(mov) => rules::next_active(state.sub_outcomes(), mov.cell),
        };

        if state.active_board() != expected {
            return false;
        }

        // A pinned board must be undecided
        match state.active_board() {
            ActiveBoard::Any => true,
            ActiveBoard::Board(board) => !state.sub_outcome(board).is_decided(),
        }
    }

    fn description() -> &'static str {
        "Active board matches the routing rule and is undecided"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_fresh_game_holds() {
        let state = GameState::new();
        assert!(ActiveBoardInvariant::holds(&state));
        assert_eq!(state.active_board(), ActiveBoard::Any);
    }

    #[test]
    fn test_pinned_board_matches_last_cell() {
        let state = GameState::new()
            .apply_move(Position::TopLeft, Position::BottomCenter)
            .unwrap();
        assert!(ActiveBoardInvariant::holds(&state));
        assert_eq!(
            state.active_board(),
            ActiveBoard::Board(Position::BottomCenter)
        );
    }
}
