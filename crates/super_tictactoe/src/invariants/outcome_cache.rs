//! Outcome cache invariant: cached outcomes match re-evaluation.

use super::Invariant;
use crate::rules;
use crate::state::GameState;

/// Invariant: `sub_outcomes` and `overall` are honest caches.
///
/// Each cached sub-board outcome equals the win detector's evaluation of
/// that board's cells, and the overall outcome equals the meta-grid
/// evaluation of the cached sub-board outcomes. Because decided boards
/// accept no further moves, a cache that matches re-evaluation has also
/// never changed after first becoming decided.
pub struct OutcomeCacheInvariant;

impl Invariant<GameState> for OutcomeCacheInvariant {
    fn holds(state: &GameState) -> bool {
        for (board, cached) in state.boards().iter().zip(state.sub_outcomes()) {
            if rules::evaluate(board.squares()) != *cached {
                return false;
            }
        }

        rules::evaluate_meta(state.sub_outcomes()) == state.outcome()
    }

    fn description() -> &'static str {
        "Cached outcomes match win detector re-evaluation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Outcome, Player};

    #[test]
    fn test_fresh_game_holds() {
        let state = GameState::new();
        assert!(OutcomeCacheInvariant::holds(&state));
    }

    #[test]
    fn test_holds_after_sub_board_win() {
        // X takes the top row of the top-left board, O shuttled elsewhere.
        let state = GameState::replay(&[
            (Position::TopLeft, Position::TopLeft),
            (Position::TopLeft, Position::BottomRight),
            (Position::BottomRight, Position::TopCenter),
            (Position::TopCenter, Position::TopLeft),
            (Position::TopLeft, Position::TopCenter),
            (Position::TopCenter, Position::TopRight),
            (Position::TopRight, Position::MiddleRight),
            (Position::MiddleRight, Position::TopLeft),
            (Position::TopLeft, Position::TopRight),
        ])
        .unwrap();

        assert_eq!(
            state.sub_outcome(Position::TopLeft),
            Outcome::Won(Player::X)
        );
        assert!(OutcomeCacheInvariant::holds(&state));
    }
}
