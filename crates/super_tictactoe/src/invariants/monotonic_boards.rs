//! Monotonic boards invariant: cells never change once occupied.

use super::Invariant;
use crate::state::GameState;
use crate::types::{Square, SubBoard};

/// Invariant: Cells are monotonic (never overwritten).
///
/// Once a cell transitions from Empty to Occupied, it never changes.
/// This is verified by replaying the move log and comparing.
pub struct MonotonicBoardsInvariant;

impl Invariant<GameState> for MonotonicBoardsInvariant {
    fn holds(state: &GameState) -> bool {
        // Reconstruct all nine boards from the move log
        let mut reconstructed: [SubBoard; 9] = std::array::from_fn(|_| SubBoard::new());

        for mov in state.history() {
            let board = &mut reconstructed[mov.board.to_index()];

            // Cell must be empty before placing
            if board.get(mov.cell) != Square::Empty {
                return false;
            }

            board.set(mov.cell, Square::Occupied(mov.player));
        }

        // Reconstructed boards must match current boards
        reconstructed == *state.boards()
    }

    fn description() -> &'static str {
        "Cells are monotonic (never overwritten)"
    }
}
