//! Formal verification of invariants using Kani model checker.
//!
//! These proof harnesses mathematically verify that invariants hold
//! for ALL possible inputs (bounded).

#[cfg(kani)]
mod proofs {
    use crate::{GameState, Position, SuperTicTacToeInvariants};
    use crate::invariants::InvariantSet;

    /// Verify the reducer preserves all invariants from the initial state.
    ///
    /// Proves: For any first move, an accepted transition leaves the
    /// invariant set intact, and a rejected one is an error value.
    #[kani::proof]
    #[kani::unwind(12)]
    fn verify_first_move_preserves_invariants() {
        let state = GameState::new();

        let board: Position = kani::any();
        let cell: Position = kani::any();

        if let Ok(next) = state.apply_move(board, cell) {
            assert!(
                SuperTicTacToeInvariants::check_all(&next).is_ok(),
                "Invariant set violated after accepted move"
            );
        }
    }

    /// Verify the routing rule never pins a decided board.
    #[kani::proof]
    fn verify_routing_never_pins_decided_board() {
        use crate::rules::next_active;
        use crate::types::{ActiveBoard, Outcome};

        let sub_outcomes: [Outcome; 9] = kani::any();
        let cell: Position = kani::any();

        if let ActiveBoard::Board(board) = next_active(&sub_outcomes, cell) {
            assert!(!sub_outcomes[board.to_index()].is_decided());
        }
    }
}
