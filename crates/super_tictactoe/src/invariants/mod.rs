//! First-class invariants for super tic-tac-toe.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently and serve as documentation
//! of system guarantees.

#[cfg(kani)]
mod verification;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// This trait enables composition of multiple invariants into a single
/// verification step. Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

// Implement InvariantSet for 4-tuples
impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if !I4::holds(state) {
            violations.push(InvariantViolation::new(I4::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod active_board;
pub mod alternating_turn;
pub mod monotonic_boards;
pub mod outcome_cache;

pub use active_board::ActiveBoardInvariant;
pub use alternating_turn::AlternatingTurnInvariant;
pub use monotonic_boards::MonotonicBoardsInvariant;
pub use outcome_cache::OutcomeCacheInvariant;

/// All super tic-tac-toe invariants as a composable set.
pub type SuperTicTacToeInvariants = (
    MonotonicBoardsInvariant,
    OutcomeCacheInvariant,
    AlternatingTurnInvariant,
    ActiveBoardInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::state::GameState;

    #[test]
    fn test_invariant_set_holds_for_fresh_game() {
        let state = GameState::new();
        assert!(SuperTicTacToeInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let state = GameState::replay(&[
            (Position::TopLeft, Position::Center),
            (Position::Center, Position::BottomRight),
            (Position::BottomRight, Position::TopLeft),
        ])
        .unwrap();

        assert!(SuperTicTacToeInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let state = GameState::new();

        type TwoInvariants = (MonotonicBoardsInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&state).is_ok());
    }
}
