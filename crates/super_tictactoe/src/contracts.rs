//! Contract-based validation for super tic-tac-toe moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::{Move, MoveError};
use crate::invariants::{InvariantSet, SuperTicTacToeInvariants};
use crate::state::GameState;
use crate::types::ActiveBoard;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The overall outcome must still be open.
pub struct GameUndecided;

impl GameUndecided {
    #[instrument(skip(state))]
    pub(crate) fn check(_mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if state.outcome().is_decided() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    #[instrument(skip(state))]
    pub(crate) fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if mov.player != state.to_move() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The target sub-board must be playable.
///
/// The move must land in the active board (when one is pinned), and the
/// target sub-board must not already be won or tied.
pub struct BoardPlayable;

impl BoardPlayable {
    #[instrument(skip(state))]
    pub(crate) fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if !state.active_board().permits(mov.board) {
            if let ActiveBoard::Board(required) = state.active_board() {
                return Err(MoveError::MustPlayIn(required));
            }
        }

        if state.sub_outcome(mov.board).is_decided() {
            return Err(MoveError::BoardDecided(mov.board));
        }

        Ok(())
    }
}

/// Precondition: The target cell must be empty.
pub struct CellVacant;

impl CellVacant {
    #[instrument(skip(state))]
    pub(crate) fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if !state.board(mov.board).is_empty(mov.cell) {
            Err(MoveError::CellOccupied(mov.board, mov.cell))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: every rejection case of the move validator.
///
/// Checks run in a fixed order, so a move with several defects reports
/// the same error every time. Pure predicate; calling it twice with the
/// same state and move yields the same verdict.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        GameUndecided::check(mov, state)?;
        PlayersTurn::check(mov, state)?;
        BoardPlayable::check(mov, state)?;
        CellVacant::check(mov, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game must not be over
/// - Must be player's turn
/// - Target sub-board must be active and undecided
/// - Target cell must be empty
///
/// Postconditions:
/// - Boards remain monotonic
/// - Cached outcomes match re-evaluation
/// - Players still alternate
/// - Active board matches the routing rule
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(state: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, state)
    }

    fn post(_before: &GameState, after: &GameState) -> Result<(), MoveError> {
        SuperTicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Player;

    #[test]
    fn test_precondition_fresh_game_any_board() {
        let state = GameState::new();
        let action = Move::new(Player::X, Position::TopLeft, Position::Center);
        assert!(MoveContract::pre(&state, &action).is_ok());
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let state = GameState::new();
        let action = Move::new(Player::O, Position::TopLeft, Position::Center);
        assert!(matches!(
            MoveContract::pre(&state, &action),
            Err(MoveError::WrongPlayer(Player::O))
        ));
    }

    #[test]
    fn test_precondition_forced_board() {
        let state = GameState::new()
            .apply_move(Position::TopLeft, Position::Center)
            .unwrap();

        // Routed to the Center board; any other target is rejected.
        let action = Move::new(Player::O, Position::TopLeft, Position::TopLeft);
        assert!(matches!(
            MoveContract::pre(&state, &action),
            Err(MoveError::MustPlayIn(Position::Center))
        ));
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let state = GameState::new()
            .apply_move(Position::Center, Position::Center)
            .unwrap();

        let action = Move::new(Player::O, Position::Center, Position::Center);
        assert!(matches!(
            MoveContract::pre(&state, &action),
            Err(MoveError::CellOccupied(Position::Center, Position::Center))
        ));
    }

    #[test]
    fn test_validator_is_idempotent() {
        let state = GameState::new()
            .apply_move(Position::Center, Position::Center)
            .unwrap();
        let action = Move::new(Player::O, Position::Center, Position::TopLeft);

        let first = MoveContract::pre(&state, &action);
        let second = MoveContract::pre(&state, &action);
        assert_eq!(first, second);
        assert!(first.is_ok());
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new();
        let after = before
            .apply_move(Position::TopLeft, Position::Center)
            .unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }
}
