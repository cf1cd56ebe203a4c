//! First-class move types for super tic-tac-toe.
//!
//! Moves are domain events, not side effects. They name the player, the
//! target sub-board, and the cell inside it, and can be validated
//! independently of execution and replayed from a log.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark in a cell of a sub-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Which sub-board of the meta-grid is played.
    pub board: Position,
    /// Which cell inside that sub-board is played.
    pub cell: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, board: Position, cell: Position) -> Self {
        Self {
            player,
            board,
            cell,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> board {}, cell {}",
            self.player,
            self.board.label(),
            self.cell.label()
        )
    }
}

/// Error that can occur when validating or applying a move.
///
/// Every variant is a deterministic rejection; the caller keeps the prior
/// state and no game corruption is possible.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The overall outcome is already decided.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// Play is forced into a different sub-board.
    #[display("Play is forced into the {} board", _0)]
    MustPlayIn(Position),

    /// The target sub-board is already won or tied.
    #[display("The {} board is already decided", _0)]
    BoardDecided(Position),

    /// The target cell is already occupied.
    #[display("Cell {} of the {} board is already occupied", _1, _0)]
    CellOccupied(Position, Position),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let mov = Move::new(Player::X, Position::TopLeft, Position::Center);
        assert_eq!(mov.to_string(), "X -> board Top-left, cell Center");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
        assert_eq!(
            MoveError::MustPlayIn(Position::Center).to_string(),
            "Play is forced into the Center board"
        );
    }
}
