//! Core domain types for super tic-tac-toe.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A square of a 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// Outcome of evaluating a 3x3 arrangement.
///
/// Used twice: for each sub-board's own cells, and for the meta-grid
/// built from the nine sub-board outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No result yet.
    Open,
    /// Won by a player.
    Won(Player),
    /// Fully occupied with no winning line.
    Tie,
}

impl Outcome {
    /// Returns true once the arrangement is won or tied.
    pub fn is_decided(self) -> bool {
        !matches!(self, Outcome::Open)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Open => write!(f, "-"),
            Outcome::Won(player) => write!(f, "{}", player),
            Outcome::Tie => write!(f, "TIE"),
        }
    }
}

/// One of the nine inner 3x3 boards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubBoard {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl SubBoard {
    /// Creates a new empty sub-board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given cell.
    pub fn get(&self, cell: Position) -> Square {
        self.squares[cell.to_index()]
    }

    /// Sets the square at the given cell.
    pub(crate) fn set(&mut self, cell: Position, square: Square) {
        self.squares[cell.to_index()] = square;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Position) -> bool {
        self.get(cell) == Square::Empty
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the sub-board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.squares[row * 3 + col] {
                    Square::Empty => ".".to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for SubBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// The sub-board the current player is constrained to play in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActiveBoard {
    /// Any undecided sub-board may be played.
    Any,
    /// Play is forced into this sub-board.
    Board(Position),
}

impl ActiveBoard {
    /// Returns true if a move into the given sub-board satisfies the restriction.
    pub fn permits(self, board: Position) -> bool {
        match self {
            ActiveBoard::Any => true,
            ActiveBoard::Board(required) => required == board,
        }
    }
}

impl std::fmt::Display for ActiveBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActiveBoard::Any => write!(f, "any"),
            ActiveBoard::Board(board) => write!(f, "{}", board.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_new_sub_board_is_empty() {
        let board = SubBoard::new();
        for cell in Position::ALL {
            assert!(board.is_empty(cell));
        }
        assert!(!board.is_full());
    }

    #[test]
    fn test_active_board_permits() {
        assert!(ActiveBoard::Any.permits(Position::Center));
        assert!(ActiveBoard::Board(Position::Center).permits(Position::Center));
        assert!(!ActiveBoard::Board(Position::Center).permits(Position::TopLeft));
    }

    #[test]
    fn test_outcome_decided() {
        assert!(!Outcome::Open.is_decided());
        assert!(Outcome::Won(Player::X).is_decided());
        assert!(Outcome::Tie.is_decided());
        assert_eq!(Outcome::Won(Player::O).winner(), Some(Player::O));
        assert_eq!(Outcome::Tie.winner(), None);
    }
}
