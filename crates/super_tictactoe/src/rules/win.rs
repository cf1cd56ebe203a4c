//! Win detection for 3x3 arrangements.
//!
//! The same detector serves both levels of the game: the raw cells of a
//! sub-board, and the meta-grid assembled from the nine sub-board
//! outcomes (where tied boards count as empty for line purposes).

use crate::position::Position;
use crate::types::{Outcome, Player, Square};
use tracing::instrument;

/// The 8 winning lines, checked in fixed order: rows, columns, diagonals.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the owner of the first completed line, if any.
fn line_winner(squares: &[Square; 9]) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = squares[a.to_index()];
        if sq != Square::Empty
            && sq == squares[b.to_index()]
            && sq == squares[c.to_index()]
        {
            return match sq {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}

/// Evaluates a 3x3 arrangement of squares.
///
/// Returns `Outcome::Won` if any line holds three equal marks,
/// `Outcome::Tie` if all nine squares are occupied with no winning line,
/// and `Outcome::Open` otherwise.
#[instrument]
pub fn evaluate(squares: &[Square; 9]) -> Outcome {
    if let Some(player) = line_winner(squares) {
        return Outcome::Won(player);
    }

    if squares.iter().all(|s| *s != Square::Empty) {
        return Outcome::Tie;
    }

    Outcome::Open
}

/// Evaluates the meta-grid built from the nine sub-board outcomes.
///
/// Won boards count as marks of their winner; tied boards count as empty
/// for line purposes. If no line is complete but every sub-board is
/// decided, the whole game is a tie.
#[instrument]
pub fn evaluate_meta(sub_outcomes: &[Outcome; 9]) -> Outcome {
    let meta = sub_outcomes.map(|outcome| match outcome {
        Outcome::Won(player) => Square::Occupied(player),
        Outcome::Open | Outcome::Tie => Square::Empty,
    });

    if let Some(player) = line_winner(&meta) {
        return Outcome::Won(player);
    }

    if sub_outcomes.iter().all(|o| o.is_decided()) {
        return Outcome::Tie;
    }

    Outcome::Open
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupied(player: Player, cells: &[usize]) -> [Square; 9] {
        let mut squares = [Square::Empty; 9];
        for &cell in cells {
            squares[cell] = Square::Occupied(player);
        }
        squares
    }

    #[test]
    fn test_empty_arrangement_open() {
        assert_eq!(evaluate(&[Square::Empty; 9]), Outcome::Open);
    }

    #[test]
    fn test_top_row_wins() {
        let squares = occupied(Player::X, &[0, 1, 2]);
        assert_eq!(evaluate(&squares), Outcome::Won(Player::X));
    }

    #[test]
    fn test_column_wins() {
        let squares = occupied(Player::O, &[1, 4, 7]);
        assert_eq!(evaluate(&squares), Outcome::Won(Player::O));
    }

    #[test]
    fn test_diagonal_wins() {
        let squares = occupied(Player::O, &[2, 4, 6]);
        assert_eq!(evaluate(&squares), Outcome::Won(Player::O));
    }

    #[test]
    fn test_incomplete_line_open() {
        let squares = occupied(Player::X, &[0, 1]);
        assert_eq!(evaluate(&squares), Outcome::Open);
    }

    #[test]
    fn test_full_arrangement_ties() {
        // X O X / O X X / O X O
        let mut squares = occupied(Player::X, &[0, 2, 4, 5, 7]);
        for cell in [1, 3, 6, 8] {
            squares[cell] = Square::Occupied(Player::O);
        }
        assert_eq!(evaluate(&squares), Outcome::Tie);
    }

    #[test]
    fn test_meta_diagonal_wins() {
        let mut sub_outcomes = [Outcome::Open; 9];
        for board in [0, 4, 8] {
            sub_outcomes[board] = Outcome::Won(Player::X);
        }
        assert_eq!(evaluate_meta(&sub_outcomes), Outcome::Won(Player::X));
    }

    #[test]
    fn test_meta_tied_boards_count_as_empty() {
        // Tied board in the middle of a would-be line breaks it.
        let mut sub_outcomes = [Outcome::Open; 9];
        sub_outcomes[0] = Outcome::Won(Player::X);
        sub_outcomes[4] = Outcome::Tie;
        sub_outcomes[8] = Outcome::Won(Player::X);
        assert_eq!(evaluate_meta(&sub_outcomes), Outcome::Open);
    }

    #[test]
    fn test_meta_all_tied_is_tie() {
        assert_eq!(evaluate_meta(&[Outcome::Tie; 9]), Outcome::Tie);
    }

    #[test]
    fn test_meta_all_decided_no_line_is_tie() {
        // X X O / O O X / X O X as board winners - no meta line.
        let winners = [
            Player::X,
            Player::X,
            Player::O,
            Player::O,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::X,
        ];
        let sub_outcomes = winners.map(Outcome::Won);
        assert_eq!(evaluate_meta(&sub_outcomes), Outcome::Tie);
    }

    #[test]
    fn test_meta_undecided_board_stays_open() {
        let mut sub_outcomes = [Outcome::Tie; 9];
        sub_outcomes[5] = Outcome::Open;
        assert_eq!(evaluate_meta(&sub_outcomes), Outcome::Open);
    }
}
