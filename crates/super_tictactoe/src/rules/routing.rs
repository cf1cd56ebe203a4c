//! Board routing: the cell just played sends the opponent to the
//! matching sub-board, unless that board is already decided.

use crate::position::Position;
use crate::types::{ActiveBoard, Outcome};
use tracing::instrument;

/// Computes which sub-board becomes active after a move in `cell`.
///
/// Returns `ActiveBoard::Any` when the routed-to sub-board is already
/// won or tied, freeing the opponent to play any undecided board.
#[instrument]
pub fn next_active(sub_outcomes: &[Outcome; 9], cell: Position) -> ActiveBoard {
    if sub_outcomes[cell.to_index()].is_decided() {
        ActiveBoard::Any
    } else {
        ActiveBoard::Board(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_routes_to_open_board() {
        let sub_outcomes = [Outcome::Open; 9];
        assert_eq!(
            next_active(&sub_outcomes, Position::Center),
            ActiveBoard::Board(Position::Center)
        );
    }

    #[test]
    fn test_routes_to_won_board_frees_play() {
        let mut sub_outcomes = [Outcome::Open; 9];
        sub_outcomes[4] = Outcome::Won(Player::X);
        assert_eq!(next_active(&sub_outcomes, Position::Center), ActiveBoard::Any);
    }

    #[test]
    fn test_routes_to_tied_board_frees_play() {
        let mut sub_outcomes = [Outcome::Open; 9];
        sub_outcomes[0] = Outcome::Tie;
        assert_eq!(next_active(&sub_outcomes, Position::TopLeft), ActiveBoard::Any);
    }
}
