//! Immutable game state and the move reducer.
//!
//! A `GameState` is a complete snapshot of one game. It is created once
//! per game, replaced wholesale on every accepted move, and never
//! mutated in place. The caller (a UI layer) owns the current snapshot
//! and swaps it atomically; reset is dropping it and calling
//! [`GameState::new`] again.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, MoveContract};
use crate::position::Position;
use crate::rules;
use crate::types::{ActiveBoard, Outcome, Player, Square, SubBoard};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state: the 3x3 grid of sub-boards plus turn,
/// routing, and outcome bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The nine sub-boards, indexed by meta-grid position.
    boards: [SubBoard; 9],
    /// Cached outcome of each sub-board.
    sub_outcomes: [Outcome; 9],
    /// Current player to move.
    to_move: Player,
    /// Where the current player is constrained to play.
    active_board: ActiveBoard,
    /// Overall outcome derived from the sub-board outcomes.
    overall: Outcome,
    /// Append-only move log.
    history: Vec<Move>,
}

impl GameState {
    /// Creates the initial state: all boards empty, X to move,
    /// any board playable.
    #[instrument]
    pub fn new() -> Self {
        Self {
            boards: std::array::from_fn(|_| SubBoard::new()),
            sub_outcomes: [Outcome::Open; 9],
            to_move: Player::X,
            active_board: ActiveBoard::Any,
            overall: Outcome::Open,
            history: Vec::new(),
        }
    }

    /// Returns all nine sub-boards.
    pub fn boards(&self) -> &[SubBoard; 9] {
        &self.boards
    }

    /// Returns the sub-board at the given meta-grid position.
    pub fn board(&self, board: Position) -> &SubBoard {
        &self.boards[board.to_index()]
    }

    /// Returns the cached outcome of the given sub-board.
    pub fn sub_outcome(&self, board: Position) -> Outcome {
        self.sub_outcomes[board.to_index()]
    }

    /// Returns the cached outcomes of all nine sub-boards.
    pub fn sub_outcomes(&self) -> &[Outcome; 9] {
        &self.sub_outcomes
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns where the current player is constrained to play.
    pub fn active_board(&self) -> ActiveBoard {
        self.active_board
    }

    /// Returns the overall outcome.
    pub fn outcome(&self) -> Outcome {
        self.overall
    }

    /// Returns true once the overall outcome is decided.
    pub fn is_over(&self) -> bool {
        self.overall.is_decided()
    }

    /// Returns the move log.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Applies a move for the current player, returning the next state.
    ///
    /// The receiver is left untouched; on success the caller replaces its
    /// snapshot with the returned one. Rejections are deterministic and
    /// carry the first failing precondition.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] when the game is over, the move ignores a
    /// forced board, targets a decided board, or lands on an occupied cell.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&self, board: Position, cell: Position) -> Result<GameState, MoveError> {
        let action = Move::new(self.to_move, board, cell);

        MoveContract::pre(self, &action)?;

        let mut next = self.clone();
        next.boards[board.to_index()].set(cell, Square::Occupied(action.player));
        next.sub_outcomes[board.to_index()] =
            rules::evaluate(next.boards[board.to_index()].squares());
        next.overall = rules::evaluate_meta(&next.sub_outcomes);
        next.active_board = rules::next_active(&next.sub_outcomes, cell);
        next.history.push(action);
        next.to_move = action.player.opponent();

        if next.sub_outcomes[board.to_index()].is_decided() {
            debug!(
                board = %board,
                outcome = %next.sub_outcomes[board.to_index()],
                "Sub-board decided"
            );
        }
        if next.is_over() {
            debug!(outcome = %next.overall, "Game decided");
        }

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        Ok(next)
    }

    /// Rebuilds a state by applying moves from the initial state.
    ///
    /// # Errors
    ///
    /// Returns the first rejection encountered, leaving no partial state.
    #[instrument]
    pub fn replay(moves: &[(Position, Position)]) -> Result<GameState, MoveError> {
        let mut state = GameState::new();

        for &(board, cell) in moves {
            state = state.apply_move(board, cell)?;
        }

        Ok(state)
    }

    /// Returns a status line for display.
    pub fn status_string(&self) -> String {
        match self.overall {
            Outcome::Open => format!(
                "In progress. Player {} to move ({} board).",
                self.to_move, self.active_board
            ),
            Outcome::Won(player) => format!("Game over. Player {} wins!", player),
            Outcome::Tie => "Game over. Tie!".to_string(),
        }
    }

    /// Formats the whole super-board as a human-readable string.
    ///
    /// Sub-boards are laid out in their meta-grid arrangement; decided
    /// boards are annotated with their outcome below the grid row.
    pub fn display(&self) -> String {
        let mut result = String::new();

        for meta_row in 0..3 {
            let boards: Vec<&SubBoard> = (0..3)
                .map(|meta_col| &self.boards[meta_row * 3 + meta_col])
                .collect();

            // Each sub-board renders as 5 text lines; stitch them side by side.
            let rendered: Vec<Vec<String>> = boards
                .iter()
                .map(|b| b.display().lines().map(String::from).collect())
                .collect();

            for line in 0..5 {
                let row_line: Vec<&str> =
                    rendered.iter().map(|lines| lines[line].as_str()).collect();
                result.push_str(&row_line.join("   "));
                result.push('\n');
            }

            let outcomes: Vec<String> = (0..3)
                .map(|meta_col| {
                    format!("[{}]", self.sub_outcomes[meta_row * 3 + meta_col])
                })
                .collect();
            result.push_str(&outcomes.join("   "));
            result.push('\n');

            if meta_row < 2 {
                result.push('\n');
            }
        }

        result
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
