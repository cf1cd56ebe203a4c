//! Super tic-tac-toe rule engine.
//!
//! A variant of tic-tac-toe played on a 3x3 grid of 3x3 sub-boards: the
//! cell you play picks the sub-board your opponent must play in next.
//! Win three sub-boards in a line to win the game.
//!
//! This crate is the pure rule engine only - a state-transition module
//! with no I/O. A presentation layer owns the current [`GameState`]
//! snapshot, submits `(board, cell)` moves, and re-renders from the
//! returned snapshot; it performs no game logic itself.
//!
//! # Example
//!
//! ```
//! use super_tictactoe::{ActiveBoard, GameState, Player, Position};
//!
//! let state = GameState::new();
//! let state = state.apply_move(Position::TopLeft, Position::Center)?;
//!
//! // The cell just played routes the opponent to the Center board.
//! assert_eq!(state.active_board(), ActiveBoard::Board(Position::Center));
//! assert_eq!(state.to_move(), Player::O);
//! # Ok::<(), super_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod kani_support;
mod position;
mod state;
mod types;

// Public rule and contract surfaces
pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports - Actions
pub use action::{Move, MoveError};

// Crate-level exports - Addressing
pub use position::Position;

// Crate-level exports - State
pub use state::GameState;

// Crate-level exports - Domain types
pub use types::{ActiveBoard, Outcome, Player, Square, SubBoard};

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, LegalMove, MoveContract};
pub use invariants::{
    ActiveBoardInvariant, AlternatingTurnInvariant, Invariant, InvariantSet,
    MonotonicBoardsInvariant, OutcomeCacheInvariant, SuperTicTacToeInvariants,
};
