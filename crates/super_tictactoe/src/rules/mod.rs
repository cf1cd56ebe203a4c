//! Game rules for super tic-tac-toe.
//!
//! This module contains pure functions for evaluating 3x3 arrangements
//! and for routing play between sub-boards. Rules are separated from
//! board storage to enable composition into contract systems.

pub mod routing;
pub mod win;

pub use routing::next_active;
pub use win::{evaluate, evaluate_meta};
