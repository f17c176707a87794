//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search can apply them to snapshots as well.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, LINE_INDICES, check_winner, line_winner};
