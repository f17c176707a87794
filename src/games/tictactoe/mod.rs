//! Tic-tac-toe board state model.

mod action;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::{Move, MoveError};
pub use position::Position;
pub use state::{CanonicalState, STATE_LEN, StateError, StateErrorKind};
pub use types::{Board, Cell, GameStatus, Player};
