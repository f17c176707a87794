//! Strictly Negamax - tic-tac-toe board model and perfect-play solver
//!
//! The board is the authoritative game state; rendering, seating and turn
//! flow are left to the host through a few small traits.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid, placement, win/draw rules, 9-character snapshots
//! - **Search**: exhaustive negamax over snapshots, never the live board
//! - **Session**: live board plus host ports, drives human and AI turns
//! - **Config**: TOML seats, opener and log filter
//!
//! # Example
//!
//! ```
//! use strictly_negamax::{GameSession, NullHost, Player, Position, SolverConfig};
//!
//! let mut session = GameSession::from_config(&SolverConfig::default(), NullHost);
//! session.setup();
//! session.play(Position::Center).unwrap();
//! assert_eq!(session.to_move(), Player::Second);
//!
//! let reply = session.update_ai();
//! assert!(reply.is_some());
//! assert_eq!(session.board().occupied_count(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod host;
mod search;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, SolverConfig};

// Crate-level exports - Host ports
pub use host::{NullHost, PlacementSink, PlayerKind, PlayerRegistry, Roster, Seat, TurnController};

// Crate-level exports - Search engine
pub use search::{Color, SearchOutcome, SearchStats, WIN_SCORE, best_move, negamax};

// Crate-level exports - Session management
pub use session::GameSession;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, CanonicalState, Cell, GameStatus, Move, MoveError, Player, Position, STATE_LEN,
    StateError, StateErrorKind, rules,
};
