//! Command-line interface for strictly_negamax.

use clap::{Parser, Subcommand, ValueEnum};
use strictly_negamax::Player;

/// Strictly Negamax - perfect-play tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "strictly_negamax")]
#[command(about = "Tic-tac-toe board model and negamax solver", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the engine in the terminal
    Play {
        /// Seat you take; the other seat goes to the engine
        #[arg(long, value_enum)]
        human: Option<PlayerArg>,
    },

    /// Print the engine's move for a snapshot
    BestMove {
        /// 9-character snapshot, e.g. 110020000
        state: String,

        /// Side to move (derived from piece counts if omitted)
        #[arg(short, long, value_enum)]
        player: Option<PlayerArg>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the negamax value of a snapshot for the side to move
    Evaluate {
        /// 9-character snapshot
        state: String,

        /// Side to move (derived from piece counts if omitted)
        #[arg(short, long, value_enum)]
        player: Option<PlayerArg>,
    },

    /// Print the board and its status
    Status {
        /// 9-character snapshot
        state: String,
    },
}

/// Player as spelled on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerArg {
    /// Player X, snapshot mark '1'
    First,
    /// Player O, snapshot mark '2'
    Second,
}

impl From<PlayerArg> for Player {
    fn from(arg: PlayerArg) -> Self {
        match arg {
            PlayerArg::First => Player::First,
            PlayerArg::Second => Player::Second,
        }
    }
}
