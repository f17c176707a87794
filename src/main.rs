//! Strictly Negamax - Unified CLI
//!
//! Play against the solver or query it on a single snapshot.

#![warn(missing_docs)]

mod cli;
mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, PlayerArg};
use std::io::{BufRead, Write};
use strictly_negamax::{
    Board, CanonicalState, Color, GameSession, GameStatus, Player, PlayerKind, SolverConfig,
    best_move, negamax,
};
use terminal::{TerminalHost, parse_move};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SolverConfig::from_file(path)?,
        None => SolverConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play { human } => run_play(&config, human),
        Command::BestMove {
            state,
            player,
            json,
        } => run_best_move(&config, &state, player, json),
        Command::Evaluate { state, player } => run_evaluate(&config, &state, player),
        Command::Status { state } => run_status(&state),
    }
}

/// Parses a snapshot argument.
fn parse_state(state: &str) -> Result<CanonicalState> {
    state
        .parse()
        .with_context(|| format!("Invalid snapshot {:?}", state))
}

/// Side to move: explicit, or derived from piece counts.
fn side_to_move(config: &SolverConfig, state: &CanonicalState, player: Option<PlayerArg>) -> Player {
    player
        .map(Player::from)
        .unwrap_or_else(|| state.next_player(*config.first_player()))
}

/// Interactive game against the engine.
#[instrument(skip(config))]
fn run_play(config: &SolverConfig, human: Option<PlayerArg>) -> Result<()> {
    let mut roster = config.roster();
    if let Some(seat) = human {
        let seat = Player::from(seat);
        roster.set_kind(seat, PlayerKind::Human);
        roster.set_kind(seat.opponent(), PlayerKind::Ai);
    }

    let host = TerminalHost::new(config.first().name(), config.second().name());
    let mut session = GameSession::new(*config.first_player(), roster, host);
    session.setup();
    info!("Game started");

    println!("{}\n", session.board().display());

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    while !session.status().is_over() {
        if session.is_ai_turn() {
            if session.update_ai().is_none() {
                warn!("Engine found no move");
                break;
            }
            continue;
        }

        let name = session.host().name(session.to_move()).to_string();
        print!("{} ({}) to move [0-8 or x y]: ", name, session.to_move());
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            info!("Input closed, leaving game");
            return Ok(());
        };
        let line = line?;

        match parse_move(line.trim()) {
            Some(position) => {
                if let Err(e) = session.play(position) {
                    println!("{}", e);
                }
            }
            None => println!("Could not read a cell from {:?}", line.trim()),
        }
    }

    match session.status() {
        GameStatus::Won(winner) => println!("{} ({}) wins!", session.host().name(winner), winner),
        GameStatus::Draw => println!("Draw."),
        GameStatus::InProgress => {}
    }
    info!(status = %session.status(), snapshot = %session.state_string(), "Game over");
    Ok(())
}

/// Prints the engine's choice for a snapshot.
#[instrument(skip(config))]
fn run_best_move(
    config: &SolverConfig,
    state: &str,
    player: Option<PlayerArg>,
    json: bool,
) -> Result<()> {
    let state = parse_state(state)?;
    let player = side_to_move(config, &state, player);
    let outcome = best_move(&state, player);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match (outcome.best(), outcome.score()) {
        (Some(position), Some(score)) => println!(
            "{} plays {} (cell {}, x={}, y={}), score {}",
            player,
            position,
            position.to_index(),
            position.x(),
            position.y(),
            score
        ),
        _ => println!("{} has no move: board is full", player),
    }
    println!(
        "searched {} positions, depth {}",
        outcome.stats().nodes,
        outcome.stats().max_depth
    );
    Ok(())
}

/// Prints the negamax value of a snapshot.
#[instrument(skip(config))]
fn run_evaluate(config: &SolverConfig, state: &str, player: Option<PlayerArg>) -> Result<()> {
    let mut state = parse_state(state)?;
    let player = side_to_move(config, &state, player);
    let value = negamax(&mut state, Color::from(player));
    println!("{} to move: {}", player, value);
    Ok(())
}

/// Prints the board and its status.
#[instrument]
fn run_status(state: &str) -> Result<()> {
    let state = parse_state(state)?;
    let board = Board::from_state(&state);
    println!("{}\n", board.display());
    println!("{}", board.status());
    Ok(())
}
