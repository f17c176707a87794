//! Game session: the live board plus its host collaborators.

use crate::config::SolverConfig;
use crate::games::tictactoe::{
    Board, CanonicalState, GameStatus, Move, MoveError, Player, Position, StateError,
};
use crate::host::{PlacementSink, PlayerKind, PlayerRegistry, Roster, TurnController};
use crate::search;
use tracing::{debug, info, instrument, warn};

/// A single game table.
///
/// `H` is the host that draws pieces and owns turn flow, `R` tells seats
/// apart. The board only changes through [`play`](Self::play),
/// [`update_ai`](Self::update_ai), snapshot loads and resets.
#[derive(Debug)]
pub struct GameSession<H, R = Roster> {
    board: Board,
    first_mover: Player,
    to_move: Player,
    history: Vec<Move>,
    registry: R,
    host: H,
}

impl<H> GameSession<H, Roster>
where
    H: PlacementSink + TurnController,
{
    /// Creates a session with seats and opener taken from configuration.
    #[instrument(skip_all)]
    pub fn from_config(config: &SolverConfig, host: H) -> Self {
        Self::new(*config.first_player(), config.roster(), host)
    }
}

impl<H, R> GameSession<H, R>
where
    H: PlacementSink + TurnController,
    R: PlayerRegistry,
{
    /// Creates a session with an empty board.
    #[instrument(skip(registry, host))]
    pub fn new(first_mover: Player, registry: R, host: H) -> Self {
        info!("Creating new game session");
        Self {
            board: Board::new(),
            first_mover,
            to_move: first_mover,
            history: Vec::new(),
            registry,
            host,
        }
    }

    /// Clears the board and hands the first turn to the opener.
    #[instrument(skip(self))]
    pub fn setup(&mut self) {
        self.stop();
        self.to_move = self.first_mover;
        info!(first_mover = %self.first_mover, "Board set up");
    }

    /// Starts a fresh game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.setup();
    }

    /// Removes every piece from the board.
    #[instrument(skip(self))]
    pub fn stop(&mut self) {
        self.board.reset();
        self.history.clear();
        self.host.board_cleared();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the move history since the last reset or snapshot load.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    /// Returns the player registry.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Returns the host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// True when the acting player's seat is automated.
    pub fn is_ai_turn(&self) -> bool {
        *self.registry.seat(self.to_move).kind() == PlayerKind::Ai
    }

    /// Pieces never move once placed.
    pub fn can_move_piece(&self, _from: Position) -> bool {
        false
    }

    /// Places the acting player's piece at `position` and ends the turn.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, position: Position) -> Result<GameStatus, MoveError> {
        if self.status().is_over() {
            debug!("Move rejected, game is over");
            return Err(MoveError::GameOver);
        }

        self.place(position)?;
        self.end_turn();
        Ok(self.status())
    }

    /// Lets the engine move for the acting player.
    ///
    /// Searches a snapshot of the board, applies the chosen cell through the
    /// normal placement path, then ends the turn. Returns `None` without
    /// touching anything when the game is over or no cell is empty.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn update_ai(&mut self) -> Option<Position> {
        if self.status().is_over() {
            debug!("No AI move, game is over");
            return None;
        }

        let outcome = search::best_move(&self.board.serialize(), self.to_move);
        let position = outcome.best()?;

        if let Err(e) = self.place(position) {
            warn!(error = %e, %position, "Search picked an unplayable cell");
            return None;
        }
        info!(%position, score = ?outcome.score(), nodes = outcome.stats().nodes, "AI moved");
        self.end_turn();
        Some(position)
    }

    /// Signals the host and passes the turn.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn end_turn(&mut self) {
        self.host.end_turn(self.to_move);
        self.to_move = self.to_move.opponent();
    }

    /// Snapshot of the board.
    pub fn state_string(&self) -> String {
        self.board.to_state_string()
    }

    /// Replaces the board with a snapshot.
    ///
    /// A malformed snapshot is rejected and nothing changes. Otherwise the
    /// host sees the board cleared and one placement per piece, and the
    /// turn goes to whoever has fewer pieces relative to the opener.
    #[instrument(skip(self))]
    pub fn set_state_string(&mut self, s: &str) -> Result<(), StateError> {
        let state = s.parse::<CanonicalState>().inspect_err(|e| {
            warn!(error = %e, "Rejected malformed board snapshot");
        })?;

        self.stop();
        self.board.load(&state);
        for position in Position::ALL {
            if let Some(player) = self.board.get(position).owner() {
                self.host.piece_placed(position, player);
            }
        }
        self.to_move = state.next_player(self.first_mover);
        debug!(to_move = %self.to_move, "Snapshot loaded");
        Ok(())
    }

    fn place(&mut self, position: Position) -> Result<(), MoveError> {
        self.board.place_at(position, self.to_move)?;
        self.history.push(Move::new(self.to_move, position));
        self.host.piece_placed(position, self.to_move);
        Ok(())
    }
}
