//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use super::rules;
use super::state::{CanonicalState, StateError};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Player in the game.
///
/// The live board indexes players from zero; the canonical state string
/// encodes them from one so that `'0'` stays free for an empty cell:
///
/// | player   | index | mark  | symbol |
/// |----------|-------|-------|--------|
/// | `First`  | 0     | `'1'` | `X`    |
/// | `Second` | 1     | `'2'` | `O`    |
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// Player X (index 0).
    #[display("X")]
    First,
    /// Player O (index 1).
    #[display("O")]
    Second,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Zero-based player index.
    pub fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }

    /// Creates a player from its zero-based index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Player::First),
            1 => Some(Player::Second),
            _ => None,
        }
    }

    /// Character used for this player in the canonical state string.
    pub const fn mark(self) -> char {
        match self {
            Player::First => '1',
            Player::Second => '2',
        }
    }

    /// Parses a canonical state character back into a player.
    pub fn from_mark(mark: char) -> Option<Self> {
        match mark {
            '1' => Some(Player::First),
            '2' => Some(Player::Second),
            _ => None,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Character used for this cell in the canonical state string.
    pub const fn mark(self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::Occupied(player) => player.mark(),
        }
    }

    /// Parses a canonical state character.
    pub fn from_mark(mark: char) -> Option<Self> {
        match mark {
            '0' => Some(Cell::Empty),
            other => Player::from_mark(other).map(Cell::Occupied),
        }
    }

    /// Returns the owner of the cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    squares: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Cell::Empty; 9],
        }
    }

    /// Snapshot of an empty board.
    pub fn initial_state_string() -> String {
        CanonicalState::empty().to_string()
    }

    /// Builds a board from a canonical snapshot.
    pub fn from_state(state: &CanonicalState) -> Self {
        let mut board = Self::new();
        board.load(state);
        board
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.squares[pos.to_index()]
    }

    /// Overwrites a cell without any occupancy check.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.squares[pos.to_index()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells as a slice.
    pub fn squares(&self) -> &[Cell; 9] {
        &self.squares
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Cell::Empty; 9];
    }

    /// Places a piece at `(x, y)`.
    ///
    /// Rejected without mutation when the coordinates are off the board
    /// or the cell is already taken.
    #[instrument(skip(self))]
    pub fn place(&mut self, x: usize, y: usize, player: Player) -> Result<(), MoveError> {
        let pos = Position::from_coords(x, y).ok_or_else(|| {
            debug!(x, y, "Placement outside the board");
            MoveError::OutOfBounds { x, y }
        })?;
        self.place_at(pos, player)
    }

    /// Places a piece at a position.
    #[instrument(skip(self))]
    pub fn place_at(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            debug!(position = %pos, "Placement on occupied cell");
            return Err(MoveError::SquareOccupied(pos));
        }
        self.set(pos, Cell::Occupied(player));
        Ok(())
    }

    /// Owner of the piece at `(x, y)`, `None` if empty or off the board.
    pub fn owner_at(&self, x: usize, y: usize) -> Option<Player> {
        Position::from_coords(x, y).and_then(|pos| self.get(pos).owner())
    }

    /// Owner of the piece at a linear index (0-8).
    pub fn owner_at_index(&self, index: usize) -> Option<Player> {
        Position::from_index(index).and_then(|pos| self.get(pos).owner())
    }

    /// Encodes the board as its canonical snapshot.
    pub fn serialize(&self) -> CanonicalState {
        CanonicalState::from_cells(&self.squares)
    }

    /// Canonical snapshot as a plain string.
    pub fn to_state_string(&self) -> String {
        self.serialize().to_string()
    }

    /// Replaces the board contents with a snapshot.
    ///
    /// A malformed snapshot leaves the board untouched.
    #[instrument(skip(self))]
    pub fn deserialize(&mut self, s: &str) -> Result<(), StateError> {
        let state = s.parse::<CanonicalState>().inspect_err(|e| {
            warn!(error = %e, "Rejected malformed board snapshot");
        })?;
        self.load(&state);
        Ok(())
    }

    /// Replaces the board contents with an already validated snapshot.
    pub fn load(&mut self, state: &CanonicalState) {
        self.reset();
        for pos in Position::ALL {
            if let Cell::Occupied(player) = state.cell(pos.to_index()) {
                self.set(pos, Cell::Occupied(player));
            }
        }
    }

    /// First player owning a complete line, in scan order.
    pub fn check_winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// True when the board is full and nobody has a line.
    pub fn check_draw(&self) -> bool {
        rules::is_draw(self)
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Positions still open for play.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Current status derived from the board alone.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.check_winner() {
            GameStatus::Won(winner)
        } else if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Cell::Empty => pos.to_string(),
                    Cell::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("in progress")]
    InProgress,
    /// Game ended in a win.
    #[display("{} wins", _0)]
    Won(Player),
    /// Game ended in a draw.
    #[display("draw")]
    Draw,
}

impl GameStatus {
    /// True once the game has a winner or ended in a draw.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_mapping_is_offset_by_one() {
        assert_eq!(Player::First.index(), 0);
        assert_eq!(Player::First.mark(), '1');
        assert_eq!(Player::Second.index(), 1);
        assert_eq!(Player::Second.mark(), '2');
        assert_eq!(Player::from_mark('0'), None);
        assert_eq!(Player::from_index(2), None);
    }

    #[test]
    fn test_place_out_of_range() {
        let mut board = Board::new();
        assert_eq!(
            board.place(3, 0, Player::First),
            Err(MoveError::OutOfBounds { x: 3, y: 0 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_place_never_overwrites() {
        let mut board = Board::new();
        board.place(1, 1, Player::First).unwrap();
        assert_eq!(
            board.place(1, 1, Player::Second),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(board.owner_at(1, 1), Some(Player::First));
    }

    #[test]
    fn test_owner_lookup_uses_row_major_index() {
        let mut board = Board::new();
        board.place(2, 1, Player::Second).unwrap();
        assert_eq!(board.owner_at_index(5), Some(Player::Second));
        assert_eq!(board.owner_at(1, 2), None);
        assert_eq!(board.owner_at_index(9), None);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place(0, 0, Player::First).unwrap();
        board.place(1, 1, Player::Second).unwrap();
        assert_eq!(board.display(), "X|1|2\n-+-+-\n3|O|5\n-+-+-\n6|7|8");
    }
}
