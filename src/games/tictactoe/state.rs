//! Canonical 9-character board snapshot.
//!
//! One character per cell in row-major order: `'0'` empty, `'1'` the
//! first player, `'2'` the second player. This is the only format the
//! search engine reads and the only one meant to be persisted or exchanged.

use super::position::Position;
use super::rules::line_winner;
use super::types::{Cell, Player};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of characters in a snapshot.
pub const STATE_LEN: usize = 9;

/// Validated board snapshot.
///
/// Always exactly [`STATE_LEN`] characters from the `'0'`/`'1'`/`'2'`
/// alphabet; construction from text goes through [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CanonicalState {
    cells: [Cell; STATE_LEN],
}

impl CanonicalState {
    /// The empty board, `"000000000"`.
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; STATE_LEN],
        }
    }

    pub(crate) fn from_cells(cells: &[Cell; STATE_LEN]) -> Self {
        Self { cells: *cells }
    }

    /// Cell at a linear index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 9`.
    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Writes a cell. Used by the search for trial placements.
    pub(crate) fn put(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Checks if the cell at `index` is empty.
    pub fn is_empty_at(&self, index: usize) -> bool {
        self.cells[index] == Cell::Empty
    }

    /// Checks if no empty cell remains.
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Open positions in scan order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(|pos| self.is_empty_at(pos.to_index()))
    }

    /// Number of pieces owned by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// Owner of the first complete line in scan order.
    pub fn winner(&self) -> Option<Player> {
        line_winner(|index| self.cells[index])
    }

    /// Player whose turn it is, given who opened the game.
    ///
    /// The opener moves whenever both sides have placed the same number
    /// of pieces.
    #[instrument]
    pub fn next_player(&self, first_mover: Player) -> Player {
        if self.count(first_mover) > self.count(first_mover.opponent()) {
            first_mover.opponent()
        } else {
            first_mover
        }
    }
}

impl Default for CanonicalState {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Display for CanonicalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.mark())?;
        }
        Ok(())
    }
}

impl FromStr for CanonicalState {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != STATE_LEN {
            return Err(StateError::new(StateErrorKind::WrongLength(len)));
        }

        let mut cells = [Cell::Empty; STATE_LEN];
        for (index, found) in s.chars().enumerate() {
            cells[index] = Cell::from_mark(found)
                .ok_or_else(|| StateError::new(StateErrorKind::InvalidChar { index, found }))?;
        }
        Ok(Self { cells })
    }
}

impl TryFrom<String> for CanonicalState {
    type Error = StateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CanonicalState> for String {
    fn from(state: CanonicalState) -> Self {
        state.to_string()
    }
}

/// What is wrong with a rejected snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum StateErrorKind {
    /// Snapshot is not exactly nine characters long.
    #[display("expected {} characters, got {}", STATE_LEN, _0)]
    WrongLength(usize),
    /// Snapshot contains a character outside `'0'`, `'1'`, `'2'`.
    #[display("invalid character {:?} at index {}", found, index)]
    InvalidChar {
        /// Offending character position.
        index: usize,
        /// Offending character.
        found: char,
    },
}

/// Malformed snapshot error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("State error: {} at {}:{}", kind, file, line)]
pub struct StateError {
    /// What went wrong.
    pub kind: StateErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StateError {
    /// Creates a new state error with caller location tracking.
    #[track_caller]
    pub fn new(kind: StateErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
