//! Terminal host: prints placements and turn changes to stdout.

use strictly_negamax::{Board, PlacementSink, Player, Position, TurnController};
use tracing::debug;

/// Renders the game as text.
///
/// Keeps its own copy of the pieces, the way a graphical host keeps its
/// sprites, and redraws after every placement.
pub struct TerminalHost {
    names: [String; 2],
    pieces: Board,
}

impl TerminalHost {
    /// Creates a host that labels players with the given names.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            names: [first.into(), second.into()],
            pieces: Board::new(),
        }
    }

    /// Display name for a player.
    pub fn name(&self, player: Player) -> &str {
        &self.names[player.index()]
    }
}

impl PlacementSink for TerminalHost {
    fn piece_placed(&mut self, position: Position, player: Player) {
        if let Err(e) = self.pieces.place_at(position, player) {
            debug!(error = %e, "Display copy out of sync");
        }
        println!("{} ({}) takes {}", self.name(player), player, position);
        println!("{}\n", self.pieces.display());
    }

    fn board_cleared(&mut self) {
        self.pieces.reset();
    }
}

impl TurnController for TerminalHost {
    fn end_turn(&mut self, player: Player) {
        debug!(player = %self.name(player), "Turn complete");
    }
}

/// Parses a move typed at the prompt.
///
/// Accepts a cell index (`0`-`8`), a label (`center`) or column and row
/// separated by whitespace or a comma (`2 0`).
pub fn parse_move(input: &str) -> Option<Position> {
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();

    match parts.as_slice() {
        [x, y] => {
            let x = x.parse().ok()?;
            let y = y.parse().ok()?;
            Position::from_coords(x, y)
        }
        _ => Position::from_label_or_number(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_forms() {
        assert_eq!(parse_move("4"), Some(Position::Center));
        assert_eq!(parse_move("2 0"), Some(Position::TopRight));
        assert_eq!(parse_move("0,2"), Some(Position::BottomLeft));
        assert_eq!(parse_move("top-left"), Some(Position::TopLeft));
        assert_eq!(parse_move("3 3"), None);
        assert_eq!(parse_move("nowhere"), None);
    }
}
