//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Player, Position};
use tracing::instrument;

/// The eight winning lines, scanned rows first, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// [`LINES`] as linear indices.
pub const LINE_INDICES: [[usize; 3]; 8] = {
    let mut out = [[0; 3]; 8];
    let mut i = 0;
    while i < LINES.len() {
        let [a, b, c] = LINES[i];
        out[i] = [a.to_index(), b.to_index(), c.to_index()];
        i += 1;
    }
    out
};

/// Scans the winning lines over any cell source.
///
/// Returns the owner of the first fully occupied line. A snapshot in
/// which both players hold a line can only be injected, never played
/// into; it reports whichever line comes first in scan order.
pub fn line_winner(cell_at: impl Fn(usize) -> Cell) -> Option<Player> {
    for [a, b, c] in LINE_INDICES {
        if let Cell::Occupied(player) = cell_at(a)
            && cell_at(b) == Cell::Occupied(player)
            && cell_at(c) == Cell::Occupied(player)
        {
            return Some(player);
        }
    }

    None
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    let squares = board.squares();
    line_winner(|index| squares[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(line: [Position; 3], player: Player) -> Board {
        let mut board = Board::new();
        for pos in line {
            board.place_at(pos, player).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_wins_for_either_player() {
        for line in LINES {
            for player in [Player::First, Player::Second] {
                let board = board_with(line, player);
                assert_eq!(check_winner(&board), Some(player), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_line_indices_match_positions() {
        assert_eq!(LINE_INDICES[0], [0, 1, 2]);
        assert_eq!(LINE_INDICES[4], [1, 4, 7]);
        assert_eq!(LINE_INDICES[7], [2, 4, 6]);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.place_at(Position::TopLeft, Player::First).unwrap();
        board.place_at(Position::TopCenter, Player::First).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.place_at(Position::TopLeft, Player::First).unwrap();
        board.place_at(Position::Center, Player::Second).unwrap();
        board.place_at(Position::BottomRight, Player::First).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_double_win_reports_first_line_in_scan_order() {
        // Second owns the top row, First the bottom row
        let mut board = Board::new();
        board.deserialize("222000111").unwrap();
        assert_eq!(check_winner(&board), Some(Player::Second));

        // First owns the middle column, Second the right column
        board.deserialize("012012012").unwrap();
        assert_eq!(check_winner(&board), Some(Player::First));
    }
}
