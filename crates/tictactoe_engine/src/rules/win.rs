//! Win detection logic for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Board, Player, Position, Square};

/// One of the eight winning triples of positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// The three positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Winning lines in scan order: rows top to bottom, columns left to right,
/// then the two diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line([
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ]),
    Line([
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ]),
    // Columns
    Line([
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ]),
    Line([
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ]),
    Line([
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ]),
    // Diagonals
    Line([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Returns the first completed line in [`LINES`] order and its owner.
///
/// A malformed board with several complete lines always reports the
/// earliest one.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        let first = board.get(a);
        match first {
            Square::Occupied(player) if board.get(b) == first && board.get(c) == first => {
                Some((player, line))
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(winning_line(&board), Some((Player::X, LINES[0])));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopRight, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomLeft, Square::Occupied(Player::O));
        let (player, line) = winning_line(&board).unwrap();
        assert_eq!(player, Player::O);
        assert_eq!(line.indices(), [2, 4, 6]);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::O));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_line_tables_cover_every_square() {
        for pos in Position::ALL {
            assert!(LINES.iter().any(|line| line.contains(pos)));
        }
        assert_eq!(LINES.iter().filter(|l| l.contains(Position::Center)).count(), 4);
    }
}
