//! Win detection over the eight fixed line triples.

use tracing::instrument;

use super::super::types::{Board, Player, Square};
use super::super::Position;

/// The eight winning triples in evaluation order: rows top to bottom,
/// columns left to right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Finds the first completed triple in line-table order.
///
/// During play at most one triple can newly complete per move, but a
/// constructed board may hold several; the table order decides which one
/// gets reported (and highlighted).
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    for line in LINES {
        let [a, b, c] = line;
        if let Square::Occupied(player) = board.get(a) {
            if board.get(b) == Square::Occupied(player)
                && board.get(c) == Square::Occupied(player)
            {
                return Some((player, line));
            }
        }
    }
    None
}
