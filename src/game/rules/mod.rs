//! Game rules: win and draw evaluation.

pub mod draw;
pub mod win;

use tracing::instrument;

use super::types::{Board, Player};
use super::Position;

/// Result of evaluating a board snapshot.
///
/// Always derived, never stored; the three cases are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No winner and the board is not full; the game accepts moves.
    Open,
    /// A player completed a line.
    Won {
        /// The winning player.
        winner: Player,
        /// The completed triple, in line-table order.
        line: [Position; 3],
    },
    /// Board full with no completed line.
    Draw,
}

impl Outcome {
    /// True while the game accepts further moves.
    pub fn is_open(&self) -> bool {
        matches!(self, Outcome::Open)
    }
}

/// Evaluates a board: first completed line wins, a full board draws.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((winner, line)) = win::winning_line(board) {
        return Outcome::Won { winner, line };
    }
    if draw::is_full(board) {
        return Outcome::Draw;
    }
    Outcome::Open
}
