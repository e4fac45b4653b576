//! Alternating marks invariant: mark counts follow move parity.

use super::Invariant;
use crate::game::{Player, Replay};

/// Invariant: snapshot `i` holds exactly `ceil(i/2)` X marks and
/// `floor(i/2)` O marks.
///
/// X moves on even cursors and O on odd ones, so the counts are fully
/// determined by the move number.
pub struct AlternatingMarks;

impl Invariant<Replay> for AlternatingMarks {
    fn holds(replay: &Replay) -> bool {
        (0..replay.len()).all(|mov| {
            let Some(board) = replay.snapshot(mov) else {
                return false;
            };
            board.count(Player::X) == mov.div_ceil(2) && board.count(Player::O) == mov / 2
        })
    }

    fn description() -> &'static str {
        "snapshot i holds ceil(i/2) X marks and floor(i/2) O marks"
    }
}
