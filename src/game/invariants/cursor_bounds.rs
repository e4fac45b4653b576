//! Cursor bounds invariant: the cursor always addresses a snapshot.

use super::Invariant;
use crate::game::Replay;

/// Invariant: `cursor < history length`.
///
/// Holds trivially after `play` (cursor set to the new last index) and is
/// asserted by `jump_to`; a violation means state was built or mutated
/// outside the three transitions.
pub struct CursorBounds;

impl Invariant<Replay> for CursorBounds {
    fn holds(replay: &Replay) -> bool {
        replay.cursor() < replay.len()
    }

    fn description() -> &'static str {
        "the cursor addresses an existing snapshot"
    }
}
