//! The replayable game state machine.
//!
//! [`Replay`] owns the full history of board snapshots, a cursor selecting
//! the snapshot being viewed, and the display order of the move list. Views
//! read derived data from it and feed user actions back through exactly
//! three transitions: [`Replay::play`], [`Replay::jump_to`], and
//! [`Replay::toggle_sort`].

use strum::IntoEnumIterator;
use tracing::{debug, instrument};

use super::invariants::{InvariantSet, ReplayInvariants};
use super::rules::{self, Outcome};
use super::types::{Board, Player};
use super::Position;

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Move 0 first.
    Ascending,
    /// Move 0 last.
    Descending,
}

impl SortOrder {
    /// The opposite order.
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Display name, used by the sort toggle to label itself.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    }
}

/// One record of the derived move list, in ascending move order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEntry {
    /// Move number (history index).
    pub index: usize,
    /// Cell that changed relative to the previous snapshot; `None` for
    /// move 0.
    pub location: Option<Position>,
    /// Whether the cursor sits on this entry.
    pub is_current: bool,
}

impl MoveEntry {
    /// Whether the entry is a navigation control. The current entry
    /// renders as static text; every other entry jumps to its move.
    pub fn is_clickable(&self) -> bool {
        !self.is_current
    }
}

/// Game state machine: history of snapshots, cursor, and sort flag.
///
/// The history always starts with a single empty snapshot and grows by one
/// snapshot per accepted play. Playing from a past cursor position discards
/// the stale forward branch first. The next player is derived from cursor
/// parity and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    history: Vec<Board>,
    cursor: usize,
    sort: SortOrder,
}

impl Replay {
    /// Creates a fresh game: one empty snapshot, cursor at the start.
    pub fn new() -> Self {
        Self::with_sort(SortOrder::Ascending)
    }

    /// Creates a fresh game with the given initial move-list order.
    pub fn with_sort(sort: SortOrder) -> Self {
        Self {
            history: vec![Board::new()],
            cursor: 0,
            sort,
        }
    }

    /// The snapshot under the cursor.
    pub fn board(&self) -> &Board {
        &self.history[self.cursor]
    }

    /// Number of snapshots in the history.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// True only before the first move; the history never shrinks below
    /// its initial single snapshot.
    pub fn is_empty(&self) -> bool {
        self.history.len() == 1
    }

    /// Current cursor value.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current move-list display order.
    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Player to move, derived from cursor parity: X on even, O on odd.
    pub fn next_player(&self) -> Player {
        if self.cursor % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Evaluates the snapshot under the cursor.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(self.board())
    }

    /// Read access to a snapshot by move number.
    pub fn snapshot(&self, mov: usize) -> Option<&Board> {
        self.history.get(mov)
    }

    /// Plays the next mark at `pos`.
    ///
    /// Ignored (returns `false`, state untouched) when the game under the
    /// cursor is already decided or the cell is occupied; both are
    /// ordinary user actions, not errors. A play from a past cursor
    /// position truncates the now-stale forward snapshots before
    /// appending.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) -> bool {
        if !self.outcome().is_open() {
            debug!(cursor = self.cursor, "ignoring play: game already decided");
            return false;
        }
        if !self.board().is_empty(pos) {
            debug!(cursor = self.cursor, "ignoring play: cell occupied");
            return false;
        }

        let mark = self.next_player();
        let next = self.board().with_mark(pos, mark);
        self.history.truncate(self.cursor + 1);
        self.history.push(next);
        self.cursor = self.history.len() - 1;
        debug!(%mark, move_number = self.cursor, "played");
        debug_assert!(ReplayInvariants::check_all(self).is_ok());
        true
    }

    /// Moves the cursor to another move on the current branch.
    ///
    /// # Panics
    ///
    /// Panics when `mov >= self.len()`. The views only ever offer in-range
    /// indices, so an out-of-range jump is a caller bug and fails fast
    /// instead of leaving the cursor dangling.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, mov: usize) {
        assert!(
            mov < self.history.len(),
            "jump_to({mov}) out of range for history of length {}",
            self.history.len()
        );
        self.cursor = mov;
        debug!(cursor = self.cursor, "jumped");
        debug_assert!(ReplayInvariants::check_all(self).is_ok());
    }

    /// Flips the move-list display order. Never touches history or cursor.
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self) {
        self.sort = self.sort.flipped();
        debug!(sort = self.sort.label(), "sort toggled");
    }

    /// Cell where snapshot `mov` differs from its predecessor.
    ///
    /// Scans indices in ascending order and returns the first difference;
    /// a well-formed history has exactly one. `None` for move 0 and for
    /// out-of-range indices.
    pub fn changed_cell(&self, mov: usize) -> Option<Position> {
        if mov == 0 {
            return None;
        }
        let prev = self.history.get(mov - 1)?;
        let curr = self.history.get(mov)?;
        Position::iter().find(|&pos| prev.get(pos) != curr.get(pos))
    }

    /// Derived move list, always in ascending move order.
    ///
    /// Display reversal happens in the view, after labels are fixed; the
    /// sort flag never changes what these records contain.
    pub fn entries(&self) -> Vec<MoveEntry> {
        (0..self.history.len())
            .map(|index| MoveEntry {
                index,
                location: self.changed_cell(index),
                is_current: index == self.cursor,
            })
            .collect()
    }

    /// Builds a replay from raw parts, bypassing the transitions. Test
    /// support for invariant-violation checks.
    #[cfg(test)]
    pub(crate) fn from_parts(history: Vec<Board>, cursor: usize, sort: SortOrder) -> Self {
        Self {
            history,
            cursor,
            sort,
        }
    }
}

impl Default for Replay {
    fn default() -> Self {
        Self::new()
    }
}
