//! Snapshot chain invariant: each move adds exactly one mark.

use strum::IntoEnumIterator;

use super::Invariant;
use crate::game::{Position, Replay, Square};

/// Invariant: adjacent snapshots differ in exactly one cell, and that cell
/// goes from empty to occupied.
///
/// Marks are never moved, removed, or overwritten anywhere in a history.
pub struct SnapshotChain;

impl Invariant<Replay> for SnapshotChain {
    fn holds(replay: &Replay) -> bool {
        (1..replay.len()).all(|mov| {
            let (Some(prev), Some(curr)) = (replay.snapshot(mov - 1), replay.snapshot(mov))
            else {
                return false;
            };

            let mut changed = 0;
            let mut empty_to_mark = true;
            for pos in Position::iter() {
                if prev.get(pos) != curr.get(pos) {
                    changed += 1;
                    empty_to_mark &= prev.get(pos) == Square::Empty
                        && curr.get(pos) != Square::Empty;
                }
            }
            changed == 1 && empty_to_mark
        })
    }

    fn description() -> &'static str {
        "adjacent snapshots differ in exactly one cell, empty to occupied"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Player, SortOrder};

    #[test]
    fn test_fresh_replay_holds() {
        assert!(SnapshotChain::holds(&Replay::new()));
    }

    #[test]
    fn test_holds_after_plays() {
        let mut replay = Replay::new();
        for pos in [Position::Center, Position::TopLeft, Position::BottomRight] {
            assert!(replay.play(pos));
        }
        assert!(SnapshotChain::holds(&replay));
    }

    #[test]
    fn test_two_marks_in_one_step_violates() {
        let corrupt = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::TopCenter, Player::O);
        let replay =
            Replay::from_parts(vec![Board::new(), corrupt], 0, SortOrder::Ascending);

        assert!(!SnapshotChain::holds(&replay));
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let first = Board::new().with_mark(Position::Center, Player::X);
        let second = Board::new().with_mark(Position::Center, Player::O);
        let replay = Replay::from_parts(
            vec![Board::new(), first, second],
            0,
            SortOrder::Ascending,
        );

        assert!(!SnapshotChain::holds(&replay));
    }

    #[test]
    fn test_identical_snapshots_violate() {
        let replay = Replay::from_parts(
            vec![Board::new(), Board::new()],
            0,
            SortOrder::Ascending,
        );

        assert!(!SnapshotChain::holds(&replay));
    }
}
