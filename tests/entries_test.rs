//! Tests for the derived move list.

use tictactoe_replay::game::{Position, Replay, SortOrder};

#[test]
fn test_fresh_game_has_single_current_entry() {
    let replay = Replay::new();
    let entries = replay.entries();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].index, 0);
    assert_eq!(entries[0].location, None);
    assert!(entries[0].is_current);
    assert!(!entries[0].is_clickable());
}

#[test]
fn test_entries_record_locations_and_current() {
    let mut replay = Replay::new();
    assert!(replay.play(Position::Center));
    assert!(replay.play(Position::TopLeft));

    let entries = replay.entries();
    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0].location, None);
    assert_eq!(entries[1].location, Some(Position::Center));
    assert_eq!(entries[2].location, Some(Position::TopLeft));

    assert!(!entries[0].is_current);
    assert!(!entries[1].is_current);
    assert!(entries[2].is_current);

    assert!(entries[0].is_clickable());
    assert!(entries[1].is_clickable());
    assert!(!entries[2].is_clickable());
}

#[test]
fn test_current_follows_jump() {
    let mut replay = Replay::new();
    assert!(replay.play(Position::Center));
    assert!(replay.play(Position::TopLeft));

    replay.jump_to(1);
    let entries = replay.entries();

    assert!(entries[1].is_current);
    assert!(!entries[1].is_clickable());
    assert!(entries[2].is_clickable());

    replay.jump_to(0);
    let entries = replay.entries();

    assert!(entries[0].is_current);
    assert!(!entries[0].is_clickable());
    assert!(entries[1].is_clickable());
    assert!(entries[2].is_clickable());
}

#[test]
fn test_entries_stay_ascending_regardless_of_sort() {
    let mut replay = Replay::with_sort(SortOrder::Descending);
    assert!(replay.play(Position::Center));
    assert!(replay.play(Position::TopLeft));
    assert!(replay.play(Position::BottomRight));

    // The flag is display-only; the derived records keep move order, and
    // toggling changes nothing about them.
    let entries = replay.entries();
    let indices: Vec<usize> = entries.iter().map(|e| e.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);

    replay.toggle_sort();
    assert_eq!(replay.entries(), entries);
}

#[test]
fn test_location_diff_is_row_major_first_difference() {
    let mut replay = Replay::new();
    assert!(replay.play(Position::BottomRight));

    let entries = replay.entries();
    let location = entries[1].location.expect("move 1 has a location");
    assert_eq!(location.row(), 2);
    assert_eq!(location.col(), 2);
}

#[test]
fn test_entries_after_branch_truncation() {
    let mut replay = Replay::new();
    assert!(replay.play(Position::Center));
    assert!(replay.play(Position::TopLeft));
    assert!(replay.play(Position::TopRight));

    replay.jump_to(1);
    assert!(replay.play(Position::BottomLeft));

    let entries = replay.entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1].location, Some(Position::Center));
    assert_eq!(entries[2].location, Some(Position::BottomLeft));
    assert!(entries[2].is_current);
}
