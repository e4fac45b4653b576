//! Tic-tac-toe with a time-traveling move history.
//!
//! The whole system is a small view-state machine: a replayable history of
//! board snapshots driven by user input, rendered in the terminal.
//!
//! # Architecture
//!
//! - **Game**: board types, win/draw rules, and the [`game::Replay`] state
//!   machine (history, cursor, sort flag) with first-class invariants
//! - **Tui**: ratatui renderer and input dispatch; views derive everything
//!   from the replay state and feed actions back through its three
//!   transitions
//! - **Cli**: display-policy flags (label detail, draw announcement,
//!   initial sort order)
//!
//! # Example
//!
//! ```
//! use tictactoe_replay::game::{Position, Replay};
//!
//! let mut replay = Replay::new();
//! replay.play(Position::Center);
//! replay.play(Position::TopLeft);
//! replay.jump_to(1);
//! assert_eq!(replay.cursor(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod game;
pub mod tui;

pub use game::{Board, Outcome, Player, Position, Replay, SortOrder, Square};
