//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

/// Terminal tic-tac-toe with a time-traveling move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_replay")]
#[command(about = "Terminal tic-tac-toe with a time-traveling move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Start with the move list sorted newest-first
    #[arg(long)]
    pub descending: bool,

    /// Omit board coordinates from move-list labels
    #[arg(long)]
    pub plain_labels: bool,

    /// Announce a draw in the status line when the board fills with no winner
    #[arg(long)]
    pub show_draw: bool,

    /// Log file path
    #[arg(long, default_value = "tictactoe_replay.log")]
    pub log_file: PathBuf,
}
