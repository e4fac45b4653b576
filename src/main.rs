//! Tic-tac-toe with a time-traveling move history - terminal client.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_replay::cli::Cli;
use tictactoe_replay::tui::{self, ViewOptions};
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns stdout for the whole session, so logs go to a file.
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("failed to create log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!("starting tictactoe_replay");

    tui::run(ViewOptions::from(&cli))
}
