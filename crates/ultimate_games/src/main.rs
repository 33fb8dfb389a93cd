//! Ultimate Games - terminal front end for the ultimate tic-tac-toe engine.
//!
//! Three modes: a full-screen TUI, a line-oriented `play` loop on stdin and
//! a batch `replay` that prints the resulting game as text or JSON.

#![warn(missing_docs)]

mod cli;
mod input;
mod play;
mod render;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Tui { log_file } => tui::run_tui(&log_file),
        Command::Play => {
            init_stderr_logging();
            let result = play::run_play(io::stdin().lock(), io::stdout().lock())?;
            info!(%result, "Session ended");
            Ok(())
        }
        Command::Replay { moves, json } => {
            init_stderr_logging();
            play::run_replay(&moves, json, io::stdout().lock())?;
            Ok(())
        }
    }
}

/// Logs to stderr, quiet unless `RUST_LOG` asks for more.
fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();
}
