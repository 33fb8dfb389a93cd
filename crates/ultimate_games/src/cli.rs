//! Command-line interface for ultimate_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ultimate Games - Ultimate tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "ultimate_games")]
#[command(about = "Ultimate tic-tac-toe for two players at one terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the full-screen terminal UI
    Tui {
        /// File receiving log output while the UI owns the screen
        #[arg(long, default_value = "ultimate_games_tui.log")]
        log_file: PathBuf,
    },

    /// Play line by line: type an address per move
    Play,

    /// Apply a sequence of moves and print the resulting game
    Replay {
        /// Moves as outer_row,outer_col,inner_row,inner_col (e.g. 1,1,0,0)
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print the final game state as JSON
        #[arg(long)]
        json: bool,
    },
}
