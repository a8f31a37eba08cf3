//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts::BoardSize;

/// Noughts - N×N noughts and crosses
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "N×N noughts and crosses in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to the TOML config file (defaults are used if it doesn't exist)
        #[arg(short, long, default_value = "noughts.toml")]
        config: std::path::PathBuf,

        /// Board size (3, 4 or 5); skips the menu
        #[arg(short, long)]
        size: Option<BoardSize>,

        /// Seconds per turn before the move passes to the other player
        #[arg(long)]
        turn_seconds: Option<u32>,
    },

    /// Evaluate a board given in text notation and print the result
    Eval {
        /// Board side length
        #[arg(short, long)]
        dim: usize,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Cells in row-major order: X, O and . (separators / | , and spaces are ignored)
        board: String,
    },
}
