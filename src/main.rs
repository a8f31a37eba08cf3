//! Noughts - unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts::{AppConfig, BoardSize, EvalReport};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            size,
            turn_seconds,
        } => run_play(config, size, turn_seconds).await,
        Command::Eval { dim, json, board } => run_eval(dim, json, &board),
    }
}

/// Run the terminal UI
async fn run_play(
    config_path: PathBuf,
    size: Option<BoardSize>,
    turn_seconds: Option<u32>,
) -> Result<()> {
    let config = AppConfig::load_or_default(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?
        .with_overrides(size, turn_seconds)?;

    noughts::tui::run_tui(config).await
}

/// Evaluate one board and print the result
#[instrument(skip(board))]
fn run_eval(dim: usize, json: bool, board: &str) -> Result<()> {
    initialize_stderr_tracing();

    let report = EvalReport::from_notation(board, dim).context("Invalid board")?;
    info!(result = %report.result(), "Board evaluated");

    let output = if json {
        report.to_json()?
    } else {
        report.to_text()
    };
    println!("{}", output);
    Ok(())
}

fn initialize_stderr_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
