//! Terminal UI: main menu, game board and leaderboard.

mod controller;
mod input;
mod screen;
mod screens;

pub use controller::GameController;
pub use input::{Cursor, move_cursor};
pub use screen::{Screen, ScreenTransition};
pub use screens::{GameBoardScreen, LeaderboardScreen, MainMenuScreen};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

use crate::{AppConfig, Session};

/// Runs the TUI until the user quits.
///
/// Logs go to the configured log file so they don't interfere with the
/// terminal.
pub async fn run_tui(config: AppConfig) -> Result<()> {
    init_file_tracing(&config)?;

    info!("Starting noughts TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let session = Session::new(*config.turn_seconds());
    let mut controller = GameController::new(session, *config.default_size());
    let res = controller.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    let totals = controller.session().totals();
    info!(
        cross = totals.get(noughts_rules::Mark::Cross),
        nought = totals.get(noughts_rules::Mark::Nought),
        "Session finished"
    );

    res
}

#[instrument(skip(config), fields(log_file = %config.log_file().display()))]
fn init_file_tracing(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,noughts=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}
