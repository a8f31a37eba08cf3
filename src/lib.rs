//! Noughts - N×N noughts and crosses in the terminal.
//!
//! The rules live in the [`noughts_rules`] crate; this crate adds what it
//! takes to play them:
//!
//! - **Config**: TOML settings for turn length, start-up board size and logging
//! - **Session**: the game in progress plus the leaderboard totals
//! - **TUI**: main menu, game board and leaderboard screens
//! - **Report**: one-shot board evaluation for the `eval` command
//!
//! # Example
//!
//! ```
//! use noughts::{BoardSize, Evaluation, Session};
//!
//! let mut session = Session::new(10);
//! session.start_game(BoardSize::Three)?;
//! for index in [0, 3, 1, 4] {
//!     session.play(index)?;
//! }
//! let result = session.play(2)?;
//! assert!(matches!(result, Evaluation::Win { .. }));
//! # Ok::<(), noughts::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod report;
mod session;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Session management
pub use session::{ActiveGame, Session, SessionError};

// Crate-level exports - Eval command
pub use report::EvalReport;

// Crate-level exports - Game types
pub use noughts_rules::{
    Board, BoardSize, Cell, Evaluation, EvaluationError, EvaluationErrorKind, Line, LineKind,
    Mark, MoveError, Round, Scoreboard, TimerTick, TurnTimer, evaluate,
};
