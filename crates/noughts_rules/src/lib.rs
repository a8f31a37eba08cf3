//! Pure N×N noughts and crosses rules.
//!
//! The heart of the crate is [`evaluate`], which decides whether a square
//! board of any size has been won, drawn, or is still in progress. Around it
//! sit the pieces a game front end needs to run rounds: [`Round`] for turn
//! handling, [`TurnTimer`] for the per-turn countdown and [`Scoreboard`] for
//! win counts. Nothing here does I/O.
//!
//! # Example
//!
//! ```
//! use noughts_rules::{Board, Evaluation, Mark, evaluate};
//!
//! let board = Board::parse("XXX OO. ...", 3)?;
//! match evaluate(board.cells(), board.dim())? {
//!     Evaluation::Win { mark, line } => {
//!         assert_eq!(mark, Mark::Cross);
//!         assert_eq!(line.cells(), [0, 1, 2]);
//!     }
//!     other => panic!("expected a win, got {other}"),
//! }
//! # Ok::<(), noughts_rules::EvaluationError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod round;
mod rules;
mod score;
mod size;
mod timer;
mod types;

pub use error::{EvaluationError, EvaluationErrorKind, MoveError};
pub use round::Round;
pub use rules::{
    Evaluation, Line, LineKind, WinLines, evaluate, has_empty, is_full, win_lines, winning_line,
};
pub use score::Scoreboard;
pub use size::{BoardSize, UnsupportedSize};
pub use timer::{DEFAULT_TURN_SECONDS, TimerTick, TurnTimer};
pub use types::{Board, Cell, Mark};
