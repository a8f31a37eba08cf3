//! Error types for board evaluation and move handling.

use derive_more::{Display, Error};
use tracing::instrument;

/// What was wrong with the input handed to the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EvaluationErrorKind {
    /// The board dimension was zero.
    #[display("board dimension must be at least 1")]
    ZeroDimension,

    /// The number of cells does not equal `dim * dim`.
    #[display("board has {actual} cells, expected {expected}")]
    LengthMismatch {
        /// `dim * dim`.
        expected: usize,
        /// Cells actually supplied.
        actual: usize,
    },

    /// A character in board notation is not a mark or an empty cell.
    #[display("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
        /// Character offset in the input text.
        position: usize,
    },
}

/// Invalid input to the evaluator, with the location that raised it.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid input: {} at {}:{}", kind, file, line)]
pub struct EvaluationError {
    /// What went wrong.
    pub kind: EvaluationErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EvaluationError {
    /// Creates a new evaluation error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: EvaluationErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &EvaluationErrorKind {
        &self.kind
    }
}

/// Error returned when a move cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The index lies outside the board.
    #[display("Cell {index} is out of bounds (board has {cells} cells)")]
    OutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of cells on the board.
        cells: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The round has already been won or drawn.
    #[display("Round is already over")]
    RoundOver,
}

impl std::error::Error for MoveError {}
