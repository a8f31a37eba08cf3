//! Board evaluation: win, draw or still in progress.

use serde::Serialize;
use tracing::{debug, instrument};

use super::draw::has_empty;
use super::lines::Line;
use super::win::winning_line;
use crate::error::{EvaluationError, EvaluationErrorKind};
use crate::{Cell, Mark};

/// Outcome of evaluating a board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Evaluation {
    /// No complete line and at least one empty cell.
    InProgress,
    /// `mark` completed `line`.
    Win {
        /// The winning mark.
        mark: Mark,
        /// The first complete line in enumeration order.
        line: Line,
    },
    /// Board full, no complete line.
    Draw,
}

impl Evaluation {
    /// Checks whether the game has ended (win or draw).
    pub fn is_finished(&self) -> bool {
        !matches!(self, Evaluation::InProgress)
    }

    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Evaluation::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line, if any.
    pub fn line(&self) -> Option<&Line> {
        match self {
            Evaluation::Win { line, .. } => Some(line),
            _ => None,
        }
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Evaluation::InProgress => write!(f, "in progress"),
            Evaluation::Win { mark, line } => write!(f, "{} wins ({})", mark, line.kind()),
            Evaluation::Draw => write!(f, "draw"),
        }
    }
}

/// Evaluates a flattened `dim`×`dim` board.
///
/// Returns [`Evaluation::Win`] for the first complete line (rows and columns
/// interleaved, then the main diagonal, then the anti-diagonal),
/// [`Evaluation::InProgress`] if no line is complete and a cell is still
/// empty, and [`Evaluation::Draw`] otherwise.
///
/// Fails if `dim` is zero or `cells.len() != dim * dim`.
#[instrument(skip(cells), fields(len = cells.len()))]
pub fn evaluate(cells: &[Cell], dim: usize) -> Result<Evaluation, EvaluationError> {
    check_shape(cells.len(), dim)?;
    Ok(evaluate_unchecked(cells, dim))
}

/// Evaluates a board whose shape is already known to be valid.
pub(crate) fn evaluate_unchecked(cells: &[Cell], dim: usize) -> Evaluation {
    let evaluation = match winning_line(cells, dim) {
        Some((mark, line)) => Evaluation::Win { mark, line },
        None if has_empty(cells) => Evaluation::InProgress,
        None => Evaluation::Draw,
    };
    debug!(dim, %evaluation, "Board evaluated");
    evaluation
}

/// Checks that `len` cells form a `dim`×`dim` board.
#[track_caller]
pub(crate) fn check_shape(len: usize, dim: usize) -> Result<(), EvaluationError> {
    if dim == 0 {
        return Err(EvaluationError::new(EvaluationErrorKind::ZeroDimension));
    }
    let expected = dim.checked_mul(dim).ok_or_else(|| {
        EvaluationError::new(EvaluationErrorKind::LengthMismatch {
            expected: usize::MAX,
            actual: len,
        })
    })?;
    if len != expected {
        return Err(EvaluationError::new(EvaluationErrorKind::LengthMismatch {
            expected,
            actual: len,
        }));
    }
    Ok(())
}
