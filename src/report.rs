//! Output of the `eval` command.

use derive_getters::Getters;
use derive_new::new;
use noughts_rules::{Board, Evaluation, EvaluationError};
use serde::Serialize;
use tracing::{info, instrument};

/// A parsed board together with its evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, new)]
pub struct EvalReport {
    /// Side length.
    dim: usize,
    /// Board rows in notation form (`X`, `O`, `.`).
    rows: Vec<String>,
    /// Evaluation result.
    result: Evaluation,
}

impl EvalReport {
    /// Parses `notation` as a `dim`×`dim` board and evaluates it.
    #[instrument]
    pub fn from_notation(notation: &str, dim: usize) -> Result<Self, EvaluationError> {
        let board = Board::parse(notation, dim)?;
        let result = noughts_rules::evaluate(board.cells(), board.dim())?;
        info!(%result, "Evaluated board from command line");
        let rows = board.to_string().lines().map(str::to_string).collect();
        Ok(Self::new(dim, rows, result))
    }

    /// Human-readable rendering: the grid followed by the result.
    pub fn to_text(&self) -> String {
        let mut text = self.rows.join("\n");
        text.push_str("\n\n");
        text.push_str(&format!("Result: {}", self.result));
        if let Some(line) = self.result.line() {
            let cells: Vec<String> = line.cells().iter().map(|i| i.to_string()).collect();
            text.push_str(&format!("\nLine: {}", cells.join(", ")));
        }
        text
    }

    /// JSON rendering.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
