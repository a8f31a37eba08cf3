//! Win detection for N×N boards.

use super::lines::{Line, win_lines};
use crate::{Cell, Mark};

/// Finds the first complete line in enumeration order.
///
/// A line is complete when its first cell holds a mark and every other cell
/// holds the same mark. `cells` must hold `dim * dim` entries.
pub fn winning_line(cells: &[Cell], dim: usize) -> Option<(Mark, Line)> {
    win_lines(dim).find_map(|line| {
        let first = line.cells().first().and_then(|&i| cells.get(i).copied())?;
        let mark = first.mark()?;
        line.cells()
            .iter()
            .all(|&i| cells.get(i).copied() == Some(first))
            .then_some((mark, line))
    })
}
