//! Draw detection logic.

use crate::Cell;

/// Checks whether any cell is still empty.
pub fn has_empty(cells: &[Cell]) -> bool {
    cells.iter().any(|c| c.is_empty())
}

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(cells: &[Cell]) -> bool {
    !has_empty(cells)
}
