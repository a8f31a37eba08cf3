//! Core domain types: marks, cells and the square board.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{EvaluationError, EvaluationErrorKind, MoveError};
use crate::rules::{self, Evaluation};

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum Mark {
    /// Crosses (goes first).
    #[display("X")]
    #[serde(rename = "X")]
    Cross,
    /// Noughts (goes second).
    #[display("O")]
    #[serde(rename = "O")]
    Nought,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Cross => Mark::Nought,
            Mark::Nought => Mark::Cross,
        }
    }

    /// Returns the single-character symbol for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::Cross => 'X',
            Mark::Nought => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Checks whether the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Symbol used by the text notation (`X`, `O` or `.`).
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(mark) => mark.symbol(),
        }
    }

    /// Parses one notation character. Returns `None` for anything that is
    /// not a mark or an empty marker.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'X' | 'x' => Some(Cell::Occupied(Mark::Cross)),
            'O' | 'o' | '0' => Some(Cell::Occupied(Mark::Nought)),
            '.' | '_' | '-' => Some(Cell::Empty),
            _ => None,
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Occupied(mark)
    }
}

/// Square board of `dim * dim` cells in row-major order.
///
/// The cell count is fixed at construction; cells only change by placing a
/// mark into an empty cell or by clearing the whole board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    dim: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of the given dimension.
    #[instrument]
    pub fn new(dim: usize) -> Result<Self, EvaluationError> {
        rules::check_shape(dim.saturating_mul(dim), dim)?;
        Ok(Self {
            dim,
            cells: vec![Cell::Empty; dim * dim],
        })
    }

    /// Creates a board from existing cells, checking that there are exactly
    /// `dim * dim` of them.
    #[instrument(skip(cells), fields(len = cells.len()))]
    pub fn from_cells(cells: Vec<Cell>, dim: usize) -> Result<Self, EvaluationError> {
        rules::check_shape(cells.len(), dim)?;
        Ok(Self { dim, cells })
    }

    /// Parses board notation such as `"XXX/OO./..."`.
    ///
    /// Marks are `X` and `O` (either case, `0` also means `O`); empty cells
    /// are `.`, `_` or `-`. Whitespace, `/`, `|` and `,` are separators and
    /// ignored.
    #[instrument]
    pub fn parse(text: &str, dim: usize) -> Result<Self, EvaluationError> {
        let mut cells = Vec::with_capacity(dim.saturating_mul(dim));
        for (position, symbol) in text.chars().enumerate() {
            if symbol.is_whitespace() || matches!(symbol, '/' | '|' | ',') {
                continue;
            }
            let cell = Cell::from_symbol(symbol).ok_or_else(|| {
                EvaluationError::new(EvaluationErrorKind::InvalidSymbol { symbol, position })
            })?;
            cells.push(cell);
        }
        debug!(cells = cells.len(), "Parsed board notation");
        Self::from_cells(cells, dim)
    }

    /// Side length of the board.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Gets the cell at `index`.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Gets the cell at `(row, col)`.
    pub fn get_at(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.dim || col >= self.dim {
            return None;
        }
        self.get(row * self.dim + col)
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Places `mark` at `index`.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        let cells = self.cells.len();
        match self.cells.get_mut(index) {
            None => Err(MoveError::OutOfBounds { index, cells }),
            Some(Cell::Occupied(_)) => Err(MoveError::CellOccupied(index)),
            Some(cell) => {
                *cell = Cell::Occupied(mark);
                Ok(())
            }
        }
    }

    /// Resets every cell to empty, keeping the dimension.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Evaluates the board. The shape was checked at construction, so this
    /// cannot fail.
    pub fn evaluate(&self) -> Evaluation {
        rules::evaluate_unchecked(&self.cells, self.dim)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(self.dim).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4).unwrap();
        assert_eq!(board.cells().len(), 16);
        assert_eq!(board.empty_count(), 16);
        assert!(!board.is_full());
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = Board::new(0).unwrap_err();
        assert_eq!(err.kind(), &EvaluationErrorKind::ZeroDimension);
    }

    #[test]
    fn test_place_mark() {
        let mut board = Board::new(3).unwrap();
        board.place(4, Mark::Cross).unwrap();
        assert_eq!(board.get(4), Some(Cell::Occupied(Mark::Cross)));
        assert_eq!(board.get_at(1, 1), Some(Cell::Occupied(Mark::Cross)));
        assert!(!board.is_empty(4));
    }

    #[test]
    fn test_place_on_occupied_cell() {
        let mut board = Board::new(3).unwrap();
        board.place(0, Mark::Cross).unwrap();
        assert_eq!(board.place(0, Mark::Nought), Err(MoveError::CellOccupied(0)));
    }

    #[test]
    fn test_place_out_of_bounds() {
        let mut board = Board::new(3).unwrap();
        assert_eq!(
            board.place(9, Mark::Cross),
            Err(MoveError::OutOfBounds { index: 9, cells: 9 })
        );
        assert_eq!(board.get_at(3, 0), None);
    }

    #[test]
    fn test_clear_keeps_dimension() {
        let mut board = Board::parse("XOX OXO XOX", 3).unwrap();
        assert!(board.is_full());
        board.clear();
        assert_eq!(board.dim(), 3);
        assert_eq!(board.empty_count(), 9);
    }

    #[test]
    fn test_parse_and_display() {
        let board = Board::parse("xx0/o../-_X", 3).unwrap();
        assert_eq!(board.to_string(), "XXO\nO..\n..X");
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        let err = Board::parse("XXQ......", 3).unwrap_err();
        assert_eq!(
            err.kind(),
            &EvaluationErrorKind::InvalidSymbol {
                symbol: 'Q',
                position: 2
            }
        );
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        let err = Board::parse("XXX", 2).unwrap_err();
        assert_eq!(
            err.kind(),
            &EvaluationErrorKind::LengthMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_mark_opponent() {
        assert_eq!(Mark::Cross.opponent(), Mark::Nought);
        assert_eq!(Mark::Nought.opponent(), Mark::Cross);
    }
}
