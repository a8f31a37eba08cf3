//! Candidate winning lines for an N×N board.

use derive_more::Display;
use serde::Serialize;
use std::iter::FusedIterator;

/// Which row, column or diagonal a [`Line`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Row `i` (zero-based), displayed one-based.
    #[display("row {}", _0 + 1)]
    Row(usize),
    /// Column `i` (zero-based), displayed one-based.
    #[display("column {}", _0 + 1)]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl LineKind {
    /// Board indices covered by this line on a board of side `dim`.
    pub fn indices(self, dim: usize) -> Vec<usize> {
        match self {
            LineKind::Row(i) => (0..dim).map(|j| i * dim + j).collect(),
            LineKind::Column(i) => (0..dim).map(|j| j * dim + i).collect(),
            LineKind::MainDiagonal => (0..dim).map(|i| i * dim + i).collect(),
            LineKind::AntiDiagonal => (0..dim).map(|i| i * dim + (dim - 1 - i)).collect(),
        }
    }
}

/// A candidate winning line: `dim` board indices in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Line {
    kind: LineKind,
    cells: Vec<usize>,
}

impl Line {
    /// Builds the line of the given kind for a board of side `dim`.
    pub fn new(kind: LineKind, dim: usize) -> Self {
        Self {
            kind,
            cells: kind.indices(dim),
        }
    }

    /// Which row, column or diagonal this is.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Board indices on this line.
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Checks whether `index` lies on this line.
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// Iterator over all `2 * dim + 2` candidate lines of a board.
///
/// Order: row 0, column 0, row 1, column 1, …, then the main diagonal and
/// finally the anti-diagonal. The first complete line in this order wins.
#[derive(Debug, Clone)]
pub struct WinLines {
    dim: usize,
    next: usize,
    total: usize,
}

impl WinLines {
    /// Lines for a board of side `dim`. A zero dimension yields no lines.
    pub fn new(dim: usize) -> Self {
        let total = if dim == 0 { 0 } else { 2 * dim + 2 };
        Self {
            dim,
            next: 0,
            total,
        }
    }

    fn kind_at(&self, k: usize) -> LineKind {
        if k < 2 * self.dim {
            let i = k / 2;
            if k % 2 == 0 {
                LineKind::Row(i)
            } else {
                LineKind::Column(i)
            }
        } else if k == 2 * self.dim {
            LineKind::MainDiagonal
        } else {
            LineKind::AntiDiagonal
        }
    }
}

impl Iterator for WinLines {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        if self.next >= self.total {
            return None;
        }
        let kind = self.kind_at(self.next);
        self.next += 1;
        Some(Line::new(kind, self.dim))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for WinLines {}

impl FusedIterator for WinLines {}

/// All candidate lines for a board of side `dim`, in tie-break order.
pub fn win_lines(dim: usize) -> WinLines {
    WinLines::new(dim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count() {
        for dim in 1..=6 {
            assert_eq!(win_lines(dim).len(), 2 * dim + 2);
            assert_eq!(win_lines(dim).count(), 2 * dim + 2);
        }
        assert_eq!(win_lines(0).count(), 0);
    }

    #[test]
    fn test_enumeration_order_3x3() {
        let lines: Vec<Vec<usize>> = win_lines(3).map(|l| l.cells().to_vec()).collect();
        assert_eq!(
            lines,
            vec![
                vec![0, 1, 2],
                vec![0, 3, 6],
                vec![3, 4, 5],
                vec![1, 4, 7],
                vec![6, 7, 8],
                vec![2, 5, 8],
                vec![0, 4, 8],
                vec![2, 4, 6],
            ]
        );
    }

    #[test]
    fn test_kinds_in_order() {
        let kinds: Vec<LineKind> = win_lines(2).map(|l| l.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                LineKind::Row(0),
                LineKind::Column(0),
                LineKind::Row(1),
                LineKind::Column(1),
                LineKind::MainDiagonal,
                LineKind::AntiDiagonal,
            ]
        );
    }

    #[test]
    fn test_single_cell_lines() {
        assert!(win_lines(1).all(|l| l.cells() == [0]));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(LineKind::Row(0).to_string(), "row 1");
        assert_eq!(LineKind::Column(2).to_string(), "column 3");
        assert_eq!(LineKind::AntiDiagonal.to_string(), "anti-diagonal");
    }
}
