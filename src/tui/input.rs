//! Cursor movement for keyboard navigation on an N×N grid.

use crossterm::event::KeyCode;

/// Selected cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    row: usize,
    col: usize,
    dim: usize,
}

impl Cursor {
    /// Cursor on the centre cell (upper-left of the centre on even boards).
    pub fn centered(dim: usize) -> Self {
        let mid = dim.saturating_sub(1) / 2;
        Self {
            row: mid,
            col: mid,
            dim,
        }
    }

    /// Row-major board index under the cursor.
    pub fn index(self) -> usize {
        self.row * self.dim + self.col
    }

    /// Row under the cursor.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column under the cursor.
    pub fn col(self) -> usize {
        self.col
    }
}

/// Moves cursor based on arrow keys; stops at the board edges.
pub fn move_cursor(cursor: Cursor, key: KeyCode) -> Cursor {
    let last = cursor.dim.saturating_sub(1);
    let (row, col) = match key {
        KeyCode::Up => (cursor.row.saturating_sub(1), cursor.col),
        KeyCode::Down => ((cursor.row + 1).min(last), cursor.col),
        KeyCode::Left => (cursor.row, cursor.col.saturating_sub(1)),
        KeyCode::Right => (cursor.row, (cursor.col + 1).min(last)),
        _ => (cursor.row, cursor.col),
    };
    Cursor { row, col, ..cursor }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered() {
        assert_eq!(Cursor::centered(3).index(), 4);
        assert_eq!(Cursor::centered(4).index(), 5);
        assert_eq!(Cursor::centered(5).index(), 12);
    }

    #[test]
    fn test_moves_and_clamps() {
        let mut cursor = Cursor::centered(3);
        cursor = move_cursor(cursor, KeyCode::Up);
        cursor = move_cursor(cursor, KeyCode::Up);
        assert_eq!((cursor.row(), cursor.col()), (0, 1));
        cursor = move_cursor(cursor, KeyCode::Right);
        cursor = move_cursor(cursor, KeyCode::Right);
        assert_eq!(cursor.index(), 2);
        cursor = move_cursor(cursor, KeyCode::Down);
        cursor = move_cursor(cursor, KeyCode::Left);
        assert_eq!(cursor.index(), 4);
    }

    #[test]
    fn test_other_keys_ignored() {
        let cursor = Cursor::centered(4);
        assert_eq!(move_cursor(cursor, KeyCode::Char('x')), cursor);
    }
}
