//! Tests for board evaluation across dimensions.

use noughts::{Board, Cell, Evaluation, EvaluationErrorKind, LineKind, Mark, evaluate};

fn board(text: &str, dim: usize) -> Vec<Cell> {
    Board::parse(text, dim).unwrap().cells().to_vec()
}

#[test]
fn test_empty_boards_are_in_progress() {
    for dim in 1..=5 {
        let cells = vec![Cell::Empty; dim * dim];
        assert_eq!(evaluate(&cells, dim).unwrap(), Evaluation::InProgress);
    }
}

#[test]
fn test_single_cell_board() {
    assert_eq!(evaluate(&[Cell::Empty], 1).unwrap(), Evaluation::InProgress);

    let result = evaluate(&[Cell::Occupied(Mark::Nought)], 1).unwrap();
    assert_eq!(result.winner(), Some(Mark::Nought));
    // Every line is the same single cell; the first row wins the tie.
    assert_eq!(result.line().unwrap().kind(), LineKind::Row(0));
}

#[test]
fn test_top_row_win_on_every_size() {
    for dim in 2..=5 {
        let mut cells = vec![Cell::Empty; dim * dim];
        for cell in cells.iter_mut().take(dim) {
            *cell = Cell::Occupied(Mark::Cross);
        }
        let result = evaluate(&cells, dim).unwrap();
        assert_eq!(result.winner(), Some(Mark::Cross), "dim {}", dim);
        assert_eq!(result.line().unwrap().kind(), LineKind::Row(0));
    }
}

#[test]
fn test_main_diagonal_win_on_every_size() {
    for dim in 2..=5 {
        let mut cells = vec![Cell::Empty; dim * dim];
        for i in 0..dim {
            cells[i * dim + i] = Cell::Occupied(Mark::Nought);
        }
        let result = evaluate(&cells, dim).unwrap();
        assert_eq!(result.winner(), Some(Mark::Nought), "dim {}", dim);
        assert_eq!(result.line().unwrap().kind(), LineKind::MainDiagonal);
    }
}

#[test]
fn test_anti_diagonal_win() {
    let cells = board("..O/.O./O..", 3);
    let result = evaluate(&cells, 3).unwrap();
    assert_eq!(result.winner(), Some(Mark::Nought));
    assert_eq!(result.line().unwrap().cells(), &[2, 4, 6]);
}

#[test]
fn test_column_win() {
    let cells = board(".X../.X../.X../.XOO", 4);
    let result = evaluate(&cells, 4).unwrap();
    assert_eq!(result.winner(), Some(Mark::Cross));
    assert_eq!(result.line().unwrap().kind(), LineKind::Column(1));
    assert_eq!(result.line().unwrap().cells(), &[1, 5, 9, 13]);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let cells = board("XOX/XOO/OXX", 3);
    assert_eq!(evaluate(&cells, 3).unwrap(), Evaluation::Draw);

    let cells = board("XO/OX", 2);
    assert_ne!(evaluate(&cells, 2).unwrap(), Evaluation::Draw);

    let cells = board("XX/OO", 2);
    // Both marks complete a row; row 1 is checked first.
    assert_eq!(evaluate(&cells, 2).unwrap().winner(), Some(Mark::Cross));
}

#[test]
fn test_win_on_full_board_beats_draw() {
    let cells = board("XOX/OXO/OXX", 3);
    let result = evaluate(&cells, 3).unwrap();
    assert_eq!(result.winner(), Some(Mark::Cross));
    assert_eq!(result.line().unwrap().kind(), LineKind::MainDiagonal);
}

#[test]
fn test_row_checked_before_column() {
    let cells = board("XXX/X../X..", 3);
    let result = evaluate(&cells, 3).unwrap();
    assert_eq!(result.line().unwrap().kind(), LineKind::Row(0));
}

#[test]
fn test_partial_line_is_in_progress() {
    let cells = board("XX./OO./...", 3);
    assert_eq!(evaluate(&cells, 3).unwrap(), Evaluation::InProgress);
}

#[test]
fn test_evaluation_is_repeatable() {
    let cells = board("XOXO/OXOX/..../....", 4);
    let first = evaluate(&cells, 4).unwrap();
    let second = evaluate(&cells, 4).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, Evaluation::InProgress);
}

#[test]
fn test_invalid_input_is_rejected() {
    let err = evaluate(&[], 0).unwrap_err();
    assert_eq!(err.kind(), &EvaluationErrorKind::ZeroDimension);

    let err = evaluate(&[Cell::Empty; 8], 3).unwrap_err();
    assert_eq!(
        err.kind(),
        &EvaluationErrorKind::LengthMismatch {
            expected: 9,
            actual: 8
        }
    );
}

#[test]
fn test_board_method_matches_free_function() {
    let parsed = Board::parse("OOOO/X.X./.X../...X", 4).unwrap();
    assert_eq!(
        parsed.evaluate(),
        evaluate(parsed.cells(), parsed.dim()).unwrap()
    );
    assert_eq!(parsed.evaluate().winner(), Some(Mark::Nought));
}
