//! Tests for playing rounds move by move.

use noughts::{Cell, Evaluation, LineKind, Mark, MoveError, Round};

#[test]
fn test_crosses_move_first_and_turns_alternate() {
    let mut round = Round::new(3).unwrap();
    assert_eq!(*round.to_move(), Mark::Cross);

    round.play(4).unwrap();
    assert_eq!(*round.to_move(), Mark::Nought);
    assert_eq!(round.board().get(4), Some(Cell::Occupied(Mark::Cross)));

    round.play(0).unwrap();
    assert_eq!(*round.to_move(), Mark::Cross);
    assert_eq!(*round.moves(), 2);
}

#[test]
fn test_rejected_moves_keep_the_turn() {
    let mut round = Round::new(3).unwrap();
    round.play(4).unwrap();

    assert_eq!(round.play(4), Err(MoveError::CellOccupied(4)));
    assert_eq!(
        round.play(9),
        Err(MoveError::OutOfBounds { index: 9, cells: 9 })
    );
    assert_eq!(*round.to_move(), Mark::Nought);
    assert_eq!(*round.moves(), 1);
}

#[test]
fn test_win_ends_round() {
    let mut round = Round::new(4).unwrap();
    // X down column 0, O along row 1 (short of completing it)
    for index in [0, 1, 4, 5, 8, 6] {
        assert_eq!(round.play(index).unwrap(), Evaluation::InProgress);
    }
    let result = round.play(12).unwrap();
    assert_eq!(result.winner(), Some(Mark::Cross));
    assert_eq!(result.line().unwrap().kind(), LineKind::Column(0));
    assert!(!round.is_in_progress());
    assert!(round.is_winning_cell(12));
    assert!(!round.is_winning_cell(1));

    assert_eq!(round.play(15), Err(MoveError::RoundOver));
    // The winner stays recorded as the last mover.
    assert_eq!(*round.to_move(), Mark::Cross);
}

#[test]
fn test_draw_ends_round() {
    let mut round = Round::new(3).unwrap();
    // X O X / X O O / O X X
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        round.play(index).unwrap();
    }
    assert_eq!(*round.status(), Evaluation::Draw);
    assert!(round.winning_line().is_none());
    assert_eq!(round.play(0), Err(MoveError::RoundOver));
}

#[test]
fn test_skip_turn_only_while_in_progress() {
    let mut round = Round::new(3).unwrap();
    assert!(round.skip_turn());
    assert_eq!(*round.to_move(), Mark::Nought);

    round.play(0).unwrap();
    assert_eq!(round.board().get(0), Some(Cell::Occupied(Mark::Nought)));

    let mut finished = Round::new(1).unwrap();
    finished.play(0).unwrap();
    assert!(!finished.skip_turn());
}

#[test]
fn test_reset_clears_board() {
    let mut round = Round::new(5).unwrap();
    round.play(12).unwrap();
    round.reset();
    assert_eq!(round.board().empty_count(), 25);
    assert_eq!(*round.to_move(), Mark::Cross);
    assert_eq!(*round.status(), Evaluation::InProgress);
    assert_eq!(*round.moves(), 0);
}

#[test]
fn test_zero_dimension_round_is_rejected() {
    assert!(Round::new(0).is_err());
}
