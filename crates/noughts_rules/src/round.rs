//! A single round of play on one board.

use derive_getters::Getters;
use tracing::{debug, info, instrument};

use crate::error::{EvaluationError, MoveError};
use crate::rules::{Evaluation, Line};
use crate::{Board, Mark};

/// One round: empty board to win or draw, crosses moving first.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Round {
    /// Current board.
    board: Board,
    /// Mark that plays next (or played last, once the round is over).
    to_move: Mark,
    /// Evaluation after the latest move.
    status: Evaluation,
    /// Marks placed so far.
    moves: usize,
}

impl Round {
    /// Starts a round on an empty `dim`×`dim` board.
    #[instrument]
    pub fn new(dim: usize) -> Result<Self, EvaluationError> {
        Ok(Self {
            board: Board::new(dim)?,
            to_move: Mark::Cross,
            status: Evaluation::InProgress,
            moves: 0,
        })
    }

    /// Places the current mark at `index` and evaluates the board.
    ///
    /// The turn passes to the opponent only while the round continues.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn play(&mut self, index: usize) -> Result<Evaluation, MoveError> {
        if self.status.is_finished() {
            return Err(MoveError::RoundOver);
        }

        self.board.place(index, self.to_move)?;
        self.moves += 1;
        self.status = self.board.evaluate();

        match &self.status {
            Evaluation::InProgress => self.to_move = self.to_move.opponent(),
            Evaluation::Win { mark, line } => {
                info!(winner = %mark, line = %line.kind(), moves = self.moves, "Round won");
            }
            Evaluation::Draw => info!(moves = self.moves, "Round drawn"),
        }

        Ok(self.status.clone())
    }

    /// Hands the turn to the opponent without a move (turn time ran out).
    ///
    /// Returns `false` if the round is already over.
    #[instrument(skip(self))]
    pub fn skip_turn(&mut self) -> bool {
        if self.status.is_finished() {
            return false;
        }
        debug!(skipped = %self.to_move, "Turn skipped");
        self.to_move = self.to_move.opponent();
        true
    }

    /// Clears the board for a fresh round on the same dimension.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.to_move = Mark::Cross;
        self.status = Evaluation::InProgress;
        self.moves = 0;
    }

    /// Checks whether the round is still accepting moves.
    pub fn is_in_progress(&self) -> bool {
        !self.status.is_finished()
    }

    /// The completed line, once the round is won.
    pub fn winning_line(&self) -> Option<&Line> {
        self.status.line()
    }

    /// Checks whether `index` lies on the winning line.
    pub fn is_winning_cell(&self, index: usize) -> bool {
        self.winning_line().is_some_and(|line| line.contains(index))
    }
}
