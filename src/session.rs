//! Play session: the game in progress plus totals kept across games.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_rules::{
    BoardSize, Evaluation, EvaluationError, MoveError, Round, Scoreboard, TimerTick, TurnTimer,
};
use tracing::{debug, info, instrument, warn};

/// Errors raised by session operations.
#[derive(Debug, Clone, Display, Error)]
pub enum SessionError {
    /// A move or timer operation was attempted with no game open.
    #[display("No game in progress")]
    NoActiveGame,

    /// The move itself was rejected.
    #[display("{_0}")]
    Move(MoveError),

    /// The board could not be created.
    #[display("{_0}")]
    Board(EvaluationError),
}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        Self::Move(err)
    }
}

impl From<EvaluationError> for SessionError {
    fn from(err: EvaluationError) -> Self {
        Self::Board(err)
    }
}

/// A game on one board size: the current round, its turn timer and the
/// per-game round scores.
#[derive(Debug, Clone, Getters)]
pub struct ActiveGame {
    size: BoardSize,
    round: Round,
    timer: TurnTimer,
    scores: Scoreboard,
    /// Bumped every time a new turn starts.
    turn_number: u64,
}

impl ActiveGame {
    fn next_turn(&mut self) {
        self.timer.restart();
        self.turn_number += 1;
    }
}

/// Everything that lives for one run of the program.
///
/// Totals are the leaderboard: they survive leaving a game and are lost when
/// the process exits.
#[derive(Debug, Clone, Getters)]
pub struct Session {
    turn_seconds: u32,
    game: Option<ActiveGame>,
    totals: Scoreboard,
}

impl Session {
    /// Creates a session with no game open.
    #[instrument]
    pub fn new(turn_seconds: u32) -> Self {
        info!("Creating Session");
        Self {
            turn_seconds,
            game: None,
            totals: Scoreboard::new(),
        }
    }

    /// Opens a new game of `size`. Round scores start at zero.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, size: BoardSize) -> Result<(), SessionError> {
        info!(%size, "Starting game");
        self.game = Some(ActiveGame {
            size,
            round: Round::new(size.dim())?,
            timer: TurnTimer::new(self.turn_seconds),
            scores: Scoreboard::new(),
            turn_number: 0,
        });
        Ok(())
    }

    /// Plays the current mark at `index`.
    ///
    /// A win is counted in both the round scores and the session totals.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<Evaluation, SessionError> {
        let game = self.game.as_mut().ok_or(SessionError::NoActiveGame)?;
        let evaluation = game.round.play(index)?;

        match &evaluation {
            Evaluation::InProgress => game.next_turn(),
            Evaluation::Win { mark, .. } => {
                game.scores.record(*mark);
                self.totals.record(*mark);
                info!(
                    winner = %mark,
                    round_score = game.scores.get(*mark),
                    total_score = self.totals.get(*mark),
                    "Win recorded"
                );
            }
            Evaluation::Draw => debug!("Draw, no score change"),
        }

        Ok(evaluation)
    }

    /// Advances the turn timer by one second.
    ///
    /// When time runs out the turn passes to the other player. Returns `None`
    /// when there is no game or the round is over.
    #[instrument(skip(self))]
    pub fn tick(&mut self) -> Option<TimerTick> {
        let game = self.game.as_mut()?;
        if !game.round.is_in_progress() {
            return None;
        }
        let tick = game.timer.tick();
        if tick == TimerTick::Expired && game.round.skip_turn() {
            info!(to_move = %game.round.to_move(), "Turn time expired");
            game.turn_number += 1;
        }
        Some(tick)
    }

    /// Clears the board for another round; scores are kept.
    #[instrument(skip(self))]
    pub fn new_round(&mut self) -> Result<(), SessionError> {
        let game = self.game.as_mut().ok_or(SessionError::NoActiveGame)?;
        game.round.reset();
        game.next_turn();
        debug!(size = %game.size, "New round");
        Ok(())
    }

    /// Closes the current game. Totals are kept.
    #[instrument(skip(self))]
    pub fn leave_game(&mut self) {
        match self.game.take() {
            Some(game) => info!(size = %game.size, "Left game"),
            None => warn!("leave_game called with no game open"),
        }
    }
}
