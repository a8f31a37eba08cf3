//! Per-turn countdown.
//!
//! The timer keeps no clock of its own; whoever drives the game calls
//! [`TurnTimer::tick`] once per elapsed second.

use tracing::{debug, instrument};

/// Seconds a player has to move before the turn passes.
pub const DEFAULT_TURN_SECONDS: u32 = 10;

/// Result of advancing the timer by one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTick {
    /// Time left after this tick.
    Running(u32),
    /// The countdown reached zero and has been restarted.
    Expired,
}

/// Countdown from `duration` seconds to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnTimer {
    duration: u32,
    remaining: u32,
}

impl TurnTimer {
    /// Creates a timer of `duration` seconds (at least one).
    pub fn new(duration: u32) -> Self {
        let duration = duration.max(1);
        Self {
            duration,
            remaining: duration,
        }
    }

    /// Full length of a turn in seconds.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Seconds left in the current turn.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Advances the countdown by one second.
    #[instrument(skip(self), fields(remaining = self.remaining))]
    pub fn tick(&mut self) -> TimerTick {
        if self.remaining > 1 {
            self.remaining -= 1;
            TimerTick::Running(self.remaining)
        } else {
            debug!("Turn timer expired");
            self.remaining = self.duration;
            TimerTick::Expired
        }
    }

    /// Starts the countdown over.
    pub fn restart(&mut self) {
        self.remaining = self.duration;
    }
}

impl Default for TurnTimer {
    fn default() -> Self {
        Self::new(DEFAULT_TURN_SECONDS)
    }
}
