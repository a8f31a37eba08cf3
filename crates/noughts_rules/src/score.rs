//! Win counters per mark.

use serde::{Deserialize, Serialize};

use crate::Mark;

/// Number of rounds won by each mark. Draws are not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    cross: u32,
    nought: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a win for `mark`.
    pub fn record(&mut self, mark: Mark) {
        match mark {
            Mark::Cross => self.cross += 1,
            Mark::Nought => self.nought += 1,
        }
    }

    /// Wins for `mark`.
    pub fn get(&self, mark: Mark) -> u32 {
        match mark {
            Mark::Cross => self.cross,
            Mark::Nought => self.nought,
        }
    }

    /// Total wins recorded.
    pub fn total(&self) -> u32 {
        self.cross + self.nought
    }

    /// The mark with more wins, or `None` when level.
    pub fn leader(&self) -> Option<Mark> {
        match self.cross.cmp(&self.nought) {
            std::cmp::Ordering::Greater => Some(Mark::Cross),
            std::cmp::Ordering::Less => Some(Mark::Nought),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Sets both counters back to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_leader() {
        let mut scores = Scoreboard::new();
        assert_eq!(scores.leader(), None);
        scores.record(Mark::Nought);
        scores.record(Mark::Nought);
        scores.record(Mark::Cross);
        assert_eq!(scores.get(Mark::Nought), 2);
        assert_eq!(scores.get(Mark::Cross), 1);
        assert_eq!(scores.total(), 3);
        assert_eq!(scores.leader(), Some(Mark::Nought));
        scores.reset();
        assert_eq!(scores, Scoreboard::new());
    }
}
