//! Board sizes offered by the menu.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A playable board size.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
#[serde(try_from = "usize", into = "usize")]
pub enum BoardSize {
    /// Classic 3×3.
    #[default]
    #[display("3x3")]
    Three,
    /// 4×4.
    #[display("4x4")]
    Four,
    /// 5×5.
    #[display("5x5")]
    Five,
}

impl BoardSize {
    /// Side length.
    pub fn dim(self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Four => 4,
            BoardSize::Five => 5,
        }
    }

    /// All sizes in menu order.
    pub fn all() -> impl Iterator<Item = BoardSize> {
        <BoardSize as strum::IntoEnumIterator>::iter()
    }
}

/// A board size outside the supported 3, 4 and 5.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("unsupported board size {value:?} (expected 3, 4 or 5)")]
pub struct UnsupportedSize {
    /// The rejected input.
    pub value: String,
}

impl TryFrom<usize> for BoardSize {
    type Error = UnsupportedSize;

    fn try_from(dim: usize) -> Result<Self, Self::Error> {
        match dim {
            3 => Ok(BoardSize::Three),
            4 => Ok(BoardSize::Four),
            5 => Ok(BoardSize::Five),
            _ => Err(UnsupportedSize {
                value: dim.to_string(),
            }),
        }
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.dim()
    }
}

impl FromStr for BoardSize {
    type Err = UnsupportedSize;

    /// Accepts `"4"` as well as `"4x4"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsupported = || UnsupportedSize {
            value: s.to_string(),
        };
        let trimmed = s.trim().to_ascii_lowercase();
        let side = match trimmed.split_once('x') {
            Some((a, b)) if a == b => a,
            Some(_) => return Err(unsupported()),
            None => trimmed.as_str(),
        };
        let dim: usize = side.parse().map_err(|_| unsupported())?;
        BoardSize::try_from(dim).map_err(|_| unsupported())
    }
}
