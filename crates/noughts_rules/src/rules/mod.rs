//! Game rules for N×N noughts and crosses.
//!
//! This module contains pure functions for evaluating a board. Rules are
//! separated from board storage so they can be called on raw cell slices
//! as well as on a [`Board`](crate::Board).

mod draw;
mod evaluate;
mod lines;
mod win;

pub use draw::{has_empty, is_full};
pub use evaluate::{Evaluation, evaluate};
pub(crate) use evaluate::{check_shape, evaluate_unchecked};
pub use lines::{Line, LineKind, WinLines, win_lines};
pub use win::winning_line;
