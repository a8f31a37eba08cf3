//! Screen trait and transition type for the menu state machine.

use crossterm::event::KeyEvent;
use noughts_rules::BoardSize;
use ratatui::Frame;

use crate::Session;

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`GameController`](super::GameController) state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Navigate to the main menu.
    GoToMainMenu,
    /// Open a new game on a board of the given size.
    GoToBoard(BoardSize),
    /// Navigate to the leaderboard.
    GoToLeaderboard,
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each screen in the state machine.
///
/// Each screen owns its own view state, renders its UI, and handles key
/// events. Game state lives in the [`Session`] the controller passes in.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, session: &Session);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, session: &mut Session) -> ScreenTransition;
}
