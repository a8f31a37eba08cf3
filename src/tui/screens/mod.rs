//! Screen implementations for the menu state machine.

mod game_board;
mod leaderboard;
mod main_menu;

pub use game_board::GameBoardScreen;
pub use leaderboard::LeaderboardScreen;
pub use main_menu::MainMenuScreen;
