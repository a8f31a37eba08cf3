//! Game controller - the state machine driving the multi-screen TUI.

use crossterm::event::{self, Event, KeyEventKind};
use derive_getters::Getters;
use noughts_rules::BoardSize;
use ratatui::{Terminal, backend::Backend};
use tokio::time::{Duration, Instant, sleep};
use tracing::{debug, error, info, instrument};

use crate::Session;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::{GameBoardScreen, LeaderboardScreen, MainMenuScreen};

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Active screen in the state machine.
#[derive(Debug)]
enum ActiveScreen {
    MainMenu(MainMenuScreen),
    Board(GameBoardScreen),
    Leaderboard(LeaderboardScreen),
}

impl ActiveScreen {
    fn as_screen(&self) -> &dyn Screen {
        match self {
            ActiveScreen::MainMenu(s) => s,
            ActiveScreen::Board(s) => s,
            ActiveScreen::Leaderboard(s) => s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::MainMenu(s) => s,
            ActiveScreen::Board(s) => s,
            ActiveScreen::Leaderboard(s) => s,
        }
    }
}

/// Controller that owns the session and drives screen transitions.
///
/// Call [`GameController::run`] to start the event loop.
#[derive(Debug, Getters)]
pub struct GameController {
    session: Session,
    initial_size: Option<BoardSize>,
}

impl GameController {
    /// Creates a controller. With `initial_size` set the board opens
    /// straight away instead of the main menu.
    #[instrument(skip(session))]
    pub fn new(session: Session, initial_size: Option<BoardSize>) -> Self {
        info!("Creating GameController");
        Self {
            session,
            initial_size,
        }
    }

    /// Runs the event loop until the user quits.
    ///
    /// Key presses are handled as they arrive; the turn timer advances once
    /// per elapsed second while a board is on screen.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting game event loop");

        let mut screen = match self.initial_size {
            Some(size) => self.open_board(size),
            None => ActiveScreen::MainMenu(MainMenuScreen::new()),
        };
        let mut last_tick = Instant::now();
        let mut seen_turn = self.current_turn();

        loop {
            terminal.draw(|f| screen.as_screen().render(f, &self.session))?;

            if event::poll(POLL_INTERVAL)?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                let transition = screen.as_screen_mut().handle_key(key, &mut self.session);
                screen = match self.apply_transition(transition, screen) {
                    Some(next) => next,
                    None => {
                        info!("Quitting");
                        return Ok(());
                    }
                };
            }

            // A new turn starts a full second of countdown.
            let turn = self.current_turn();
            if turn != seen_turn {
                seen_turn = turn;
                last_tick = Instant::now();
            }

            if last_tick.elapsed() >= TICK_INTERVAL {
                last_tick += TICK_INTERVAL;
                if matches!(screen, ActiveScreen::Board(_))
                    && let Some(tick) = self.session.tick()
                {
                    debug!(?tick, "Turn timer ticked");
                    seen_turn = self.current_turn();
                }
            }

            sleep(Duration::from_millis(10)).await;
        }
    }

    fn current_turn(&self) -> Option<u64> {
        self.session.game().as_ref().map(|g| *g.turn_number())
    }

    /// Starts a game of `size` and returns its board screen, falling back to
    /// the menu if the board cannot be created.
    #[instrument(skip(self))]
    fn open_board(&mut self, size: BoardSize) -> ActiveScreen {
        match self.session.start_game(size) {
            Ok(()) => ActiveScreen::Board(GameBoardScreen::new(size.dim())),
            Err(e) => {
                error!(error = %e, "Failed to start game");
                ActiveScreen::MainMenu(MainMenuScreen::new())
            }
        }
    }

    /// Applies a screen transition, returning the next screen or `None` to quit.
    #[instrument(skip(self, current))]
    fn apply_transition(
        &mut self,
        transition: ScreenTransition,
        current: ActiveScreen,
    ) -> Option<ActiveScreen> {
        debug!(transition = ?transition, "Applying screen transition");
        match transition {
            ScreenTransition::Stay => Some(current),

            ScreenTransition::GoToMainMenu => {
                info!("Navigating to MainMenu");
                Some(ActiveScreen::MainMenu(MainMenuScreen::new()))
            }

            ScreenTransition::GoToBoard(size) => {
                info!(%size, "Navigating to Board");
                Some(self.open_board(size))
            }

            ScreenTransition::GoToLeaderboard => {
                info!("Navigating to Leaderboard");
                Some(ActiveScreen::Leaderboard(LeaderboardScreen::new()))
            }

            ScreenTransition::Quit => None,
        }
    }
}
