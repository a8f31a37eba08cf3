//! Main menu screen - board size selection and the way to the leaderboard.

use crossterm::event::{KeyCode, KeyEvent};
use noughts_rules::{BoardSize, Mark};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::Session;
use crate::tui::screen::{Screen, ScreenTransition};

/// Menu options available on the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Play(BoardSize),
    Leaderboard,
    Quit,
}

impl MenuOption {
    fn label(self) -> String {
        match self {
            Self::Play(size) => format!("Play {}", size),
            Self::Leaderboard => "Leaderboard".to_string(),
            Self::Quit => "Quit".to_string(),
        }
    }

    fn all() -> Vec<MenuOption> {
        BoardSize::all()
            .map(Self::Play)
            .chain([Self::Leaderboard, Self::Quit])
            .collect()
    }
}

/// State for the main menu screen.
#[derive(Debug)]
pub struct MainMenuScreen {
    options: Vec<MenuOption>,
    list_state: ListState,
}

impl MainMenuScreen {
    /// Creates the main menu with the first board size selected.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing MainMenuScreen");
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            options: MenuOption::all(),
            list_state,
        }
    }

    fn select_previous(&mut self) {
        let count = self.options.len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let count = self.options.len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn selected_option(&self) -> MenuOption {
        let idx = self.list_state.selected().unwrap_or(0);
        self.options[idx.min(self.options.len() - 1)]
    }

    fn activate(option: MenuOption) -> ScreenTransition {
        info!(option = ?option, "Menu option selected");
        match option {
            MenuOption::Play(size) => ScreenTransition::GoToBoard(size),
            MenuOption::Leaderboard => ScreenTransition::GoToLeaderboard,
            MenuOption::Quit => ScreenTransition::Quit,
        }
    }
}

impl Default for MainMenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for MainMenuScreen {
    #[instrument(skip(self, frame, session))]
    fn render(&self, frame: &mut Frame, session: &Session) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Noughts & Crosses")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let totals = session.totals();
        let totals_bar = Paragraph::new(format!(
            "Session wins   X: {}   O: {}",
            totals.get(Mark::Cross),
            totals.get(Mark::Nought)
        ))
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(totals_bar, chunks[1]);

        let items: Vec<ListItem> = self
            .options
            .iter()
            .map(|opt| ListItem::new(opt.label()))
            .collect();

        let menu = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Choose a board size"),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state;
        frame.render_stateful_widget(menu, chunks[2], &mut list_state);

        let help = Paragraph::new("↑↓: Navigate | Enter: Select | 3/4/5: Play | l: Leaderboard | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key, _session))]
    fn handle_key(&mut self, key: KeyEvent, _session: &mut Session) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => Self::activate(self.selected_option()),
            KeyCode::Char(c @ '3'..='5') => {
                match c.to_digit(10).map(|d| BoardSize::try_from(d as usize)) {
                    Some(Ok(size)) => Self::activate(MenuOption::Play(size)),
                    _ => ScreenTransition::Stay,
                }
            }
            KeyCode::Char('l') | KeyCode::Char('L') => Self::activate(MenuOption::Leaderboard),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
