//! Leaderboard screen - wins per mark for this session.

use crossterm::event::{KeyCode, KeyEvent};
use noughts_rules::Mark;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use tracing::{info, instrument};

use crate::Session;
use crate::tui::screen::{Screen, ScreenTransition};

/// Leaderboard screen. Holds no state of its own; totals come from the
/// [`Session`].
#[derive(Debug, Default)]
pub struct LeaderboardScreen;

impl LeaderboardScreen {
    /// Creates the leaderboard screen.
    pub fn new() -> Self {
        Self
    }
}

impl Screen for LeaderboardScreen {
    #[instrument(skip(self, frame, session))]
    fn render(&self, frame: &mut Frame, session: &Session) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Leaderboard 🏆")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let totals = session.totals();
        let leader = totals.leader();
        let header = Row::new(vec![
            Cell::from("Player").style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from("Wins").style(Style::default().add_modifier(Modifier::BOLD)),
        ])
        .style(Style::default().fg(Color::Yellow));

        let rows: Vec<Row> = [Mark::Cross, Mark::Nought]
            .into_iter()
            .map(|mark| {
                let style = if leader == Some(mark) {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from(format!("Player {}", mark)),
                    Cell::from(totals.get(mark).to_string()),
                ])
                .style(style)
            })
            .collect();

        let table = Table::new(rows, [Constraint::Percentage(70), Constraint::Percentage(30)])
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Session totals"),
            );
        frame.render_widget(table, chunks[1]);

        let help = Paragraph::new("Esc / b: Back to menu | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key, _session))]
    fn handle_key(&mut self, key: KeyEvent, _session: &mut Session) -> ScreenTransition {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('b') | KeyCode::Char('B') => {
                info!("Returning to main menu from leaderboard");
                ScreenTransition::GoToMainMenu
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
