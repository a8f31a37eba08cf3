//! Game board screen - the N×N grid, scores, turn status and countdown.

use crossterm::event::{KeyCode, KeyEvent};
use noughts_rules::{Cell, Evaluation, Mark};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument, warn};

use crate::session::ActiveGame;
use crate::tui::input::{Cursor, move_cursor};
use crate::tui::screen::{Screen, ScreenTransition};
use crate::Session;

/// State for the game board screen.
///
/// The round itself lives in the [`Session`]; the screen only keeps the
/// cursor and the last rejected-move message.
#[derive(Debug)]
pub struct GameBoardScreen {
    cursor: Cursor,
    message: Option<String>,
}

impl GameBoardScreen {
    /// Creates a board screen for a `dim`×`dim` game.
    #[instrument]
    pub fn new(dim: usize) -> Self {
        debug!(dim, "Initializing GameBoardScreen");
        Self {
            cursor: Cursor::centered(dim),
            message: None,
        }
    }

    /// Cell currently under the cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Places the current mark under the cursor.
    #[instrument(skip(self, session))]
    fn place(&mut self, session: &mut Session) {
        let index = self.cursor.index();
        match session.play(index) {
            Ok(evaluation) => {
                debug!(index, %evaluation, "Move accepted");
                self.message = None;
            }
            Err(e) => {
                warn!(index, error = %e, "Move rejected");
                self.message = Some(e.to_string());
            }
        }
    }

    fn status_line(game: &ActiveGame) -> (String, Color) {
        let round = game.round();
        match round.status() {
            Evaluation::InProgress => (
                format!(
                    "Turn: {}   ⏳ {}s",
                    round.to_move(),
                    game.timer().remaining()
                ),
                Color::Yellow,
            ),
            Evaluation::Win { mark, line } => {
                (format!("{} wins! ({}) 🎉", mark, line.kind()), Color::Green)
            }
            Evaluation::Draw => ("Draw! 🤝".to_string(), Color::Magenta),
        }
    }

    fn grid_lines(&self, game: &ActiveGame) -> Vec<Line<'static>> {
        let round = game.round();
        let board = round.board();
        let dim = board.dim();
        let mut lines = Vec::with_capacity(dim * 2);

        for row in 0..dim {
            if row > 0 {
                let separator = vec!["───"; dim].join("┼");
                lines.push(Line::from(Span::styled(
                    separator,
                    Style::default().fg(Color::DarkGray),
                )));
            }

            let mut spans = Vec::with_capacity(dim * 2);
            for col in 0..dim {
                if col > 0 {
                    spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
                }
                let index = row * dim + col;
                let cell = board.get(index).unwrap_or_default();
                let (symbol, mut style) = match cell {
                    Cell::Empty => ("   ", Style::default().fg(Color::DarkGray)),
                    Cell::Occupied(Mark::Cross) => (
                        " X ",
                        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                    ),
                    Cell::Occupied(Mark::Nought) => (
                        " O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    ),
                };
                if round.is_winning_cell(index) {
                    style = style.bg(Color::Green).fg(Color::Black);
                }
                if index == self.cursor.index() && round.is_in_progress() {
                    style = style.bg(Color::White).fg(Color::Black);
                }
                spans.push(Span::styled(symbol, style));
            }
            lines.push(Line::from(spans));
        }
        lines
    }
}

impl Screen for GameBoardScreen {
    #[instrument(skip(self, frame, session))]
    fn render(&self, frame: &mut Frame, session: &Session) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        let Some(game) = session.game() else {
            let empty = Paragraph::new("No game in progress. Press m to return to the menu.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(empty, area);
            return;
        };

        let title = Paragraph::new(format!("Noughts & Crosses — {}", game.size()))
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let scores = game.scores();
        let score_bar = Paragraph::new(format!(
            "Score   X: {}   O: {}",
            scores.get(Mark::Cross),
            scores.get(Mark::Nought)
        ))
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(score_bar, chunks[1]);

        let (status, color) = match &self.message {
            Some(message) => (message.clone(), Color::Red),
            None => Self::status_line(game),
        };
        let status_bar = Paragraph::new(status)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status_bar, chunks[2]);

        let grid = Paragraph::new(self.grid_lines(game))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Board"));
        frame.render_widget(grid, chunks[3]);

        let help = Paragraph::new(
            "←↑↓→: Move | Enter/Space: Place | r: New round | m/Esc: Menu | q: Quit",
        )
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[4]);
    }

    #[instrument(skip(self, key, session))]
    fn handle_key(&mut self, key: KeyEvent, session: &mut Session) -> ScreenTransition {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.place(session);
                ScreenTransition::Stay
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                if let Err(e) = session.new_round() {
                    warn!(error = %e, "Could not start new round");
                }
                self.message = None;
                ScreenTransition::Stay
            }
            KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Esc => {
                info!("Leaving game for main menu");
                session.leave_game();
                ScreenTransition::GoToMainMenu
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use noughts_rules::BoardSize;
    use ratatui::{Terminal, backend::TestBackend};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn started(size: BoardSize) -> (GameBoardScreen, Session) {
        let mut session = Session::new(10);
        session.start_game(size).unwrap();
        (GameBoardScreen::new(size.dim()), session)
    }

    fn rendered(screen: &GameBoardScreen, session: &Session) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|f| screen.render(f, session)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_enter_places_mark_at_cursor() {
        let (mut screen, mut session) = started(BoardSize::Three);
        screen.handle_key(press(KeyCode::Enter), &mut session);
        let game = session.game().as_ref().unwrap();
        assert_eq!(
            game.round().board().get(4),
            Some(Cell::Occupied(Mark::Cross))
        );
        assert_eq!(*game.round().to_move(), Mark::Nought);
    }

    #[test]
    fn test_occupied_cell_shows_message() {
        let (mut screen, mut session) = started(BoardSize::Three);
        screen.handle_key(press(KeyCode::Enter), &mut session);
        screen.handle_key(press(KeyCode::Enter), &mut session);
        assert_eq!(screen.message.as_deref(), Some("Cell 4 is already occupied"));
        assert!(rendered(&screen, &session).contains("Cell 4 is already occupied"));
    }

    #[test]
    fn test_top_row_win_via_keys() {
        let (mut screen, mut session) = started(BoardSize::Three);
        // X: 0, O: 3, X: 1, O: 4, X: 2
        let keys = [
            vec![KeyCode::Up, KeyCode::Left, KeyCode::Enter],
            vec![KeyCode::Down, KeyCode::Enter],
            vec![KeyCode::Up, KeyCode::Right, KeyCode::Enter],
            vec![KeyCode::Down, KeyCode::Enter],
            vec![KeyCode::Up, KeyCode::Right, KeyCode::Enter],
        ];
        for key in keys.into_iter().flatten() {
            screen.handle_key(press(key), &mut session);
        }
        let game = session.game().as_ref().unwrap();
        assert_eq!(game.round().status().winner(), Some(Mark::Cross));
        assert_eq!(game.scores().get(Mark::Cross), 1);
        assert!(rendered(&screen, &session).contains("X wins!"));
    }

    #[test]
    fn test_new_round_keeps_scores() {
        let (mut screen, mut session) = started(BoardSize::Three);
        for index in [0, 3, 1, 4, 2] {
            session.play(index).unwrap();
        }
        screen.handle_key(press(KeyCode::Char('r')), &mut session);
        let game = session.game().as_ref().unwrap();
        assert!(game.round().is_in_progress());
        assert_eq!(game.round().board().empty_count(), 9);
        assert_eq!(game.scores().get(Mark::Cross), 1);
    }

    #[test]
    fn test_menu_key_leaves_game() {
        let (mut screen, mut session) = started(BoardSize::Four);
        assert_eq!(
            screen.handle_key(press(KeyCode::Char('m')), &mut session),
            ScreenTransition::GoToMainMenu
        );
        assert!(session.game().is_none());
    }

    #[test]
    fn test_render_shows_turn_and_timer() {
        let (screen, session) = started(BoardSize::Five);
        let text = rendered(&screen, &session);
        assert!(text.contains("Turn: X"));
        assert!(text.contains("10s"));
        assert!(text.contains("5x5"));
    }
}
