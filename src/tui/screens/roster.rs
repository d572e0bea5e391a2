//! Roster screen for adding and removing players before roles are dealt.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::tui::screen::{Screen, ScreenCommand};
use crate::{Action, RosterEntry, SessionView};

/// State for the roster screen: the name being typed and the selected row.
#[derive(Debug, Default, Getters)]
pub struct RosterScreen {
    input: String,
    list_state: ListState,
}

impl RosterScreen {
    /// Creates an empty roster screen.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the selection inside a roster of `len` players.
    #[instrument(skip(self))]
    fn clamp_selection(&mut self, len: usize) {
        let selected = match (self.list_state.selected(), len) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
        self.list_state.select(selected);
    }

    /// Moves selection up.
    #[instrument(skip(self))]
    fn select_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => len - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Moves selection down.
    #[instrument(skip(self))]
    fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Takes the typed name for submission. Blank input stays in the box.
    #[instrument(skip(self))]
    fn submit_input(&mut self) -> ScreenCommand {
        if self.input.trim().is_empty() {
            debug!("Ignoring blank player name");
            return ScreenCommand::Stay;
        }
        let name = std::mem::take(&mut self.input);
        info!(name = %name.trim(), "Submitting player");
        ScreenCommand::Apply(Action::AddPlayer(name))
    }
}

fn roster_item(entry: &RosterEntry) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(
            format!(" {} ", entry.name.initial()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  {}", entry.name)),
        Span::styled(
            format!("   Player #{}", entry.number),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
}

impl Screen for RosterScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, view: &SessionView, status: Option<&str>) {
        let players = match view {
            SessionView::Lobby { players } => players.as_slice(),
            SessionView::Turn(_) => &[],
        };

        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new(format!("Impostor Game: {} players", players.len()))
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = if players.is_empty() {
            vec![ListItem::new("Add at least one player to start the game.")
                .style(Style::default().fg(Color::DarkGray))]
        } else {
            players.iter().map(roster_item).collect()
        };
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Players"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut list_state = self.list_state;
        if players.is_empty() {
            list_state.select(None);
        }
        frame.render_stateful_widget(list, chunks[1], &mut list_state);

        let input = Paragraph::new(format!("{}▏", self.input))
            .style(Style::default().fg(Color::White))
            .block(Block::default().borders(Borders::ALL).title("Player name"));
        frame.render_widget(input, chunks[2]);

        let start_hint = if players.is_empty() {
            "Tab: Start (needs a player)"
        } else {
            "Tab: Start game"
        };
        let help_text = match status {
            Some(status) => format!(
                "{} | Enter: Add | Del: Remove | {} | Esc: Quit",
                status, start_hint
            ),
            None => format!(
                "Enter: Add | ↑↓: Select | Del: Remove | {} | Esc: Quit",
                start_hint
            ),
        };
        let help = Paragraph::new(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key, view))]
    fn handle_key(&mut self, key: KeyEvent, view: &SessionView) -> ScreenCommand {
        let len = match view {
            SessionView::Lobby { players } => players.len(),
            SessionView::Turn(_) => 0,
        };
        self.clamp_selection(len);

        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Backspace => {
                self.input.pop();
                ScreenCommand::Stay
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                ScreenCommand::Stay
            }
            KeyCode::Up => {
                self.select_previous(len);
                ScreenCommand::Stay
            }
            KeyCode::Down => {
                self.select_next(len);
                ScreenCommand::Stay
            }
            KeyCode::Delete => match self.list_state.selected() {
                Some(index) => ScreenCommand::Apply(Action::RemovePlayer(index)),
                None => ScreenCommand::Stay,
            },
            KeyCode::Tab => ScreenCommand::Apply(Action::StartGame),
            KeyCode::Esc => ScreenCommand::Quit,
            _ => ScreenCommand::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerName;
    use ratatui::{Terminal, backend::TestBackend};

    fn lobby(names: &[&str]) -> SessionView {
        SessionView::Lobby {
            players: names
                .iter()
                .enumerate()
                .map(|(i, n)| RosterEntry {
                    number: i + 1,
                    name: PlayerName::parse(n).unwrap(),
                })
                .collect(),
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_typing_then_enter_submits_name() {
        let mut screen = RosterScreen::new();
        let view = lobby(&[]);
        for c in "Ana".chars() {
            assert_eq!(screen.handle_key(key(KeyCode::Char(c)), &view), ScreenCommand::Stay);
        }
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter), &view),
            ScreenCommand::Apply(Action::AddPlayer("Ana".to_string()))
        );
        assert!(screen.input().is_empty());
    }

    #[test]
    fn test_blank_input_not_submitted() {
        let mut screen = RosterScreen::new();
        let view = lobby(&[]);
        screen.handle_key(key(KeyCode::Char(' ')), &view);
        assert_eq!(screen.handle_key(key(KeyCode::Enter), &view), ScreenCommand::Stay);
    }

    #[test]
    fn test_delete_removes_selected() {
        let mut screen = RosterScreen::new();
        let view = lobby(&["Ana", "Luis", "Sofi"]);
        screen.handle_key(key(KeyCode::Down), &view);
        assert_eq!(
            screen.handle_key(key(KeyCode::Delete), &view),
            ScreenCommand::Apply(Action::RemovePlayer(1))
        );
    }

    #[test]
    fn test_delete_with_empty_roster_stays() {
        let mut screen = RosterScreen::new();
        assert_eq!(
            screen.handle_key(key(KeyCode::Delete), &lobby(&[])),
            ScreenCommand::Stay
        );
    }

    #[test]
    fn test_selection_clamped_after_removal() {
        let mut screen = RosterScreen::new();
        let view = lobby(&["Ana", "Luis"]);
        screen.handle_key(key(KeyCode::Up), &view);
        assert_eq!(screen.list_state().selected(), Some(1));

        let shrunk = lobby(&["Ana"]);
        assert_eq!(
            screen.handle_key(key(KeyCode::Delete), &shrunk),
            ScreenCommand::Apply(Action::RemovePlayer(0))
        );
    }

    #[test]
    fn test_tab_starts_and_esc_quits() {
        let mut screen = RosterScreen::new();
        let view = lobby(&["Ana"]);
        assert_eq!(
            screen.handle_key(key(KeyCode::Tab), &view),
            ScreenCommand::Apply(Action::StartGame)
        );
        assert_eq!(screen.handle_key(key(KeyCode::Esc), &view), ScreenCommand::Quit);
    }

    #[test]
    fn test_render_lists_numbered_players() {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        let screen = RosterScreen::new();
        terminal
            .draw(|f| screen.render(f, &lobby(&["Ana", "Luis"]), None))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Ana"));
        assert!(text.contains("Player #2"));
    }
}
