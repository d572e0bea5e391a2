//! Turn screen shown while the device is passed around the table.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::instrument;

use crate::tui::screen::{Screen, ScreenCommand};
use crate::{Action, Role, SessionView, TurnView};

/// Stateless screen for a game in progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct TurnScreen;

impl TurnScreen {
    /// Creates the turn screen.
    pub fn new() -> Self {
        Self
    }

    fn render_turn(&self, frame: &mut Frame, turn: &TurnView, status: Option<&str>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = Paragraph::new(format!("Turn of {}", turn.player))
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let progress = Paragraph::new(format!("Player {} of {}", turn.index + 1, turn.total))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(progress, chunks[1]);

        // Role text only reaches the buffer when the view carries it.
        let role_panel = match &turn.role {
            Some(role) => {
                let color = match role {
                    Role::Impostor => Color::Red,
                    Role::Word(_) => Color::Green,
                };
                Paragraph::new(role.label())
                    .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL).title("Your role"))
            }
            None => Paragraph::new("Press Space to see your role")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Hidden")),
        };
        frame.render_widget(role_panel, chunks[2]);

        let reveal_hint = if turn.revealed { "Space: Hide" } else { "Space: Show" };
        let next_hint = if turn.has_next {
            "→: Next player"
        } else {
            "→: (last player)"
        };
        let hints = format!(
            "{} | {} | f: First player | t: End game | q: Quit",
            reveal_hint, next_hint
        );
        let help_text = match status {
            Some(status) => format!("{} | {}", status, hints),
            None => hints,
        };
        let help = Paragraph::new(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }
}

impl Screen for TurnScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, view: &SessionView, status: Option<&str>) {
        if let SessionView::Turn(turn) = view {
            self.render_turn(frame, turn, status);
        }
    }

    #[instrument(skip(self, key, _view))]
    fn handle_key(&mut self, key: KeyEvent, _view: &SessionView) -> ScreenCommand {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => ScreenCommand::Apply(Action::ToggleReveal),
            KeyCode::Right | KeyCode::Char('n') => ScreenCommand::Apply(Action::Advance),
            KeyCode::Home | KeyCode::Char('f') => ScreenCommand::Apply(Action::RewindToFirst),
            KeyCode::Char('t') | KeyCode::Esc => ScreenCommand::Apply(Action::Terminate),
            KeyCode::Char('q') => ScreenCommand::Quit,
            _ => ScreenCommand::Stay,
        }
    }
}
