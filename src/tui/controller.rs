//! Table controller: the event loop driving the two table screens.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use derive_getters::Getters;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::Backend};
use tracing::{debug, info, instrument};

use crate::tui::screen::{Screen, ScreenCommand};
use crate::tui::screens::{RosterScreen, TurnScreen};
use crate::{ActionOutcome, ImpostorSession, RandomSource, RngSource, SessionView};

/// Whether the event loop keeps running after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Keep drawing and reading keys.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Controller that owns the session and routes keys to the active screen.
///
/// The active screen follows the session phase: the roster screen during
/// setup and the turn screen while a game is running.
#[derive(Debug, Getters)]
pub struct TableController<R = RngSource<StdRng>> {
    session: ImpostorSession<R>,
    roster_screen: RosterScreen,
    turn_screen: TurnScreen,
    status: Option<String>,
}

impl<R: RandomSource> TableController<R> {
    /// Creates a controller around an existing session.
    #[instrument(skip(session))]
    pub fn new(session: ImpostorSession<R>) -> Self {
        info!("Creating TableController");
        Self {
            session,
            roster_screen: RosterScreen::new(),
            turn_screen: TurnScreen::new(),
            status: None,
        }
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend + std::io::Write>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting table event loop");

        loop {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // crossterm fires both press and release on some platforms.
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if self.handle_key(key) == LoopControl::Quit {
                    info!("Table quitting");
                    return Ok(());
                }
            }
        }
    }

    /// Renders the screen matching the current phase.
    pub fn draw(&self, frame: &mut ratatui::Frame) {
        let view = self.session.view();
        let status = self.status.as_deref();
        match &view {
            SessionView::Lobby { .. } => self.roster_screen.render(frame, &view, status),
            SessionView::Turn(_) => self.turn_screen.render(frame, &view, status),
        }
    }

    /// Routes a key to the active screen and applies the resulting action.
    #[instrument(skip(self, key), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> LoopControl {
        let view = self.session.view();
        let command = match &view {
            SessionView::Lobby { .. } => self.roster_screen.handle_key(key, &view),
            SessionView::Turn(_) => self.turn_screen.handle_key(key, &view),
        };

        match command {
            ScreenCommand::Stay => LoopControl::Continue,
            ScreenCommand::Quit => LoopControl::Quit,
            ScreenCommand::Apply(action) => {
                debug!(action = %action, "Applying action from screen");
                self.status = match self.session.apply(action) {
                    ActionOutcome::Applied => None,
                    ActionOutcome::Ignored(reason) => Some(reason.to_string()),
                };
                LoopControl::Continue
            }
        }
    }
}
