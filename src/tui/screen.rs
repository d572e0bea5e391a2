//! Screen trait and command type for the table state machine.

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::{Action, SessionView};

/// The result of handling a key on a screen.
///
/// Screens never touch the session directly; they translate keys into
/// [`Action`]s and the [`TableController`](crate::TableController)
/// applies them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenCommand {
    /// Nothing to do (the screen may have updated its own state).
    Stay,
    /// Apply an action to the session.
    Apply(Action),
    /// Exit the application.
    Quit,
}

/// Trait implemented by each screen of the table.
///
/// Screens only ever see a [`SessionView`], which carries at most the
/// current player's role.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, view: &SessionView, status: Option<&str>);

    /// Handles a key event and returns the resulting [`ScreenCommand`].
    fn handle_key(&mut self, key: KeyEvent, view: &SessionView) -> ScreenCommand;
}
