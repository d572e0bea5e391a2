//! Terminal UI for a single shared device.

mod controller;
mod screen;
mod screens;

pub use controller::{LoopControl, TableController};
pub use screen::{Screen, ScreenCommand};
pub use screens::{RosterScreen, TurnScreen};

use std::io;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument};

use crate::{GameConfig, ImpostorSession, Roster};

/// Runs the table UI until the players quit.
///
/// Logs go to the configured log file so they never draw over the screen.
pub fn run_tui(config: &GameConfig) -> Result<()> {
    init_file_logging(config)?;
    info!("Starting impostor TUI");

    let words = config.word_list().context("Failed to load word list")?;
    let session = ImpostorSession::new(words).with_roster(Roster::from_names(config.players()));
    let mut controller = TableController::new(session);

    enable_raw_mode()?;
    let mut terminal = restore_on_error(enter_terminal(), leave_terminal)?;

    let res = controller.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Table loop error");
    }
    res
}

/// Switches to the alternate screen. Raw mode must already be on.
fn enter_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn leave_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    // May fail if the alternate screen was never entered.
    let _ = execute!(stdout, LeaveAlternateScreen);
    disable_raw_mode()
}

/// Runs `restore` when terminal setup failed, then passes the result on.
fn restore_on_error<T>(result: Result<T>, restore: impl FnOnce() -> io::Result<()>) -> Result<T> {
    if let Err(err) = &result {
        error!(error = ?err, "Failed to set up terminal");
        restore().context("Failed to restore terminal")?;
    }
    result
}

#[instrument(skip(config), fields(log_file = %config.log_file().display()))]
fn init_file_logging(config: &GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    // Already initialized in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let result: Result<()> = restore_on_error(Err(anyhow::anyhow!("no tty")), || {
            restored.set(true);
            Ok(())
        });
        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_leaves_terminal_alone() {
        let restored = Cell::new(false);
        let result = restore_on_error(Ok(7), || {
            restored.set(true);
            Ok(())
        });
        assert_eq!(result.unwrap(), 7);
        assert!(!restored.get());
    }
}
