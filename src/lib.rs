//! Impostor: a pass-the-device party game.
//!
//! Every player but one receives the same secret word; one random player
//! is the impostor. The device travels around the table and each player
//! privately reveals their role on their own turn.
//!
//! # Architecture
//!
//! - **Roster**: the ordered list of players, editable only during setup
//! - **Assignment**: deals one impostor and one shared word per game
//! - **Turns**: a cursor that shows at most the current player's role
//! - **TUI**: ratatui screens driving an [`ImpostorSession`]
//!
//! # Example
//!
//! ```
//! use impostor::{ImpostorSession, RngSource, SessionView, WordList};
//!
//! let words = WordList::new(vec!["Pizza".to_string()]).unwrap();
//! let mut session = ImpostorSession::with_rng(words, RngSource::seeded(7));
//! session.add_player("Ana");
//! session.add_player("Luis");
//! assert!(session.start_game().is_applied());
//!
//! // Nothing is shown until the player asks for it.
//! if let SessionView::Turn(turn) = session.view() {
//!     assert!(turn.role.is_none());
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod tui;
mod words;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};

// Crate-level exports - Word lists
pub use words::{DEFAULT_WORDS, WordList, WordListError};

// Crate-level exports - Game types
pub use games::impostor::invariants;
pub use games::impostor::{
    Action, ActionError, ActionOutcome, Assignment, GameInProgress, GameSetup, IMPOSTOR_LABEL,
    ImpostorSession, PlayerName, RandomSource, RngSource, Role, Roster, RosterEntry,
    ScriptedSource, SessionView, TurnCursor, TurnView,
};

// Crate-level exports - Contracts
pub use games::impostor::{
    Contract, HasNextPlayer, HiddenOnHandoff, IndexInRange, NameNotBlank,
    RosterNotEmpty, SetupContract, TurnContract,
};

// Crate-level exports - Terminal UI
pub use tui::{
    LoopControl, RosterScreen, Screen, ScreenCommand, TableController, TurnScreen, run_tui,
};
