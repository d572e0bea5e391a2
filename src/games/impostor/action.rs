//! First-class action types for the impostor game.
//!
//! Every user interaction is an [`Action`]. Actions that are not valid in
//! the current state are not errors for the caller: they degrade to no-ops
//! and are reported as [`ActionOutcome::Ignored`] with the reason attached.

use serde::{Deserialize, Serialize};

/// A user action against the game session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Action {
    /// Append a player to the roster (setup only).
    AddPlayer(String),
    /// Remove the player at the given roster index (setup only).
    RemovePlayer(usize),
    /// Deal roles and start the first turn.
    StartGame,
    /// Show or hide the current player's role.
    ToggleReveal,
    /// Hand the device to the next player.
    Advance,
    /// Return to the first player with the role hidden.
    RewindToFirst,
    /// End the game, keeping the roster.
    Terminate,
}

/// Reason an action was ignored.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ActionError {
    /// The submitted name was empty after trimming.
    #[display("Player name is blank")]
    BlankName,

    /// No player exists at the given roster index.
    #[display("No player at index {} (roster has {})", index, len)]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Roster length at the time of the request.
        len: usize,
    },

    /// The roster is empty, so no game can start.
    #[display("Cannot start a game without players")]
    EmptyRoster,

    /// The current player is the last one; there is no one to advance to.
    #[display("Already at the last player")]
    NoNextPlayer,

    /// Roster edits are only allowed before the game starts.
    #[display("Roster is locked while a game is in progress")]
    GameInProgress,

    /// Turn actions need a started game.
    #[display("No game in progress")]
    GameNotStarted,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for ActionError {}

/// Result of applying an action to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action changed the session state.
    Applied,
    /// The action was a no-op; state is unchanged.
    Ignored(ActionError),
}

impl ActionOutcome {
    /// Returns true if the action changed state.
    pub fn is_applied(&self) -> bool {
        matches!(self, ActionOutcome::Applied)
    }

    /// Returns the reason the action was ignored, if it was.
    pub fn ignored_reason(&self) -> Option<&ActionError> {
        match self {
            ActionOutcome::Applied => None,
            ActionOutcome::Ignored(reason) => Some(reason),
        }
    }
}

impl<T> From<Result<T, ActionError>> for ActionOutcome {
    fn from(result: Result<T, ActionError>) -> Self {
        match result {
            Ok(_) => ActionOutcome::Applied,
            Err(reason) => ActionOutcome::Ignored(reason),
        }
    }
}
