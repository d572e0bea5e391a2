//! Phase-specific typestate structs for the impostor game.
//!
//! Each phase is its own type. Only [`GameSetup`] can edit the roster and
//! only [`GameInProgress`] owns an [`Assignment`], so a running game can
//! never have its roster changed and a game in setup has no roles to leak.

use super::action::{Action, ActionError};
use super::assignment::{Assignment, RandomSource};
use super::contracts::{Contract, RosterNotEmpty, TurnContract};
use super::roster::Roster;
use super::types::{PlayerName, Role};
use crate::words::WordList;
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase - roster is editable, no roles dealt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSetup {
    roster: Roster,
}

impl GameSetup {
    /// Creates a setup with an empty roster.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a setup with an existing roster.
    #[instrument(skip(roster), fields(players = roster.len()))]
    pub fn with_roster(roster: Roster) -> Self {
        Self { roster }
    }

    /// Returns the roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Appends a player. Blank names are rejected.
    #[instrument(skip(self))]
    pub fn add_player(&mut self, raw: &str) -> Result<&PlayerName, ActionError> {
        self.roster.add(raw)
    }

    /// Removes the player at `index`.
    #[instrument(skip(self))]
    pub fn remove_player(&mut self, index: usize) -> Result<PlayerName, ActionError> {
        self.roster.remove(index)
    }

    /// Deals roles and starts the first turn (consumes setup, returns in-progress).
    ///
    /// The first player's turn starts with the role hidden.
    #[instrument(skip_all, fields(players = self.roster.len()))]
    pub fn start<R: RandomSource + ?Sized>(
        self,
        words: &WordList,
        rng: &mut R,
    ) -> Result<GameInProgress, ActionError> {
        RosterNotEmpty::check(&self)?;

        let assignment = Assignment::deal(&self.roster, words, rng)?;
        info!(players = self.roster.len(), "Game started");

        Ok(GameInProgress {
            roster: self.roster,
            assignment,
            cursor: TurnCursor::first(),
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Position of the shared turn cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TurnCursor {
    /// Index of the player holding the device.
    pub index: usize,
    /// Whether that player's role is currently shown.
    pub revealed: bool,
}

impl TurnCursor {
    /// First player, role hidden.
    pub fn first() -> Self {
        Self {
            index: 0,
            revealed: false,
        }
    }
}

/// Game in progress - roles are dealt and players take turns.
///
/// Invariants enforced by type:
/// - The roster is frozen (no mutating methods exist here)
/// - The assignment has one role per player
/// - Only the current player's role is ever readable, and only when revealed
///
/// Not `Clone`: a copy could be stepped ahead to read other players' roles.
#[derive(Debug, PartialEq, Eq)]
pub struct GameInProgress {
    pub(super) roster: Roster,
    pub(super) assignment: Assignment,
    pub(super) cursor: TurnCursor,
}

impl GameInProgress {
    /// Flips visibility of the current player's role.
    ///
    /// May be called any number of times; players are allowed to re-check
    /// their own role.
    #[instrument(skip(self), fields(index = self.cursor.index))]
    pub fn toggle_reveal(&mut self) {
        self.cursor.revealed = !self.cursor.revealed;
        debug!(revealed = self.cursor.revealed, "Toggled reveal");
    }

    /// Hands the device to the next player, hiding the role.
    ///
    /// Fails at the last player; the cursor never wraps around.
    #[instrument(skip(self), fields(index = self.cursor.index))]
    pub fn advance(&mut self) -> Result<(), ActionError> {
        TurnContract::pre(self, &Action::Advance)?;

        #[cfg(debug_assertions)]
        let before = self.snapshot();

        self.cursor = TurnCursor {
            index: self.cursor.index + 1,
            revealed: false,
        };
        debug!(to = self.cursor.index, "Advanced to next player");

        #[cfg(debug_assertions)]
        TurnContract::post(&before, self)?;

        Ok(())
    }

    /// Returns to the first player with the role hidden.
    #[instrument(skip(self), fields(index = self.cursor.index))]
    pub fn rewind_to_first(&mut self) {
        self.cursor = TurnCursor::first();
        debug!("Rewound to first player");
    }

    /// Ends the game, discarding roles and keeping the roster.
    #[instrument(skip(self))]
    pub fn terminate(self) -> GameSetup {
        info!(players = self.roster.len(), "Game terminated");
        GameSetup::with_roster(self.roster)
    }

    /// Returns the frozen roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the turn cursor.
    pub fn cursor(&self) -> TurnCursor {
        self.cursor
    }

    /// Returns true if there is a player after the current one.
    pub fn has_next_player(&self) -> bool {
        self.cursor.index + 1 < self.roster.len()
    }

    /// Name of the player holding the device.
    pub fn current_player(&self) -> Option<&PlayerName> {
        self.roster.get(self.cursor.index)
    }

    /// The current player's role, or `None` while it is hidden.
    ///
    /// This is the only way to read a role from outside the crate.
    pub fn revealed_role(&self) -> Option<&Role> {
        if self.cursor.revealed {
            self.assignment.role_for(self.cursor.index)
        } else {
            None
        }
    }

    pub(crate) fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Copy for postcondition checks.
    #[cfg(any(debug_assertions, test))]
    pub(crate) fn snapshot(&self) -> Self {
        Self {
            roster: self.roster.clone(),
            assignment: self.assignment.clone(),
            cursor: self.cursor,
        }
    }
}
