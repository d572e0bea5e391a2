//! Contract-based validation for the impostor game.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(state, action)} action {Q(before, after)}.

use super::action::{Action, ActionError};
use super::invariants::{ImpostorInvariants, InvariantSet};
use super::session::Phase;
use super::typestate::{GameInProgress, GameSetup};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), ActionError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), ActionError>;
}

// ─────────────────────────────────────────────────────────────
//  Phase Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: No game is running (roster edits, start).
pub(crate) struct SetupPhase;

impl SetupPhase {
    #[instrument(skip(phase))]
    pub(crate) fn check(phase: &Phase) -> Result<(), ActionError> {
        match phase {
            Phase::Setup(_) => Ok(()),
            Phase::InProgress(_) => Err(ActionError::GameInProgress),
        }
    }
}

/// Precondition: A game is running (turn actions).
pub(crate) struct InProgressPhase;

impl InProgressPhase {
    #[instrument(skip(phase))]
    pub(crate) fn check(phase: &Phase) -> Result<(), ActionError> {
        match phase {
            Phase::InProgress(_) => Ok(()),
            Phase::Setup(_) => Err(ActionError::GameNotStarted),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Setup Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The roster has at least one player.
pub struct RosterNotEmpty;

impl RosterNotEmpty {
    #[instrument(skip(setup))]
    pub fn check(setup: &GameSetup) -> Result<(), ActionError> {
        if setup.roster().is_empty() {
            Err(ActionError::EmptyRoster)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The index names an existing player.
pub struct IndexInRange;

impl IndexInRange {
    #[instrument(skip(setup))]
    pub fn check(index: usize, setup: &GameSetup) -> Result<(), ActionError> {
        let len = setup.roster().len();
        if index < len {
            Ok(())
        } else {
            Err(ActionError::IndexOutOfRange { index, len })
        }
    }
}

/// Precondition: The name is not blank once trimmed.
pub struct NameNotBlank;

impl NameNotBlank {
    #[instrument]
    pub fn check(raw: &str) -> Result<(), ActionError> {
        if raw.trim().is_empty() {
            Err(ActionError::BlankName)
        } else {
            Ok(())
        }
    }
}

/// Contract for actions on a game in setup.
///
/// Turn actions are rejected outright: there is no game to act on.
pub struct SetupContract;

impl Contract<GameSetup, Action> for SetupContract {
    fn pre(setup: &GameSetup, action: &Action) -> Result<(), ActionError> {
        match action {
            Action::AddPlayer(name) => NameNotBlank::check(name),
            Action::RemovePlayer(index) => IndexInRange::check(*index, setup),
            Action::StartGame => RosterNotEmpty::check(setup),
            Action::ToggleReveal | Action::Advance | Action::RewindToFirst | Action::Terminate => {
                Err(ActionError::GameNotStarted)
            }
        }
    }

    fn post(_before: &GameSetup, _after: &GameSetup) -> Result<(), ActionError> {
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Turn Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: There is a player after the current one.
pub struct HasNextPlayer;

impl HasNextPlayer {
    #[instrument(skip(game))]
    pub fn check(game: &GameInProgress) -> Result<(), ActionError> {
        if game.has_next_player() {
            Ok(())
        } else {
            Err(ActionError::NoNextPlayer)
        }
    }
}

/// Postcondition: Moving to a different player always hides the role.
pub struct HiddenOnHandoff;

impl HiddenOnHandoff {
    #[instrument(skip(before, after))]
    pub fn holds(before: &GameInProgress, after: &GameInProgress) -> bool {
        let handed_off = before.cursor().index != after.cursor().index;
        let valid = !handed_off || !after.cursor().revealed;
        if !valid {
            warn!(
                from = before.cursor().index,
                to = after.cursor().index,
                "Role left revealed across a player change"
            );
        }
        valid
    }
}

/// Contract for turn actions on a running game.
///
/// Preconditions:
/// - Roster edits are rejected while the game runs
/// - Advance needs a next player
///
/// Postconditions:
/// - All game invariants hold
/// - A player change never leaves the role revealed
pub struct TurnContract;

impl Contract<GameInProgress, Action> for TurnContract {
    fn pre(game: &GameInProgress, action: &Action) -> Result<(), ActionError> {
        match action {
            Action::AddPlayer(_) | Action::RemovePlayer(_) | Action::StartGame => {
                Err(ActionError::GameInProgress)
            }
            Action::Advance => HasNextPlayer::check(game),
            Action::ToggleReveal | Action::RewindToFirst | Action::Terminate => Ok(()),
        }
    }

    fn post(before: &GameInProgress, after: &GameInProgress) -> Result<(), ActionError> {
        ImpostorInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            ActionError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        if !HiddenOnHandoff::holds(before, after) {
            return Err(ActionError::InvariantViolation(
                "Postcondition failed: role revealed after player change".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::impostor::{Roster, ScriptedSource};
    use crate::words::WordList;

    fn setup(names: &[&str]) -> GameSetup {
        GameSetup::with_roster(Roster::from_names(names.iter().copied()))
    }

    fn started(names: &[&str]) -> GameInProgress {
        setup(names)
            .start(&WordList::builtin(), &mut ScriptedSource::default())
            .unwrap()
    }

    #[test]
    fn test_start_requires_players() {
        assert_eq!(
            SetupContract::pre(&setup(&[]), &Action::StartGame),
            Err(ActionError::EmptyRoster)
        );
        assert!(SetupContract::pre(&setup(&["Ana"]), &Action::StartGame).is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(
            SetupContract::pre(&setup(&[]), &Action::AddPlayer("  ".to_string())),
            Err(ActionError::BlankName)
        );
    }

    #[test]
    fn test_remove_index_checked() {
        assert_eq!(
            SetupContract::pre(&setup(&["Ana"]), &Action::RemovePlayer(1)),
            Err(ActionError::IndexOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_turn_actions_rejected_in_setup() {
        assert_eq!(
            SetupContract::pre(&setup(&["Ana"]), &Action::Advance),
            Err(ActionError::GameNotStarted)
        );
    }

    #[test]
    fn test_roster_edits_rejected_in_game() {
        let game = started(&["Ana", "Luis"]);
        assert_eq!(
            TurnContract::pre(&game, &Action::AddPlayer("Sofi".to_string())),
            Err(ActionError::GameInProgress)
        );
        assert_eq!(
            TurnContract::pre(&game, &Action::RemovePlayer(0)),
            Err(ActionError::GameInProgress)
        );
    }

    #[test]
    fn test_advance_needs_next_player() {
        let game = started(&["Ana"]);
        assert_eq!(
            TurnContract::pre(&game, &Action::Advance),
            Err(ActionError::NoNextPlayer)
        );
    }

    #[test]
    fn test_postcondition_holds_after_advance() {
        let before = started(&["Ana", "Luis"]);
        let mut after = before.snapshot();
        after.toggle_reveal();
        after.advance().unwrap();
        assert!(TurnContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_leaked_reveal() {
        let before = started(&["Ana", "Luis"]);
        let mut after = before.snapshot();
        after.cursor.index = 1;
        after.cursor.revealed = true;
        assert!(TurnContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = started(&["Ana", "Luis"]);
        let mut after = before.snapshot();
        after.cursor.index = 5;
        assert!(matches!(
            TurnContract::post(&before, &after),
            Err(ActionError::InvariantViolation(_))
        ));
    }
}
