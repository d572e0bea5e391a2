//! The game session: the single owner of all mutable game state.
//!
//! [`ImpostorSession`] is the action surface a front-end talks to. Every
//! action either applies or is ignored with a logged reason; nothing here
//! returns an error to the caller.

use super::action::{Action, ActionError, ActionOutcome};
use super::assignment::{RandomSource, RngSource};
use super::contracts::{Contract, InProgressPhase, SetupContract, SetupPhase, TurnContract};
use super::roster::Roster;
use super::types::{PlayerName, Role, RosterEntry};
use super::typestate::{GameInProgress, GameSetup};
use crate::words::WordList;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument};

/// Current phase of the session.
#[derive(Debug)]
pub(crate) enum Phase {
    /// Roster editing; no game running.
    Setup(GameSetup),
    /// Roles dealt; players are taking turns.
    InProgress(GameInProgress),
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Setup(GameSetup::new())
    }
}

/// What a display surface may show during a turn.
///
/// `role` is `Some` only while the current player has revealed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnView {
    /// Player holding the device.
    pub player: PlayerName,
    /// 0-based index of that player.
    pub index: usize,
    /// Number of players in the game.
    pub total: usize,
    /// Whether the role is currently shown.
    pub revealed: bool,
    /// Whether the device can be handed to another player.
    pub has_next: bool,
    /// The current player's role, present only when revealed.
    pub role: Option<Role>,
}

/// Snapshot of everything a front-end may render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionView {
    /// Pre-game roster listing.
    Lobby {
        /// Players with their "Player #n" numbers.
        players: Vec<RosterEntry>,
    },
    /// A player's turn.
    Turn(TurnView),
}

/// A local impostor game played by passing one device around.
#[derive(Debug)]
pub struct ImpostorSession<R = RngSource<StdRng>> {
    phase: Phase,
    words: WordList,
    rng: R,
}

impl ImpostorSession<RngSource<StdRng>> {
    /// Creates a session drawing from the operating system's entropy.
    #[instrument(skip(words), fields(words = words.len()))]
    pub fn new(words: WordList) -> Self {
        Self::with_rng(words, RngSource::from_entropy())
    }
}

impl<R: RandomSource> ImpostorSession<R> {
    /// Creates a session with an explicit random source.
    #[instrument(skip(words, rng), fields(words = words.len()))]
    pub fn with_rng(words: WordList, rng: R) -> Self {
        Self {
            phase: Phase::default(),
            words,
            rng,
        }
    }

    /// Seeds the roster. Only has an effect before the game starts.
    #[instrument(skip(self, roster), fields(players = roster.len()))]
    pub fn with_roster(mut self, roster: Roster) -> Self {
        if let Phase::Setup(_) = self.phase {
            self.phase = Phase::Setup(GameSetup::with_roster(roster));
        }
        self
    }

    /// Applies an action, returning whether it changed anything.
    #[instrument(skip(self, action), fields(action = %action))]
    pub fn apply(&mut self, action: Action) -> ActionOutcome {
        let outcome = match action {
            Action::AddPlayer(name) => self.try_add_player(&name),
            Action::RemovePlayer(index) => self.try_remove_player(index),
            Action::StartGame => self.try_start_game(),
            Action::ToggleReveal => self.try_toggle_reveal(),
            Action::Advance => self.try_advance(),
            Action::RewindToFirst => self.try_rewind_to_first(),
            Action::Terminate => self.try_terminate(),
        };

        if let ActionOutcome::Ignored(reason) = &outcome {
            debug!(reason = %reason, "Action ignored");
        }
        outcome
    }

    /// Adds a player to the roster. Blank names and in-game calls are ignored.
    pub fn add_player(&mut self, name: &str) -> ActionOutcome {
        self.apply(Action::AddPlayer(name.to_string()))
    }

    /// Removes the player at `index`. Out-of-range and in-game calls are ignored.
    pub fn remove_player(&mut self, index: usize) -> ActionOutcome {
        self.apply(Action::RemovePlayer(index))
    }

    /// Deals roles and starts the first turn. Ignored with an empty roster.
    pub fn start_game(&mut self) -> ActionOutcome {
        self.apply(Action::StartGame)
    }

    /// Shows or hides the current player's role.
    pub fn toggle_reveal(&mut self) -> ActionOutcome {
        self.apply(Action::ToggleReveal)
    }

    /// Hands the device to the next player. Ignored at the last player.
    pub fn advance(&mut self) -> ActionOutcome {
        self.apply(Action::Advance)
    }

    /// Returns to the first player with the role hidden.
    pub fn rewind_to_first(&mut self) -> ActionOutcome {
        self.apply(Action::RewindToFirst)
    }

    /// Ends the game and keeps the roster for another round.
    pub fn terminate(&mut self) -> ActionOutcome {
        self.apply(Action::Terminate)
    }

    // ─────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────

    /// Returns true while a game is running.
    pub fn is_started(&self) -> bool {
        matches!(self.phase, Phase::InProgress(_))
    }

    /// Returns the roster (frozen while a game runs).
    pub fn roster(&self) -> &Roster {
        match &self.phase {
            Phase::Setup(setup) => setup.roster(),
            Phase::InProgress(game) => game.roster(),
        }
    }

    /// Roster snapshot with "Player #n" numbers.
    pub fn roster_entries(&self) -> Vec<RosterEntry> {
        self.roster().entries()
    }

    /// Returns the word list in use.
    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// Returns true if `start_game` would start a game.
    pub fn can_start(&self) -> bool {
        match &self.phase {
            Phase::Setup(setup) => SetupContract::pre(setup, &Action::StartGame).is_ok(),
            Phase::InProgress(_) => false,
        }
    }

    /// Returns true if `advance` would move to another player.
    pub fn has_next_player(&self) -> bool {
        match &self.phase {
            Phase::InProgress(game) => game.has_next_player(),
            Phase::Setup(_) => false,
        }
    }

    /// Snapshot for rendering. Exposes at most the current player's role.
    pub fn view(&self) -> SessionView {
        match &self.phase {
            Phase::Setup(setup) => SessionView::Lobby {
                players: setup.roster().entries(),
            },
            Phase::InProgress(game) => {
                let cursor = game.cursor();
                match game.current_player() {
                    Some(player) => SessionView::Turn(TurnView {
                        player: player.clone(),
                        index: cursor.index,
                        total: game.roster().len(),
                        revealed: cursor.revealed,
                        has_next: game.has_next_player(),
                        role: game.revealed_role().cloned(),
                    }),
                    // Unreachable while the cursor invariant holds.
                    None => SessionView::Lobby {
                        players: game.roster().entries(),
                    },
                }
            }
        }
    }

    // ─────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────

    fn setup_mut(&mut self) -> Result<&mut GameSetup, ActionError> {
        SetupPhase::check(&self.phase)?;
        match &mut self.phase {
            Phase::Setup(setup) => Ok(setup),
            Phase::InProgress(_) => Err(ActionError::GameInProgress),
        }
    }

    fn game_mut(&mut self) -> Result<&mut GameInProgress, ActionError> {
        InProgressPhase::check(&self.phase)?;
        match &mut self.phase {
            Phase::InProgress(game) => Ok(game),
            Phase::Setup(_) => Err(ActionError::GameNotStarted),
        }
    }

    fn try_add_player(&mut self, name: &str) -> ActionOutcome {
        self.setup_mut()
            .and_then(|setup| setup.add_player(name).map(|_| ()))
            .into()
    }

    fn try_remove_player(&mut self, index: usize) -> ActionOutcome {
        self.setup_mut()
            .and_then(|setup| setup.remove_player(index).map(|_| ()))
            .into()
    }

    fn try_start_game(&mut self) -> ActionOutcome {
        let setup = match &self.phase {
            Phase::Setup(setup) => setup,
            Phase::InProgress(_) => return ActionOutcome::Ignored(ActionError::GameInProgress),
        };
        if let Err(reason) = SetupContract::pre(setup, &Action::StartGame) {
            return ActionOutcome::Ignored(reason);
        }

        // Deal from a copy so a failed deal leaves the roster in place.
        match setup.clone().start(&self.words, &mut self.rng) {
            Ok(game) => {
                info!(players = game.roster().len(), "Session entered play");
                self.phase = Phase::InProgress(game);
                ActionOutcome::Applied
            }
            Err(reason) => ActionOutcome::Ignored(reason),
        }
    }

    fn try_toggle_reveal(&mut self) -> ActionOutcome {
        self.game_mut()
            .and_then(|game| {
                TurnContract::pre(game, &Action::ToggleReveal)?;
                game.toggle_reveal();
                Ok(())
            })
            .into()
    }

    fn try_advance(&mut self) -> ActionOutcome {
        self.game_mut().and_then(|game| game.advance()).into()
    }

    fn try_rewind_to_first(&mut self) -> ActionOutcome {
        self.game_mut()
            .and_then(|game| {
                TurnContract::pre(game, &Action::RewindToFirst)?;
                game.rewind_to_first();
                Ok(())
            })
            .into()
    }

    fn try_terminate(&mut self) -> ActionOutcome {
        if let Err(reason) = InProgressPhase::check(&self.phase) {
            return ActionOutcome::Ignored(reason);
        }
        match std::mem::take(&mut self.phase) {
            Phase::InProgress(game) => {
                self.phase = Phase::Setup(game.terminate());
                info!("Session returned to setup");
                ActionOutcome::Applied
            }
            setup @ Phase::Setup(_) => {
                self.phase = setup;
                ActionOutcome::Ignored(ActionError::GameNotStarted)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::impostor::ScriptedSource;

    fn session(picks: &[usize]) -> ImpostorSession<ScriptedSource> {
        let words = WordList::new(vec!["Pizza".to_string()]).unwrap();
        ImpostorSession::with_rng(words, ScriptedSource::new(picks.iter().copied()))
    }

    #[test]
    fn test_new_session_is_lobby() {
        let session = session(&[]);
        assert!(!session.is_started());
        assert_eq!(session.view(), SessionView::Lobby { players: vec![] });
        assert!(!session.can_start());
    }

    #[test]
    fn test_start_with_empty_roster_ignored() {
        let mut session = session(&[]);
        assert_eq!(
            session.start_game(),
            ActionOutcome::Ignored(ActionError::EmptyRoster)
        );
        assert!(!session.is_started());
    }

    #[test]
    fn test_turn_actions_ignored_before_start() {
        let mut session = session(&[]);
        session.add_player("Ana");
        assert!(!session.toggle_reveal().is_applied());
        assert!(!session.advance().is_applied());
        assert!(!session.rewind_to_first().is_applied());
        assert!(!session.terminate().is_applied());
        assert_eq!(session.roster().len(), 1);
    }

    #[test]
    fn test_view_hides_role_until_revealed() {
        let mut session = session(&[0, 0]);
        session.add_player("Ana");
        session.add_player("Luis");
        session.start_game();

        let SessionView::Turn(turn) = session.view() else {
            panic!("expected a turn view");
        };
        assert_eq!(turn.player.as_str(), "Ana");
        assert_eq!(turn.role, None);

        session.toggle_reveal();
        let SessionView::Turn(turn) = session.view() else {
            panic!("expected a turn view");
        };
        assert_eq!(turn.role, Some(Role::Impostor));
    }

    #[test]
    fn test_apply_dispatches_actions() {
        let mut session = session(&[1, 0]);
        assert!(session.apply(Action::AddPlayer("Ana".to_string())).is_applied());
        assert!(session.apply(Action::AddPlayer("Luis".to_string())).is_applied());
        assert!(session.apply(Action::StartGame).is_applied());
        assert!(session.apply(Action::Advance).is_applied());
        assert_eq!(
            session.apply(Action::Advance),
            ActionOutcome::Ignored(ActionError::NoNextPlayer)
        );
        assert!(session.apply(Action::Terminate).is_applied());
        assert!(!session.is_started());
    }

    #[test]
    fn test_with_roster_seeds_setup() {
        let session = session(&[]).with_roster(Roster::from_names(["Ana", "Luis"]));
        assert_eq!(session.roster().len(), 2);
        assert!(session.can_start());
    }
}
