//! The impostor party game: roster, role dealing, and turn sequencing.

mod action;
mod assignment;
mod contracts;
pub mod invariants;
mod roster;
mod session;
mod types;
mod typestate;

pub use action::{Action, ActionError, ActionOutcome};
pub use assignment::{Assignment, RandomSource, RngSource, ScriptedSource};
pub use contracts::{
    Contract, HasNextPlayer, HiddenOnHandoff, IndexInRange, NameNotBlank,
    RosterNotEmpty, SetupContract, TurnContract,
};
pub use roster::Roster;
pub use session::{ImpostorSession, SessionView, TurnView};
pub use types::{IMPOSTOR_LABEL, PlayerName, Role, RosterEntry};
pub use typestate::{GameInProgress, GameSetup, TurnCursor};
