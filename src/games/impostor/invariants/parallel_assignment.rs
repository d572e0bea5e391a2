//! Parallel assignment invariant: one role per roster position.

use super::super::GameInProgress;
use super::Invariant;

/// Invariant: The assignment has exactly one role per player and the
/// roster of a running game is never empty.
pub struct ParallelAssignmentInvariant;

impl Invariant<GameInProgress> for ParallelAssignmentInvariant {
    fn holds(game: &GameInProgress) -> bool {
        !game.roster().is_empty() && game.assignment().len() == game.roster().len()
    }

    fn description() -> &'static str {
        "Assignment length matches a non-empty roster"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::impostor::{GameSetup, Roster, ScriptedSource};
    use crate::words::WordList;

    #[test]
    fn test_fresh_deal_holds() {
        let game = GameSetup::with_roster(Roster::from_names(["Ana", "Luis"]))
            .start(&WordList::builtin(), &mut ScriptedSource::default())
            .unwrap();
        assert!(ParallelAssignmentInvariant::holds(&game));
    }

    #[test]
    fn test_grown_roster_violates() {
        let mut game = GameSetup::with_roster(Roster::from_names(["Ana", "Luis"]))
            .start(&WordList::builtin(), &mut ScriptedSource::default())
            .unwrap();
        game.roster = Roster::from_names(["Ana", "Luis", "Sofi"]);
        assert!(!ParallelAssignmentInvariant::holds(&game));
    }
}
