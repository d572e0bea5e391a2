//! Single impostor invariant: one impostor, everyone else shares one word.

use super::super::{GameInProgress, Role};
use super::Invariant;

/// Invariant: Exactly one role is the impostor marker and every other
/// role is the same word.
pub struct SingleImpostorInvariant;

impl Invariant<GameInProgress> for SingleImpostorInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let roles = game.assignment().roles();

        let impostors = roles.iter().filter(|r| r.is_impostor()).count();
        if impostors != 1 {
            return false;
        }

        if roles.get(game.assignment().impostor_index()) != Some(&Role::Impostor) {
            return false;
        }

        let mut words = roles.iter().filter_map(|r| match r {
            Role::Word(word) => Some(word),
            Role::Impostor => None,
        });
        match words.next() {
            Some(first) => words.all(|w| w == first),
            None => true,
        }
    }

    fn description() -> &'static str {
        "Exactly one impostor; all other players share one word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::impostor::{Assignment, GameSetup, Roster, ScriptedSource};
    use crate::words::WordList;

    fn started(names: &[&str]) -> GameInProgress {
        GameSetup::with_roster(Roster::from_names(names.iter().copied()))
            .start(&WordList::builtin(), &mut ScriptedSource::new([0, 0]))
            .unwrap()
    }

    #[test]
    fn test_fresh_deal_holds() {
        assert!(SingleImpostorInvariant::holds(&started(&["Ana", "Luis", "Sofi"])));
    }

    #[test]
    fn test_solo_game_holds() {
        assert!(SingleImpostorInvariant::holds(&started(&["Ana"])));
    }

    #[test]
    fn test_two_impostors_violates() {
        let mut game = started(&["Ana", "Luis"]);
        game.assignment = Assignment::from_roles(vec![Role::Impostor, Role::Impostor]);
        assert!(!SingleImpostorInvariant::holds(&game));
    }

    #[test]
    fn test_mixed_words_violates() {
        let mut game = started(&["Ana", "Luis", "Sofi"]);
        game.assignment = Assignment::from_roles(vec![
            Role::Impostor,
            Role::Word("Pizza".to_string()),
            Role::Word("Playa".to_string()),
        ]);
        assert!(!SingleImpostorInvariant::holds(&game));
    }
}
