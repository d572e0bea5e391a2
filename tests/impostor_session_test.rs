//! End-to-end tests for the impostor session.

use impostor::{
    ActionError, ImpostorSession, Role, Roster, ScriptedSource, SessionView, TurnView, WordList,
};

fn pizza() -> WordList {
    WordList::new(vec!["Pizza".to_string()]).unwrap()
}

fn turn(session: &ImpostorSession<ScriptedSource>) -> TurnView {
    match session.view() {
        SessionView::Turn(turn) => turn,
        SessionView::Lobby { .. } => panic!("expected a running game"),
    }
}

fn reveal(session: &mut ImpostorSession<ScriptedSource>) -> Role {
    assert!(session.toggle_reveal().is_applied());
    let role = turn(session).role.expect("role shown after reveal");
    assert!(session.toggle_reveal().is_applied());
    role
}

#[test]
fn test_three_player_round() {
    let mut session = ImpostorSession::with_rng(pizza(), ScriptedSource::new([1, 0]));
    for name in ["Ana", "Luis", "Sofi"] {
        assert!(session.add_player(name).is_applied());
    }
    assert!(session.start_game().is_applied());

    let first = turn(&session);
    assert_eq!(first.player.as_str(), "Ana");
    assert_eq!((first.index, first.total), (0, 3));
    assert!(!first.revealed);
    assert_eq!(first.role, None);

    assert_eq!(reveal(&mut session), Role::Word("Pizza".to_string()));
    assert!(session.advance().is_applied());
    assert_eq!(reveal(&mut session), Role::Impostor);
    assert!(session.advance().is_applied());
    assert_eq!(reveal(&mut session), Role::Word("Pizza".to_string()));

    assert!(!turn(&session).has_next);
    assert_eq!(
        session.advance().ignored_reason(),
        Some(&ActionError::NoNextPlayer)
    );
    assert_eq!(turn(&session).index, 2);
}

#[test]
fn test_roster_frozen_during_play() {
    let mut session = ImpostorSession::with_rng(pizza(), ScriptedSource::default())
        .with_roster(Roster::from_names(["Ana", "Luis"]));
    assert!(session.start_game().is_applied());

    assert_eq!(
        session.add_player("Sofi").ignored_reason(),
        Some(&ActionError::GameInProgress)
    );
    assert_eq!(
        session.remove_player(0).ignored_reason(),
        Some(&ActionError::GameInProgress)
    );
    assert_eq!(session.roster().len(), 2);

    assert!(session.terminate().is_applied());
    assert!(session.add_player("Sofi").is_applied());
    assert_eq!(session.roster().len(), 3);
}

#[test]
fn test_advance_never_leaks_next_role() {
    let mut session = ImpostorSession::with_rng(pizza(), ScriptedSource::new([0, 0]))
        .with_roster(Roster::from_names(["Ana", "Luis", "Sofi"]));
    session.start_game();

    session.toggle_reveal();
    assert!(turn(&session).role.is_some());
    session.advance();

    let next = turn(&session);
    assert_eq!(next.player.as_str(), "Luis");
    assert!(!next.revealed);
    assert_eq!(next.role, None);
}

#[test]
fn test_rewind_returns_to_first_hidden() {
    let mut session = ImpostorSession::with_rng(pizza(), ScriptedSource::new([2, 0]))
        .with_roster(Roster::from_names(["Ana", "Luis", "Sofi"]));
    session.start_game();
    session.advance();
    session.advance();
    session.toggle_reveal();

    assert!(session.rewind_to_first().is_applied());
    let first = turn(&session);
    assert_eq!(first.index, 0);
    assert_eq!(first.role, None);
}

#[test]
fn test_turn_actions_ignored_in_setup() {
    let mut session = ImpostorSession::with_rng(pizza(), ScriptedSource::default())
        .with_roster(Roster::from_names(["Ana"]));
    for outcome in [
        session.toggle_reveal(),
        session.advance(),
        session.rewind_to_first(),
        session.terminate(),
    ] {
        assert_eq!(outcome.ignored_reason(), Some(&ActionError::GameNotStarted));
    }
    assert!(matches!(session.view(), SessionView::Lobby { .. }));
}

#[test]
fn test_start_requires_players() {
    let mut session = ImpostorSession::with_rng(pizza(), ScriptedSource::default());
    assert!(!session.can_start());
    assert_eq!(
        session.start_game().ignored_reason(),
        Some(&ActionError::EmptyRoster)
    );
    assert!(!session.is_started());
}

#[test]
fn test_single_player_is_impostor() {
    let mut session = ImpostorSession::with_rng(pizza(), ScriptedSource::new([5, 3]))
        .with_roster(Roster::from_names(["Ana"]));
    session.start_game();
    assert_eq!(reveal(&mut session), Role::Impostor);
    assert!(!session.has_next_player());
}

#[test]
fn test_lobby_numbers_players_after_removal() {
    let mut session = ImpostorSession::with_rng(pizza(), ScriptedSource::default())
        .with_roster(Roster::from_names(["Ana", "Luis", "Sofi"]));
    assert!(session.remove_player(1).is_applied());
    assert_eq!(
        session.remove_player(5).ignored_reason(),
        Some(&ActionError::IndexOutOfRange { index: 5, len: 2 })
    );

    let entries = session.roster_entries();
    let labels: Vec<_> = entries
        .iter()
        .map(|e| (e.number, e.name.as_str()))
        .collect();
    assert_eq!(labels, vec![(1, "Ana"), (2, "Sofi")]);
}

#[test]
fn test_debug_output_hides_dealt_roles() {
    let mut session = ImpostorSession::with_rng(pizza(), ScriptedSource::new([2, 0]))
        .with_roster(Roster::from_names(["Ana", "Luis", "Sofi"]));
    assert!(session.start_game().is_applied());

    let debug = format!("{:?}", session);
    assert!(!debug.contains("Impostor"));
    assert!(!debug.contains("IMPOSTOR"));
    assert!(!debug.contains("Word("));

    // Only the current seat is ever readable, and only once revealed.
    assert_eq!(turn(&session).role, None);
    session.toggle_reveal();
    assert_eq!(turn(&session).role, Some(Role::Word("Pizza".to_string())));
    let debug = format!("{:?}", session);
    assert!(!debug.contains("Impostor"));
}
