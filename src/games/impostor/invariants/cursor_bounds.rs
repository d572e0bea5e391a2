//! Cursor bounds invariant: the turn cursor always points at a player.

use super::super::GameInProgress;
use super::Invariant;

/// Invariant: `current_index < roster length`.
///
/// Advancing never wraps around and never moves past the last player.
pub struct CursorInBoundsInvariant;

impl Invariant<GameInProgress> for CursorInBoundsInvariant {
    fn holds(game: &GameInProgress) -> bool {
        game.cursor().index < game.roster().len()
    }

    fn description() -> &'static str {
        "Turn cursor points at an existing player"
    }
}
