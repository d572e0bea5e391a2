//! Screen implementations for the table.

mod roster;
mod turn;

pub use roster::RosterScreen;
pub use turn::TurnScreen;
