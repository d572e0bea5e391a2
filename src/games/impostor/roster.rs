//! Roster of players, editable before the game starts.

use super::action::ActionError;
use super::types::{PlayerName, RosterEntry};
use tracing::{debug, instrument};

/// Ordered list of player names in insertion order.
///
/// The roster itself has no notion of game phase; the phase types decide
/// whether it may be edited (only [`GameSetup`](super::GameSetup) exposes
/// mutation).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    players: Vec<PlayerName>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster from raw names, skipping blank ones.
    #[instrument(skip(names))]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let players = names
            .into_iter()
            .filter_map(|raw| PlayerName::parse(raw.as_ref()))
            .collect::<Vec<_>>();
        debug!(count = players.len(), "Roster built from names");
        Self { players }
    }

    /// Appends a player. Blank names are rejected.
    #[instrument(skip(self))]
    pub fn add(&mut self, raw: &str) -> Result<&PlayerName, ActionError> {
        let name = PlayerName::parse(raw).ok_or(ActionError::BlankName)?;
        debug!(name = %name, position = self.players.len(), "Adding player");
        self.players.push(name);
        Ok(&self.players[self.players.len() - 1])
    }

    /// Removes the player at `index`, shifting later players down by one.
    #[instrument(skip(self))]
    pub fn remove(&mut self, index: usize) -> Result<PlayerName, ActionError> {
        if index >= self.players.len() {
            return Err(ActionError::IndexOutOfRange {
                index,
                len: self.players.len(),
            });
        }
        let removed = self.players.remove(index);
        debug!(name = %removed, index, "Removed player");
        Ok(removed)
    }

    /// Returns the player at `index`.
    pub fn get(&self, index: usize) -> Option<&PlayerName> {
        self.players.get(index)
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns true if there are no players.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Player names in roster order.
    pub fn names(&self) -> &[PlayerName] {
        &self.players
    }

    /// Snapshot of the roster with 1-based "Player #n" numbers.
    pub fn entries(&self) -> Vec<RosterEntry> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, name)| RosterEntry {
                number: i + 1,
                name: name.clone(),
            })
            .collect()
    }
}
