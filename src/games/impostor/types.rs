//! Core domain types for the impostor game.

use serde::{Deserialize, Serialize};

/// Literal label shown to the player who drew the impostor role.
pub const IMPOSTOR_LABEL: &str = "IMPOSTOR";

/// Display name of a player.
///
/// Always non-empty and trimmed. Names are not required to be unique;
/// a player is identified by its roster position, not by its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{}", _0)]
pub struct PlayerName(String);

impl PlayerName {
    /// Trims the raw input and returns `None` if nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the uppercased first character, used as the roster avatar.
    pub fn initial(&self) -> String {
        self.0
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

impl AsRef<str> for PlayerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The secret role dealt to one player.
///
/// The impostor marker is its own variant so that a word spelled
/// "IMPOSTOR" in the word list can never be mistaken for the marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// The single player who does not know the shared word.
    Impostor,
    /// The shared word every other player received.
    Word(String),
}

impl Role {
    /// Returns true if this is the impostor marker.
    pub fn is_impostor(&self) -> bool {
        matches!(self, Role::Impostor)
    }

    /// Returns the text shown to the player when the role is revealed.
    pub fn label(&self) -> &str {
        match self {
            Role::Impostor => IMPOSTOR_LABEL,
            Role::Word(word) => word,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One line of the pre-game roster listing ("Player #n").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// 1-based position in the roster, recomputed on every snapshot.
    pub number: usize,
    /// The player's display name.
    pub name: PlayerName,
}
