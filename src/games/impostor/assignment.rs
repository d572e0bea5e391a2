//! Role assignment: one impostor, one shared word for everyone else.

use super::action::ActionError;
use super::roster::Roster;
use super::types::Role;
use crate::words::WordList;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Random source capability
// ─────────────────────────────────────────────────────────────

/// Source of uniform random indices.
///
/// The game never reaches for a global RNG; the session owns one of these
/// and hands it to the dealer, so tests can substitute a scripted source.
pub trait RandomSource {
    /// Returns an index drawn uniformly from `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// [`RandomSource`] backed by any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngSource<StdRng> {
    /// Creates a source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Creates a reproducible source.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Deterministic [`RandomSource`] that replays a fixed queue of indices.
///
/// Each value is reduced modulo the requested length. Once the queue is
/// exhausted every draw returns 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    picks: VecDeque<usize>,
}

impl ScriptedSource {
    /// Creates a source that returns `picks` in order.
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedSource {
    fn pick_index(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % len
    }
}

// ─────────────────────────────────────────────────────────────
//  Assignment
// ─────────────────────────────────────────────────────────────

/// Roles for one game, indexed in parallel with the roster.
///
/// Only the crate can read individual roles; the session exposes at most
/// the current player's role, and only while it is revealed.
#[derive(Clone, PartialEq, Eq)]
pub struct Assignment {
    roles: Vec<Role>,
    impostor_index: usize,
}

// Roles stay out of debug output and log fields.
impl std::fmt::Debug for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assignment")
            .field("len", &self.roles.len())
            .finish_non_exhaustive()
    }
}

impl Assignment {
    /// Deals roles for `roster`.
    ///
    /// Draws the impostor position first, then the shared word.
    #[instrument(skip_all, fields(players = roster.len(), words = words.len()))]
    pub fn deal<R: RandomSource + ?Sized>(
        roster: &Roster,
        words: &WordList,
        rng: &mut R,
    ) -> Result<Self, ActionError> {
        if roster.is_empty() {
            return Err(ActionError::EmptyRoster);
        }

        let impostor_index = rng.pick_index(roster.len());
        let word_index = rng.pick_index(words.len());
        let shared_word = words
            .get(word_index)
            .ok_or_else(|| {
                ActionError::InvariantViolation(format!(
                    "Random source returned word index {} for {} words",
                    word_index,
                    words.len()
                ))
            })?
            .to_string();

        let roles = (0..roster.len())
            .map(|i| {
                if i == impostor_index {
                    Role::Impostor
                } else {
                    Role::Word(shared_word.clone())
                }
            })
            .collect::<Vec<_>>();

        debug!(players = roles.len(), "Roles dealt");
        Ok(Self {
            roles,
            impostor_index,
        })
    }

    /// Builds an assignment from explicit roles, bypassing the dealer.
    #[cfg(test)]
    pub(crate) fn from_roles(roles: Vec<Role>) -> Self {
        let impostor_index = roles.iter().position(Role::is_impostor).unwrap_or(0);
        Self {
            roles,
            impostor_index,
        }
    }

    /// Role at `index`.
    pub(crate) fn role_for(&self, index: usize) -> Option<&Role> {
        self.roles.get(index)
    }

    /// All roles, for invariant checks.
    pub(crate) fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Position of the impostor.
    pub(crate) fn impostor_index(&self) -> usize {
        self.impostor_index
    }

    /// Number of roles dealt.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Returns true if no roles were dealt (never the case after `deal`).
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
