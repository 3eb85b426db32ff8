//! ProfileStore — fixed-capacity, in-memory roster seeded once at startup.
//!
//! The store is handed to the router/app by shared reference after seeding;
//! no mutation happens past that point. Lookup failures are explicit
//! [`RosterError::NotFound`] values, never panics.

use heapless::Vec;
use thiserror_no_std::Error;

use crate::profile::{Profile, ProfileId};

/// Maximum number of profiles the full roster holds.
pub const MAX_PROFILES: usize = 256;

/// Error type for store operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RosterError {
    /// The store has reached its compile-time capacity.
    #[error("profile store is full")]
    Full,
    /// A profile with this id is already seeded.
    #[error("duplicate profile id {0}")]
    DuplicateId(ProfileId),
    /// No profile matches the requested id.
    ///
    /// Ids normally originate from records already in the store, so hitting
    /// this is a caller contract violation, not a recoverable branch.
    #[error("no profile with id {0}")]
    NotFound(ProfileId),
}

/// A fixed-capacity, ordered store of [`Profile`] records.
///
/// `N` is the maximum number of profiles; use [`SmallRoster`] in tests and
/// [`Roster`] for the real seed.
pub struct ProfileStore<const N: usize> {
    profiles: Vec<Profile, N>,
}

/// Alias for the full-capacity roster.
pub type Roster = ProfileStore<MAX_PROFILES>;

/// Alias used in tests (capacity 16).
pub type SmallRoster = ProfileStore<16>;

impl<const N: usize> ProfileStore<N> {
    /// Create an empty store.
    pub const fn new() -> Self {
        ProfileStore {
            profiles: Vec::new(),
        }
    }

    /// Append `profile` to the store (seed time only).
    ///
    /// Returns `Err(RosterError::DuplicateId)` when the id is already
    /// present, `Err(RosterError::Full)` when capacity `N` is exhausted.
    pub fn insert(&mut self, profile: Profile) -> Result<(), RosterError> {
        if self.profiles.iter().any(|p| p.id == profile.id) {
            return Err(RosterError::DuplicateId(profile.id));
        }
        self.profiles
            .push(profile)
            .map_err(|_| RosterError::Full)
    }

    /// Resolve `id` to its record.
    ///
    /// Returns `Err(RosterError::NotFound)` when no record matches; the
    /// record is returned whole or not at all.
    pub fn get_by_id(&self, id: ProfileId) -> Result<&Profile, RosterError> {
        self.profiles
            .iter()
            .find(|p| p.id == id)
            .ok_or(RosterError::NotFound(id))
    }

    /// All profiles in insertion order.
    #[must_use]
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// Number of profiles currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns `true` when nothing has been seeded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl<const N: usize> Default for ProfileStore<N> {
    fn default() -> Self {
        Self::new()
    }
}
