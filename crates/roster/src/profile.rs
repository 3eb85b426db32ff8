//! Profile — core data type representing one user in the roster.

use heapless::String;
use serde::{Deserialize, Serialize};

/// Unique key of a [`Profile`] within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProfileId(pub u32);

impl core::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProfileId {
    fn from(raw: u32) -> Self {
        ProfileId(raw)
    }
}

/// A single user profile held in the roster.
///
/// Records are created once when the store is seeded and never mutated or
/// removed afterwards; the store only hands them out by shared reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique key within the store.
    pub id: ProfileId,
    /// Display name (up to 64 UTF-8 bytes).
    pub name: String<64>,
    /// Presence flag: `true` = "Active Now", `false` = "Offline".
    pub online: bool,
    /// Opaque picture reference (asset key or URL, up to 128 UTF-8 bytes).
    /// Never interpreted by this crate; the renderer decides what it means.
    pub picture: String<128>,
}

impl Profile {
    /// Create a profile from borrowed text fields.
    ///
    /// Text longer than the field capacity is truncated silently at a
    /// character boundary (bounded-buffer contract, as with file paths in
    /// the storage layer).
    pub fn new(id: ProfileId, name: &str, online: bool, picture: &str) -> Self {
        Profile {
            id,
            name: bounded(name),
            online,
            picture: bounded(picture),
        }
    }
}

/// Copy `src` into a fresh `String<N>`, truncating at a char boundary when
/// it does not fit.
fn bounded<const N: usize>(src: &str) -> String<N> {
    let mut out = String::new();
    for ch in src.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}
