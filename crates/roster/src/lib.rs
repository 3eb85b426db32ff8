//! Profile roster — immutable user-profile records and id lookup.
//!
//! # Modules
//!
//! - [`profile`] — `Profile` record and `ProfileId` key
//! - [`store`] — `ProfileStore<N>` fixed-capacity seeded store
//! - [`seed`] — compiled-in demo roster
//!
//! This crate is `no_std` by default; it only uses `core` + `heapless`.

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod profile;
pub mod seed;
pub mod store;

// Top-level re-exports for convenience
pub use profile::{Profile, ProfileId};
pub use store::{ProfileStore, Roster, RosterError, SmallRoster, MAX_PROFILES};
