//! Application UI core — route table, navigation state, renderer contract,
//! event→render binding.
//!
//! # Modules
//!
//! - [`route`] — named routes, declared parameters, validated stack entries
//! - [`router`] — bounded navigation stack (push/pop/current)
//! - [`renderer`] — the screen-renderer collaborator boundary
//! - [`app`] — wires input events to transitions and transitions to renders
//!
//! This crate is `no_std` by default; it only uses `core` + `heapless`.

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod app;
pub mod renderer;
pub mod route;
pub mod router;

// Top-level re-exports for convenience
pub use app::{AppError, ProfileApp, UiEvent};
pub use renderer::ScreenRenderer;
pub use route::{ParamKind, ParamSpec, ParamValue, RouteEntry, RouteId};
pub use router::{NavError, Router, MAX_DEPTH};
