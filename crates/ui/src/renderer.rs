//! Screen renderer contract — the collaborator boundary for visual output.
//!
//! The core supplies fully resolved data (the roster slice for the list
//! route, one record for the detail route) and nothing else. How it is
//! drawn — terminal, e-paper, pixels, logs — is the implementor's business.
//!
//! The reverse direction (the user tapped a row, the user pressed back) does
//! not flow through this trait: hosts translate interaction into
//! [`UiEvent`](crate::app::UiEvent)s, which the app binding wires to
//! `navigate_to`/`back`.

use roster::Profile;

/// Renders the screen bound to the active route.
pub trait ScreenRenderer {
    /// Error type for drawing failures.
    type Error: core::fmt::Debug;

    /// Render the list screen for `profiles` (insertion order).
    fn render_list(&mut self, profiles: &[Profile]) -> Result<(), Self::Error>;

    /// Render the detail screen for one resolved `profile`.
    fn render_detail(&mut self, profile: &Profile) -> Result<(), Self::Error>;
}
