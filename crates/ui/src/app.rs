//! App binding — input events in, navigation transitions and re-renders out.
//!
//! The active route entry is the observable state: any event that changes it
//! triggers exactly one render of the newly active screen, with that route's
//! resolved data. Events that change nothing (back at the root) render
//! nothing.

use thiserror_no_std::Error;

use roster::{ProfileId, ProfileStore, RosterError};

use crate::renderer::ScreenRenderer;
use crate::route::{ParamValue, RouteEntry, RouteId};
use crate::router::{NavError, Router};

/// A discrete user interaction, as translated by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiEvent {
    /// A list row was selected.
    Select(ProfileId),
    /// Back was requested.
    Back,
}

/// Error type for app operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AppError<E: core::fmt::Debug> {
    /// A navigation transition was refused.
    #[error("navigation failed: {0}")]
    Nav(#[from] NavError),
    /// The active route's data could not be resolved from the store.
    #[error("profile resolution failed: {0}")]
    Roster(#[from] RosterError),
    /// The renderer failed to draw the active screen.
    #[error("screen render failed")]
    Render(E),
}

/// Owns the router and renderer, borrows the seeded store, and keeps the
/// three in lockstep: event → transition → render.
pub struct ProfileApp<'r, R: ScreenRenderer, const N: usize> {
    roster: &'r ProfileStore<N>,
    router: Router,
    renderer: R,
}

impl<'r, R: ScreenRenderer, const N: usize> ProfileApp<'r, R, N> {
    /// Boot the app on the list route and perform the initial render.
    ///
    /// # Errors
    ///
    /// [`AppError::Render`] when the boot render fails.
    pub fn new(roster: &'r ProfileStore<N>, renderer: R) -> Result<Self, AppError<R::Error>> {
        let mut app = ProfileApp {
            roster,
            router: Router::new(),
            renderer,
        };
        app.render_current()?;
        Ok(app)
    }

    /// Apply one interaction event.
    ///
    /// `Select(id)` navigates to the detail route carrying `id`; `Back` pops
    /// unless the list route is already active. A re-render happens only
    /// when the active entry actually changed.
    ///
    /// # Errors
    ///
    /// Navigation, lookup, or render failures. The navigation stack is
    /// unchanged on navigation failure, and a selection whose detail screen
    /// cannot be resolved or drawn is rolled back, so [`current`](Self::current)
    /// always names the last successfully rendered screen.
    pub fn handle_event(&mut self, event: UiEvent) -> Result<(), AppError<R::Error>> {
        let changed = match event {
            UiEvent::Select(id) => {
                self.router
                    .navigate_to(RouteId::ProfileDetail.name(), Some(ParamValue::Int(id.0)))?;
                true
            }
            UiEvent::Back => self.router.back(),
        };
        if changed {
            if let Err(err) = self.render_current() {
                // The entry just pushed was never drawn; pop it so the
                // observable route stays in lockstep with the display.
                if matches!(event, UiEvent::Select(_)) {
                    self.router.back();
                }
                return Err(err);
            }
        }
        Ok(())
    }

    /// The active route entry.
    #[must_use]
    pub fn current(&self) -> RouteEntry {
        self.router.current()
    }

    /// Read access to the router (depth inspection, host chrome).
    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Consume the app and return the renderer (host teardown, test
    /// inspection).
    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Render the screen bound to the active route with its resolved data.
    fn render_current(&mut self) -> Result<(), AppError<R::Error>> {
        match self.router.current() {
            RouteEntry::ProfileList => self
                .renderer
                .render_list(self.roster.profiles())
                .map_err(AppError::Render),
            RouteEntry::ProfileDetail { user_id } => {
                let profile = self.roster.get_by_id(user_id)?;
                self.renderer
                    .render_detail(profile)
                    .map_err(AppError::Render)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster::{Profile, SmallRoster};

    /// Counting renderer: records what was asked of it, never fails.
    #[derive(Default)]
    struct CountingRenderer {
        list_renders: usize,
        detail_renders: usize,
        last_detail: Option<ProfileId>,
    }

    impl ScreenRenderer for CountingRenderer {
        type Error = core::convert::Infallible;

        fn render_list(&mut self, _profiles: &[Profile]) -> Result<(), Self::Error> {
            self.list_renders += 1;
            Ok(())
        }

        fn render_detail(&mut self, profile: &Profile) -> Result<(), Self::Error> {
            self.detail_renders += 1;
            self.last_detail = Some(profile.id);
            Ok(())
        }
    }

    fn two_user_roster() -> SmallRoster {
        let mut roster = SmallRoster::new();
        roster
            .insert(Profile::new(ProfileId(1), "Top Boy", true, "pic1"))
            .expect("insert");
        roster
            .insert(Profile::new(ProfileId(2), "Jamie", false, "pic2"))
            .expect("insert");
        roster
    }

    #[test]
    fn test_app_boot_renders_list_once() {
        let roster = two_user_roster();
        let app = ProfileApp::new(&roster, CountingRenderer::default()).expect("boot");
        assert_eq!(app.renderer.list_renders, 1);
        assert_eq!(app.renderer.detail_renders, 0);
        assert_eq!(app.current(), RouteEntry::ProfileList);
    }

    #[test]
    fn test_app_select_renders_detail() {
        let roster = two_user_roster();
        let mut app = ProfileApp::new(&roster, CountingRenderer::default()).expect("boot");
        app.handle_event(UiEvent::Select(ProfileId(2))).expect("select");
        assert_eq!(app.renderer.detail_renders, 1);
        assert_eq!(app.renderer.last_detail, Some(ProfileId(2)));
        assert_eq!(
            app.current(),
            RouteEntry::ProfileDetail {
                user_id: ProfileId(2)
            }
        );
    }

    #[test]
    fn test_app_back_rerenders_list() {
        let roster = two_user_roster();
        let mut app = ProfileApp::new(&roster, CountingRenderer::default()).expect("boot");
        app.handle_event(UiEvent::Select(ProfileId(1))).expect("select");
        app.handle_event(UiEvent::Back).expect("back");
        assert_eq!(app.current(), RouteEntry::ProfileList);
        // Boot render + post-back render.
        assert_eq!(app.renderer.list_renders, 2);
    }

    #[test]
    fn test_app_back_at_root_renders_nothing() {
        let roster = two_user_roster();
        let mut app = ProfileApp::new(&roster, CountingRenderer::default()).expect("boot");
        app.handle_event(UiEvent::Back).expect("back is a no-op");
        assert_eq!(app.current(), RouteEntry::ProfileList);
        assert_eq!(app.renderer.list_renders, 1); // boot render only
    }

    #[test]
    fn test_app_select_unknown_id_is_roster_error() {
        let roster = two_user_roster();
        let mut app = ProfileApp::new(&roster, CountingRenderer::default()).expect("boot");
        let err = app.handle_event(UiEvent::Select(ProfileId(99))).unwrap_err();
        assert_eq!(err, AppError::Roster(RosterError::NotFound(ProfileId(99))));
        // No detail render happened.
        assert_eq!(app.renderer.detail_renders, 0);
    }

    #[test]
    fn test_app_failed_select_rolls_back_route() {
        let roster = two_user_roster();
        let mut app = ProfileApp::new(&roster, CountingRenderer::default()).expect("boot");
        app.handle_event(UiEvent::Select(ProfileId(99)))
            .expect_err("unknown id must fail");
        // The unrenderable detail entry was popped again: the observable
        // route still names the screen that is actually on the display.
        assert_eq!(app.current(), RouteEntry::ProfileList);
        assert_eq!(app.router.depth(), 1);
        // A valid selection still works afterwards.
        app.handle_event(UiEvent::Select(ProfileId(1))).expect("select");
        assert_eq!(
            app.current(),
            RouteEntry::ProfileDetail {
                user_id: ProfileId(1)
            }
        );
    }
}
