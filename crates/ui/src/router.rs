//! Navigation state machine — a bounded stack of validated [`RouteEntry`]s.
//!
//! The stack is capped at [`MAX_DEPTH`] entries and seeded with the list
//! route, which is never popped. Arguments are validated before any stack
//! mutation, so a failed `navigate_to` leaves the active route untouched.

use heapless::Vec;
use thiserror_no_std::Error;

use crate::route::{ParamValue, RouteEntry, RouteId};

/// Maximum navigation depth, root included.
pub const MAX_DEPTH: usize = 8;

/// Error type for navigation operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavError {
    /// The route name is not registered.
    #[error("unknown route")]
    UnknownRoute,
    /// The route declares a parameter and none was supplied.
    #[error("missing argument {param} for route {route}")]
    MissingArgument {
        /// Route that was addressed.
        route: RouteId,
        /// Name of the declared parameter.
        param: &'static str,
    },
    /// The supplied argument does not satisfy the declared parameter type.
    #[error("invalid argument for route {0}")]
    InvalidArgument(RouteId),
    /// The navigation stack is at capacity; the transition was refused.
    #[error("navigation stack is full")]
    StackFull,
}

/// Navigation stack bounded at [`MAX_DEPTH`] entries.
pub struct Router {
    stack: Vec<RouteEntry, MAX_DEPTH>,
}

impl Router {
    /// Create a new router with the profile list as the root route.
    pub fn new() -> Self {
        let mut stack = Vec::new();
        // This push always succeeds: the stack starts empty and cap is 8.
        stack.push(RouteEntry::ProfileList).ok();
        Router { stack }
    }

    /// Return the active route entry (top of the stack).
    #[must_use]
    pub fn current(&self) -> RouteEntry {
        // The stack is never empty: new() seeds it and back() guards depth > 1.
        match self.stack.last() {
            Some(entry) => *entry,
            None => RouteEntry::ProfileList, // unreachable by construction
        }
    }

    /// Resolve `route` by name, validate `arg`, and push the new entry.
    ///
    /// Validation happens before the push: on any error the stack — and
    /// therefore [`current`](Self::current) — is unchanged.
    ///
    /// # Errors
    ///
    /// [`NavError::UnknownRoute`], [`NavError::MissingArgument`],
    /// [`NavError::InvalidArgument`], or [`NavError::StackFull`] when the
    /// bounded stack is at capacity.
    pub fn navigate_to(
        &mut self,
        route: &str,
        arg: Option<ParamValue<'_>>,
    ) -> Result<RouteEntry, NavError> {
        let id = RouteId::from_name(route).ok_or(NavError::UnknownRoute)?;
        let entry = id.resolve(arg)?;
        self.stack.push(entry).map_err(|_| NavError::StackFull)?;
        Ok(entry)
    }

    /// Pop the active entry and reactivate the previous one.
    ///
    /// Returns `false` (and does nothing) when only the root entry remains:
    /// popping past the root is a no-op, not an error.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Number of entries currently on the stack, root included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster::ProfileId;

    #[test]
    fn test_router_starts_at_profile_list() {
        let router = Router::new();
        assert_eq!(router.current(), RouteEntry::ProfileList);
        assert_eq!(router.depth(), 1);
    }

    #[test]
    fn test_router_navigate_to_detail() {
        let mut router = Router::new();
        router
            .navigate_to("profile_detail", Some(ParamValue::Int(2)))
            .expect("navigate");
        assert_eq!(
            router.current(),
            RouteEntry::ProfileDetail {
                user_id: ProfileId(2)
            }
        );
        assert_eq!(router.depth(), 2);
    }

    #[test]
    fn test_router_back_restores_prior_route() {
        let mut router = Router::new();
        let before = router.current();
        router
            .navigate_to("profile_detail", Some(ParamValue::Int(1)))
            .expect("navigate");
        assert!(router.back());
        assert_eq!(router.current(), before);
        assert_eq!(router.depth(), 1);
    }

    #[test]
    fn test_router_back_at_root_is_noop() {
        let mut router = Router::new();
        assert!(!router.back());
        assert_eq!(router.current(), RouteEntry::ProfileList);
        assert_eq!(router.depth(), 1);
    }

    #[test]
    fn test_router_unknown_route_leaves_stack() {
        let mut router = Router::new();
        let err = router.navigate_to("settings", None).unwrap_err();
        assert_eq!(err, NavError::UnknownRoute);
        assert_eq!(router.current(), RouteEntry::ProfileList);
        assert_eq!(router.depth(), 1);
    }

    #[test]
    fn test_router_invalid_argument_leaves_stack() {
        let mut router = Router::new();
        let err = router
            .navigate_to("profile_detail", Some(ParamValue::Text("x")))
            .unwrap_err();
        assert_eq!(err, NavError::InvalidArgument(RouteId::ProfileDetail));
        assert_eq!(router.current(), RouteEntry::ProfileList);
        assert_eq!(router.depth(), 1);
    }

    #[test]
    fn test_router_missing_argument_leaves_stack() {
        let mut router = Router::new();
        let err = router.navigate_to("profile_detail", None).unwrap_err();
        assert_eq!(
            err,
            NavError::MissingArgument {
                route: RouteId::ProfileDetail,
                param: "user_id",
            }
        );
        assert_eq!(router.depth(), 1);
    }

    #[test]
    fn test_router_stack_full_is_reported() {
        let mut router = Router::new();
        // Root occupies one slot; MAX_DEPTH - 1 pushes fill the stack.
        for n in 0..(MAX_DEPTH - 1) as u32 {
            router
                .navigate_to("profile_detail", Some(ParamValue::Int(n)))
                .expect("within capacity");
        }
        assert_eq!(router.depth(), MAX_DEPTH);
        let top = router.current();
        let err = router
            .navigate_to("profile_detail", Some(ParamValue::Int(99)))
            .unwrap_err();
        assert_eq!(err, NavError::StackFull);
        assert_eq!(router.current(), top);
    }

    #[test]
    fn test_router_interleaved_navigation() {
        let mut router = Router::new();
        router
            .navigate_to("profile_detail", Some(ParamValue::Int(1)))
            .expect("navigate 1");
        router
            .navigate_to("profiles", None)
            .expect("navigate list");
        assert_eq!(router.current(), RouteEntry::ProfileList);
        assert!(router.back());
        assert_eq!(
            router.current(),
            RouteEntry::ProfileDetail {
                user_id: ProfileId(1)
            }
        );
    }
}
