//! Route table — named, addressable screen states with declared parameters.
//!
//! A route name plus an optional argument is what the host hands to the
//! router; validation against the declared parameter happens here, before
//! any navigation-stack mutation, and produces a typed [`RouteEntry`].

use roster::ProfileId;

use crate::router::NavError;

/// Every route the router can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RouteId {
    /// Roster list (the initial route, never popped).
    ProfileList,
    /// Detail view of one profile; declares an integer `user_id` parameter.
    ProfileDetail,
}

/// Declared parameter type of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParamKind {
    /// Unsigned integer (profile id).
    Int,
}

/// A route's declared parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Parameter name as it appears in the route contract.
    pub name: &'static str,
    /// Required value type.
    pub kind: ParamKind,
}

/// Argument supplied at navigation time, before validation.
///
/// `Text` exists so hosts that receive route arguments as strings (deep
/// links, test drivers) can hand them over unparsed; a text argument for an
/// integer parameter is rejected as [`NavError::InvalidArgument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamValue<'a> {
    /// Integer argument.
    Int(u32),
    /// Unparsed text argument.
    Text(&'a str),
}

/// A validated route with its resolved argument — what the navigation stack
/// actually holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RouteEntry {
    /// Roster list.
    ProfileList,
    /// Detail view bound to one profile id.
    ProfileDetail {
        /// The selected profile.
        user_id: ProfileId,
    },
}

impl RouteEntry {
    /// The route this entry instantiates.
    #[must_use]
    pub fn id(self) -> RouteId {
        match self {
            RouteEntry::ProfileList => RouteId::ProfileList,
            RouteEntry::ProfileDetail { .. } => RouteId::ProfileDetail,
        }
    }
}

impl RouteId {
    /// All routes in registration order.
    pub const ALL: &'static [RouteId] = &[RouteId::ProfileList, RouteId::ProfileDetail];

    /// Addressable name of the route.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            RouteId::ProfileList => "profiles",
            RouteId::ProfileDetail => "profile_detail",
        }
    }

    /// The declared parameter, or `None` for parameterless routes.
    #[must_use]
    pub fn param(self) -> Option<ParamSpec> {
        match self {
            RouteId::ProfileList => None,
            RouteId::ProfileDetail => Some(ParamSpec {
                name: "user_id",
                kind: ParamKind::Int,
            }),
        }
    }

    /// Look a route up by its addressable name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<RouteId> {
        Self::ALL.iter().copied().find(|r| r.name() == name)
    }

    /// Validate `arg` against the declared parameter and build the entry.
    ///
    /// # Errors
    ///
    /// - [`NavError::MissingArgument`] — the route declares a parameter and
    ///   none was supplied.
    /// - [`NavError::InvalidArgument`] — the supplied value does not satisfy
    ///   the declared type, or an argument was supplied to a parameterless
    ///   route.
    pub fn resolve(self, arg: Option<ParamValue<'_>>) -> Result<RouteEntry, NavError> {
        // Validate against the declared parameter first; only then build the
        // typed entry.
        let raw = match (self.param(), arg) {
            (None, None) => None,
            (None, Some(_)) => return Err(NavError::InvalidArgument(self)),
            (Some(spec), None) => {
                return Err(NavError::MissingArgument {
                    route: self,
                    param: spec.name,
                })
            }
            (Some(spec), Some(value)) => match (spec.kind, value) {
                (ParamKind::Int, ParamValue::Int(raw)) => Some(raw),
                (ParamKind::Int, ParamValue::Text(_)) => {
                    return Err(NavError::InvalidArgument(self))
                }
            },
        };
        match (self, raw) {
            (RouteId::ProfileList, _) => Ok(RouteEntry::ProfileList),
            (RouteId::ProfileDetail, Some(raw)) => Ok(RouteEntry::ProfileDetail {
                user_id: ProfileId(raw),
            }),
            // Unreachable by construction: ProfileDetail declares a
            // parameter, so a missing argument was rejected above.
            (RouteId::ProfileDetail, None) => Err(NavError::MissingArgument {
                route: self,
                param: "user_id",
            }),
        }
    }
}

impl core::fmt::Display for RouteId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
