//! Compiled-in demo roster.
//!
//! The records here are static seed data, not an external interface: they
//! exist so a device image or host demo can boot with something to show.
//! Real deployments build their own [`Roster`] at startup and hand it to the
//! router/app the same way.

use crate::profile::{Profile, ProfileId};
use crate::store::{Roster, RosterError};

/// Seed entries: id, name, presence, picture reference.
const DEMO_PROFILES: &[(u32, &str, bool, &str)] = &[
    (1, "Top Boy", true, "assets/profiles/top_boy.png"),
    (2, "Jamie", false, "assets/profiles/jamie.png"),
    (3, "Dris", true, "assets/profiles/dris.png"),
    (4, "Sully", false, "assets/profiles/sully.png"),
    (5, "Jaq", true, "assets/profiles/jaq.png"),
];

/// Build the demo roster.
///
/// Ids in the seed table are unique and the list is far below capacity, so
/// this only fails if the table itself is broken.
pub fn demo_roster() -> Result<Roster, RosterError> {
    let mut roster = Roster::new();
    for &(id, name, online, picture) in DEMO_PROFILES {
        roster.insert(Profile::new(ProfileId(id), name, online, picture))?;
    }
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_roster_seeds() {
        let roster = demo_roster().expect("seed");
        assert_eq!(roster.len(), DEMO_PROFILES.len());
    }

    #[test]
    fn test_demo_roster_reference_records() {
        let roster = demo_roster().expect("seed");
        let top_boy = roster.get_by_id(ProfileId(1)).expect("id 1");
        assert_eq!(top_boy.name.as_str(), "Top Boy");
        assert!(top_boy.online);
        let jamie = roster.get_by_id(ProfileId(2)).expect("id 2");
        assert_eq!(jamie.name.as_str(), "Jamie");
        assert!(!jamie.online);
    }

    #[test]
    fn test_demo_roster_ids_unique() {
        // insert() enforces uniqueness, so a successful seed proves it; this
        // guards the table against future edits all the same.
        let mut seen = std::vec::Vec::new();
        for &(id, ..) in DEMO_PROFILES {
            assert!(!seen.contains(&id), "duplicate seed id {id}");
            seen.push(id);
        }
    }
}
