// Roster domain module
// Capacity rule, registration events and the grouped-by-team view

pub mod events;
pub mod grouping;

pub use events::RosterEvent;
pub use grouping::{group_by_team, GroupedRoster, TeamGroup};

/// Maximum number of players a single team may hold
pub const ROSTER_CAPACITY: usize = 6;
