// Team domain module
// Contains the team entity and its registration draft

#![allow(clippy::module_inception)]

pub mod team;

// Re-export main types for convenience
pub use team::{NewTeam, Team, TeamId, MISSING_TEAM_NAME};
