use async_trait::async_trait;

use crate::domain::errors::RosterResult;
use crate::domain::team::{NewTeam, Team, TeamId};

/// Repository trait for teams
///
/// Implementations assign identifiers from an increasing counter and never
/// update or delete a stored team.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Store a validated team, returning it with its new identifier
    async fn insert(&self, team: NewTeam) -> RosterResult<Team>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: TeamId) -> RosterResult<Option<Team>>;

    /// All teams in insertion order
    async fn list(&self) -> RosterResult<Vec<Team>>;
}
