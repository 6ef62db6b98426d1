use async_trait::async_trait;

use crate::domain::errors::RosterResult;
use crate::domain::player::{NewPlayer, Player};
use crate::domain::team::TeamId;

/// Repository trait for players
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Store a validated player, returning it with its new identifier
    ///
    /// Capacity is not checked here; callers serialise writes and check
    /// [`count_by_team`](PlayerRepository::count_by_team) first.
    async fn insert(&self, player: NewPlayer) -> RosterResult<Player>;

    /// All players in insertion order
    async fn list(&self) -> RosterResult<Vec<Player>>;

    /// Number of players registered on a team
    async fn count_by_team(&self, team_id: TeamId) -> RosterResult<usize>;
}
