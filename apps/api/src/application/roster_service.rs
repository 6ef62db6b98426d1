use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::errors::{RosterError, RosterResult};
use crate::domain::player::{NewPlayer, Player, PlayerInput};
use crate::domain::repositories::{PlayerRepository, TeamRepository};
use crate::domain::roster::{group_by_team, GroupedRoster, RosterEvent, ROSTER_CAPACITY};
use crate::domain::team::{NewTeam, Team, TeamId};
use crate::infrastructure::repositories::{InMemoryPlayerRepository, InMemoryTeamRepository};

/// Owns every team and player record and enforces the roster rules
///
/// Writes are serialised by `write_lock`, so the capacity check and the
/// insert that follows it cannot interleave with another registration in
/// the same process. Reads go straight to the repositories.
pub struct RosterService {
    teams: Arc<dyn TeamRepository>,
    players: Arc<dyn PlayerRepository>,
    write_lock: Mutex<()>,
}

impl RosterService {
    pub fn new(teams: Arc<dyn TeamRepository>, players: Arc<dyn PlayerRepository>) -> Self {
        Self {
            teams,
            players,
            write_lock: Mutex::new(()),
        }
    }

    /// A service backed by process memory
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryTeamRepository::new()),
            Arc::new(InMemoryPlayerRepository::new()),
        )
    }

    /// Registers a team
    ///
    /// # Returns
    /// * `Ok(Team)` - The stored team with its new identifier
    /// * `Err(RosterError::Validation)` - If any field is blank
    pub async fn create_team(
        &self,
        name: &str,
        coach_name: &str,
        coach_phone: &str,
    ) -> RosterResult<Team> {
        let draft = NewTeam::new(name, coach_name, coach_phone).map_err(|e| {
            tracing::warn!("Team registration rejected: {}", e);
            e
        })?;

        let _guard = self.write_lock.lock().await;
        let team = self.teams.insert(draft).await?;
        tracing::info!("{}", RosterEvent::team_registered(&team));

        Ok(team)
    }

    pub async fn list_teams(&self) -> RosterResult<Vec<Team>> {
        self.teams.list().await
    }

    /// Teams a player can be registered on
    ///
    /// Fails when no team exists yet, since the player form has nothing to
    /// offer.
    pub async fn roster_form(&self) -> RosterResult<Vec<Team>> {
        let teams = self.teams.list().await?;
        if teams.is_empty() {
            return Err(RosterError::validation("register a team first"));
        }
        Ok(teams)
    }

    /// Registers a player on an existing team
    ///
    /// # Returns
    /// * `Ok(Player)` - The stored player with its new identifier
    /// * `Err(RosterError::Validation)` - If a field is missing or malformed,
    ///   or the team does not exist
    /// * `Err(RosterError::CapacityExceeded)` - If the team already holds
    ///   [`ROSTER_CAPACITY`] players
    ///
    /// Nothing is stored on failure.
    pub async fn create_player(&self, input: &PlayerInput) -> RosterResult<Player> {
        let draft = NewPlayer::parse(input, Utc::now().date_naive()).map_err(|e| {
            tracing::warn!("Player registration rejected: {}", e);
            e
        })?;
        let team_id = draft.team_id();

        let _guard = self.write_lock.lock().await;

        if self.teams.find_by_id(team_id).await?.is_none() {
            tracing::warn!("Player registration rejected: unknown team {}", team_id);
            return Err(RosterError::validation(format!(
                "team {} does not exist",
                team_id
            )));
        }

        let current = self.players.count_by_team(team_id).await?;
        if current >= ROSTER_CAPACITY {
            tracing::warn!("Player registration rejected: team {} is full", team_id);
            return Err(RosterError::CapacityExceeded {
                team_id,
                capacity: ROSTER_CAPACITY,
            });
        }

        let player = self.players.insert(draft).await?;
        tracing::info!("{}", RosterEvent::player_registered(&player, current + 1));

        Ok(player)
    }

    pub async fn list_players(&self) -> RosterResult<Vec<Player>> {
        self.players.list().await
    }

    /// Number of players currently on a team
    pub async fn player_count(&self, team_id: TeamId) -> RosterResult<usize> {
        self.players.count_by_team(team_id).await
    }

    /// Players grouped under their teams for display
    pub async fn grouped_players(&self) -> RosterResult<GroupedRoster> {
        let players = self.players.list().await?;
        if players.is_empty() {
            return Ok(GroupedRoster::default());
        }
        let teams = self.teams.list().await?;
        Ok(group_by_team(&teams, &players))
    }
}
