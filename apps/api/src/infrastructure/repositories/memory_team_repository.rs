use async_trait::async_trait;
use chrono::Utc;
use std::sync::RwLock;

use crate::domain::errors::{RosterError, RosterResult};
use crate::domain::repositories::TeamRepository;
use crate::domain::team::{NewTeam, Team, TeamId};

#[derive(Debug)]
struct TeamTable {
    next_id: TeamId,
    rows: Vec<Team>,
}

/// Process-memory implementation of TeamRepository
///
/// Records live as long as the process. Identifiers start at 1.
#[derive(Debug)]
pub struct InMemoryTeamRepository {
    table: RwLock<TeamTable>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(TeamTable {
                next_id: 1,
                rows: Vec::new(),
            }),
        }
    }
}

impl Default for InMemoryTeamRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> RosterError {
    RosterError::storage("team table lock poisoned")
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn insert(&self, team: NewTeam) -> RosterResult<Team> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        let team = team.into_team(table.next_id, Utc::now());
        table.next_id += 1;
        table.rows.push(team.clone());
        Ok(team)
    }

    async fn find_by_id(&self, id: TeamId) -> RosterResult<Option<Team>> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table.rows.iter().find(|t| t.id() == id).cloned())
    }

    async fn list(&self) -> RosterResult<Vec<Team>> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table.rows.clone())
    }
}
