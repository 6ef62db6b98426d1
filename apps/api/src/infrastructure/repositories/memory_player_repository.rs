use async_trait::async_trait;
use chrono::Utc;
use std::sync::RwLock;

use crate::domain::errors::{RosterError, RosterResult};
use crate::domain::player::{NewPlayer, Player, PlayerId};
use crate::domain::repositories::PlayerRepository;
use crate::domain::team::TeamId;

#[derive(Debug)]
struct PlayerTable {
    next_id: PlayerId,
    rows: Vec<Player>,
}

/// Process-memory implementation of PlayerRepository
#[derive(Debug)]
pub struct InMemoryPlayerRepository {
    table: RwLock<PlayerTable>,
}

impl InMemoryPlayerRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(PlayerTable {
                next_id: 1,
                rows: Vec::new(),
            }),
        }
    }
}

impl Default for InMemoryPlayerRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> RosterError {
    RosterError::storage("player table lock poisoned")
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn insert(&self, player: NewPlayer) -> RosterResult<Player> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        let player = player.into_player(table.next_id, Utc::now());
        table.next_id += 1;
        table.rows.push(player.clone());
        Ok(player)
    }

    async fn list(&self) -> RosterResult<Vec<Player>> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table.rows.clone())
    }

    async fn count_by_team(&self, team_id: TeamId) -> RosterResult<usize> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table.rows.iter().filter(|p| p.team_id() == team_id).count())
    }
}
