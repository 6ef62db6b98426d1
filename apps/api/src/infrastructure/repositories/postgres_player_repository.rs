use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::errors::{RosterError, RosterResult};
use crate::domain::player::{Height, JerseyNumber, NewPlayer, Player};
use crate::domain::repositories::PlayerRepository;
use crate::domain::team::TeamId;

/// PostgreSQL implementation of PlayerRepository
pub struct PostgresPlayerRepository {
    pool: PgPool,
}

impl PostgresPlayerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PlayerRow {
    id: i64,
    name: String,
    number: i32,
    birth_date: NaiveDate,
    height: Decimal,
    gender: String,
    position: String,
    team_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<PlayerRow> for Player {
    type Error = RosterError;

    fn try_from(r: PlayerRow) -> Result<Self, Self::Error> {
        let number = u16::try_from(r.number)
            .map_err(|_| RosterError::storage(format!("Stored number out of range: {}", r.number)))
            .and_then(JerseyNumber::new)?;
        let height = Height::new(r.height)?;

        Ok(Player::from_persistence(
            r.id,
            r.name,
            number,
            r.birth_date,
            height,
            r.gender,
            r.position,
            r.team_id,
            r.created_at,
        ))
    }
}

const PLAYER_COLUMNS: &str =
    "id, name, number, birth_date, height, gender, position, team_id, created_at";

#[async_trait]
impl PlayerRepository for PostgresPlayerRepository {
    async fn insert(&self, player: NewPlayer) -> RosterResult<Player> {
        let sql = format!(
            r#"
            INSERT INTO players (name, number, birth_date, height, gender, position, team_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            PLAYER_COLUMNS
        );

        let row = sqlx::query_as::<_, PlayerRow>(&sql)
            .bind(player.name())
            .bind(i32::from(player.number().value()))
            .bind(player.birth_date())
            .bind(player.height().metres())
            .bind(player.gender())
            .bind(player.position())
            .bind(player.team_id())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RosterError::storage(format!("Failed to save player: {}", e)))?;

        row.try_into()
    }

    async fn list(&self) -> RosterResult<Vec<Player>> {
        let sql = format!("SELECT {} FROM players ORDER BY id", PLAYER_COLUMNS);

        let rows = sqlx::query_as::<_, PlayerRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RosterError::storage(format!("Failed to list players: {}", e)))?;

        rows.into_iter().map(Player::try_from).collect()
    }

    async fn count_by_team(&self, team_id: TeamId) -> RosterResult<usize> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM players WHERE team_id = $1")
            .bind(team_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RosterError::storage(format!("Failed to count players: {}", e)))?;

        Ok(count as usize)
    }
}
