use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::errors::{RosterError, RosterResult};
use crate::domain::repositories::TeamRepository;
use crate::domain::team::{NewTeam, Team, TeamId};

/// PostgreSQL implementation of TeamRepository
///
/// Identifiers come from the `teams.id` BIGSERIAL column.
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TeamRow {
    id: i64,
    name: String,
    coach_name: String,
    coach_phone: String,
    created_at: DateTime<Utc>,
}

impl From<TeamRow> for Team {
    fn from(r: TeamRow) -> Self {
        Team::from_persistence(r.id, r.name, r.coach_name, r.coach_phone, r.created_at)
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn insert(&self, team: NewTeam) -> RosterResult<Team> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            INSERT INTO teams (name, coach_name, coach_phone)
            VALUES ($1, $2, $3)
            RETURNING id, name, coach_name, coach_phone, created_at
            "#,
        )
        .bind(team.name())
        .bind(team.coach_name())
        .bind(team.coach_phone())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RosterError::storage(format!("Failed to save team: {}", e)))?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: TeamId) -> RosterResult<Option<Team>> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT id, name, coach_name, coach_phone, created_at
            FROM teams
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RosterError::storage(format!("Failed to find team by id: {}", e)))?;

        Ok(row.map(Team::from))
    }

    async fn list(&self) -> RosterResult<Vec<Team>> {
        let rows = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT id, name, coach_name, coach_phone, created_at
            FROM teams
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RosterError::storage(format!("Failed to list teams: {}", e)))?;

        Ok(rows.into_iter().map(Team::from).collect())
    }
}
