use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::field_text;
use crate::api::errors::ApiError;
use crate::api::middleware::JwtAuth;
use crate::api::state::AppState;
use crate::domain::team::{Team, TeamId};

/// Request body for registering a team
#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub name: Option<Value>,
    pub coach_name: Option<Value>,
    pub coach_phone: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: TeamId,
    pub name: String,
    pub coach_name: String,
    pub coach_phone: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
            coach_name: team.coach_name().to_string(),
            coach_phone: team.coach_phone().to_string(),
            created_at: team.created_at(),
        }
    }
}

/// Register a new team
///
/// POST /api/teams
pub async fn create_team(
    State(state): State<AppState>,
    _auth: JwtAuth,
    payload: Result<Json<CreateTeamRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let Json(req) = payload?;
    let team = state
        .roster
        .create_team(
            &field_text(req.name),
            &field_text(req.coach_name),
            &field_text(req.coach_phone),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// List every team
///
/// GET /api/teams
pub async fn list_teams(
    State(state): State<AppState>,
    _auth: JwtAuth,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let teams = state.roster.list_teams().await?;

    Ok(Json(teams.iter().map(TeamResponse::from).collect()))
}
