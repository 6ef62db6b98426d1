use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::field_text;
use super::teams::TeamResponse;
use crate::api::errors::ApiError;
use crate::api::middleware::JwtAuth;
use crate::api::state::AppState;
use crate::domain::player::{Player, PlayerId, PlayerInput};
use crate::domain::roster::{TeamGroup, ROSTER_CAPACITY};
use crate::domain::team::TeamId;

/// Request body for registering a player
#[derive(Debug, Deserialize)]
pub struct CreatePlayerRequest {
    pub name: Option<Value>,
    pub number: Option<Value>,
    pub birth_date: Option<Value>,
    pub height: Option<Value>,
    pub gender: Option<Value>,
    pub position: Option<Value>,
    pub team_id: Option<Value>,
}

impl From<CreatePlayerRequest> for PlayerInput {
    fn from(req: CreatePlayerRequest) -> Self {
        Self {
            name: field_text(req.name),
            number: field_text(req.number),
            birth_date: field_text(req.birth_date),
            height: field_text(req.height),
            gender: field_text(req.gender),
            position: field_text(req.position),
            team_id: field_text(req.team_id),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub id: PlayerId,
    pub name: String,
    pub number: u16,
    pub birth_date: NaiveDate,
    pub height: Decimal,
    pub gender: String,
    pub position: String,
    pub team_id: TeamId,
    pub created_at: DateTime<Utc>,
}

impl From<&Player> for PlayerResponse {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id(),
            name: player.name().to_string(),
            number: player.number().value(),
            birth_date: player.birth_date(),
            height: player.height().metres(),
            gender: player.gender().to_string(),
            position: player.position().to_string(),
            team_id: player.team_id(),
            created_at: player.created_at(),
        }
    }
}

/// One team and its players in the grouped view
#[derive(Debug, Serialize)]
pub struct TeamGroupResponse {
    pub team_id: TeamId,
    pub team: TeamResponse,
    pub orphaned: bool,
    pub players: Vec<PlayerResponse>,
}

impl From<&TeamGroup> for TeamGroupResponse {
    fn from(group: &TeamGroup) -> Self {
        Self {
            team_id: group.team.id(),
            team: TeamResponse::from(&group.team),
            orphaned: group.orphaned,
            players: group.players.iter().map(PlayerResponse::from).collect(),
        }
    }
}

/// Choices for the player registration form
#[derive(Debug, Serialize)]
pub struct PlayerFormResponse {
    pub teams: Vec<TeamResponse>,
    pub capacity: usize,
}

/// Teams available for player registration
///
/// GET /api/players/form
pub async fn registration_form(
    State(state): State<AppState>,
    _auth: JwtAuth,
) -> Result<Json<PlayerFormResponse>, ApiError> {
    let teams = state.roster.roster_form().await?;

    Ok(Json(PlayerFormResponse {
        teams: teams.iter().map(TeamResponse::from).collect(),
        capacity: ROSTER_CAPACITY,
    }))
}

/// Register a player on a team
///
/// POST /api/players
pub async fn create_player(
    State(state): State<AppState>,
    _auth: JwtAuth,
    payload: Result<Json<CreatePlayerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PlayerResponse>), ApiError> {
    let Json(req) = payload?;
    let input = PlayerInput::from(req);
    let player = state.roster.create_player(&input).await?;

    Ok((StatusCode::CREATED, Json(PlayerResponse::from(&player))))
}

/// Players grouped by team
///
/// GET /api/players
pub async fn list_players(
    State(state): State<AppState>,
    _auth: JwtAuth,
) -> Result<Json<Vec<TeamGroupResponse>>, ApiError> {
    let grouped = state.roster.grouped_players().await?;

    Ok(Json(grouped.iter().map(TeamGroupResponse::from).collect()))
}
