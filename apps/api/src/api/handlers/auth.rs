use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::middleware::JwtAuth;
use crate::api::state::AppState;
use crate::auth::admin::format_access;
use crate::auth::jwt::create_token;

/// Request body for administrator login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Response from successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub last_access: String,
}

/// Response for the landing menu
#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub username: String,
    pub last_access: String,
}

/// Login with the administrator credentials
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(req) = payload?;
    let accessed_at = state.admin.login(&req.username, &req.password)?;
    let token = create_token(state.admin.username(), &state.jwt_secret)?;

    Ok(Json(LoginResponse {
        token,
        username: state.admin.username().to_string(),
        last_access: format_access(accessed_at),
    }))
}

/// Landing menu with the last access time
///
/// GET /api/menu
pub async fn menu(
    State(state): State<AppState>,
    JwtAuth(username): JwtAuth,
) -> Json<MenuResponse> {
    Json(MenuResponse {
        username,
        last_access: state.admin.last_access_display(),
    })
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
