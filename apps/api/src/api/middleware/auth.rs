use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::auth::jwt::verify_token;

/// JWT authentication extractor for protected routes
///
/// Holds the username from the token's `sub` claim.
///
/// Usage:
/// ```rust,ignore
/// async fn protected_handler(
///     JwtAuth(username): JwtAuth,
/// ) -> Result<String, ApiError> {
///     Ok(format!("Hello {}", username))
/// }
/// ```
pub struct JwtAuth(pub String);

#[async_trait]
impl FromRequestParts<AppState> for JwtAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Extract the authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Missing authorization header"))?;

        // Extract bearer token
        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            ApiError::unauthorized("Invalid authorization format. Use: Bearer <token>")
        })?;

        let claims = verify_token(token, &state.jwt_secret)?;

        if claims.sub != state.admin.username() {
            return Err(ApiError::unauthorized("Unknown account"));
        }

        Ok(JwtAuth(claims.sub))
    }
}
