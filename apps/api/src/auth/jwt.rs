// JWT token creation and verification
// Handles administrator tokens with 8-hour expiry

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::{AuthError, AuthResult};

/// JWT claims structure
///
/// # Fields
/// * `sub` - Subject (administrator username)
/// * `exp` - Expiry time (seconds since epoch)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

/// How long an issued token stays valid
pub const TOKEN_TTL_HOURS: i64 = 8;

/// Creates a signed token for the given username
///
/// # Example
/// ```
/// use roster_api::auth::jwt::{create_token, verify_token};
///
/// let token = create_token("admin", "secret").expect("valid token");
/// let claims = verify_token(&token, "secret").expect("valid token");
/// assert_eq!(claims.sub, "admin");
/// ```
pub fn create_token(username: &str, secret: &str) -> AuthResult<String> {
    let expiry = Utc::now() + Duration::hours(TOKEN_TTL_HOURS);
    let claims = Claims {
        sub: username.to_string(),
        exp: expiry.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| AuthError::TokenCreation(e.to_string()))
}

/// Verifies and decodes a token, rejecting bad signatures and expired tokens
pub fn verify_token(token: &str, secret: &str) -> AuthResult<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AuthError::InvalidToken(e.to_string()))
}
