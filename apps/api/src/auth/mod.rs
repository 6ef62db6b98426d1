// Authentication for the single administrator account

pub mod admin;
pub mod jwt;

use thiserror::Error;

/// Errors raised while logging in or checking a token
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    #[error("token creation failed: {0}")]
    TokenCreation(String),
}

pub type AuthResult<T> = Result<T, AuthError>;
