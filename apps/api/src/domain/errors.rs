use thiserror::Error;

use crate::domain::team::TeamId;

/// Errors raised while registering or reading roster records
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// A required field is missing or malformed, or a reference points nowhere
    #[error("{0}")]
    Validation(String),

    #[error("team {team_id} already has {capacity} players")]
    CapacityExceeded { team_id: TeamId, capacity: usize },

    /// The backing store failed
    #[error("storage error: {0}")]
    Storage(String),
}

impl RosterError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}

impl From<sqlx::Error> for RosterError {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

pub type RosterResult<T> = Result<T, RosterError>;
