use chrono::{DateTime, Utc};

use crate::domain::errors::RosterResult;
use crate::domain::validation::required_text;

/// Store-assigned team identifier, counting up from 1
pub type TeamId = i64;

/// Name carried by the stand-in team used for players whose team is unknown
pub const MISSING_TEAM_NAME: &str = "team not found";

/// A validated team registration that has not been stored yet
///
/// # Invariants
/// - Name, coach name and coach phone are all non-blank
///
/// # Example
/// ```
/// use roster_api::domain::team::NewTeam;
///
/// let draft = NewTeam::new("Eagles", "Alice", "555-0100").expect("valid team");
/// assert_eq!(draft.name(), "Eagles");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeam {
    name: String,
    coach_name: String,
    coach_phone: String,
}

impl NewTeam {
    /// Validates the registration fields
    ///
    /// # Returns
    /// * `Ok(NewTeam)` - If every field carries a value
    /// * `Err(RosterError::Validation)` - Naming the first blank field
    pub fn new(
        name: impl AsRef<str>,
        coach_name: impl AsRef<str>,
        coach_phone: impl AsRef<str>,
    ) -> RosterResult<Self> {
        Ok(Self {
            name: required_text("name", name.as_ref())?,
            coach_name: required_text("coach_name", coach_name.as_ref())?,
            coach_phone: required_text("coach_phone", coach_phone.as_ref())?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coach_name(&self) -> &str {
        &self.coach_name
    }

    pub fn coach_phone(&self) -> &str {
        &self.coach_phone
    }

    /// Turns the draft into a stored team once the repository has
    /// assigned its identifier
    pub fn into_team(self, id: TeamId, created_at: DateTime<Utc>) -> Team {
        Team {
            id,
            name: self.name,
            coach_name: self.coach_name,
            coach_phone: self.coach_phone,
            created_at,
        }
    }
}

/// A registered team
///
/// Teams are immutable once stored. Multiple teams may share a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: TeamId,
    name: String,
    coach_name: String,
    coach_phone: String,
    created_at: DateTime<Utc>,
}

impl Team {
    /// Builds the stand-in team shown for players whose team id matches
    /// no stored team
    pub fn placeholder(id: TeamId) -> Self {
        Self {
            id,
            name: MISSING_TEAM_NAME.to_string(),
            coach_name: String::new(),
            coach_phone: String::new(),
            created_at: DateTime::<Utc>::default(),
        }
    }

    // ===== Getters =====

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coach_name(&self) -> &str {
        &self.coach_name
    }

    pub fn coach_phone(&self) -> &str {
        &self.coach_phone
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// Skips validation since stored rows were validated on the way in.
    /// Only to be used by repository implementations.
    pub fn from_persistence(
        id: TeamId,
        name: String,
        coach_name: String,
        coach_phone: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            coach_name,
            coach_phone,
            created_at,
        }
    }
}
