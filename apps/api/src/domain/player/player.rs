use chrono::{DateTime, NaiveDate, Utc};

use super::value_objects::{Height, JerseyNumber};
use crate::domain::errors::{RosterError, RosterResult};
use crate::domain::team::TeamId;
use crate::domain::validation::required_text;

/// Store-assigned player identifier, counting up from 1
pub type PlayerId = i64;

/// Raw player registration fields as typed into the form
///
/// Every field is text so that a missing or malformed value is reported as
/// a roster validation error rather than a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub name: String,
    pub number: String,
    pub birth_date: String,
    pub height: String,
    pub gender: String,
    pub position: String,
    pub team_id: String,
}

/// A validated player registration that has not been stored yet
///
/// Team existence and roster capacity are checked by the roster service,
/// since both depend on what is already stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayer {
    name: String,
    number: JerseyNumber,
    birth_date: NaiveDate,
    height: Height,
    gender: String,
    position: String,
    team_id: TeamId,
}

impl NewPlayer {
    /// Validates and parses the registration fields
    ///
    /// # Arguments
    /// * `input` - Raw form fields
    /// * `today` - Reference date; birth dates after it are rejected
    ///
    /// # Business Rules Enforced
    /// - Every field is required
    /// - Number is a whole number between 0 and 99
    /// - Birth date is `YYYY-MM-DD` and not in the future
    /// - Height is a positive number of metres
    /// - Team id is a positive integer
    pub fn parse(input: &PlayerInput, today: NaiveDate) -> RosterResult<Self> {
        let name = required_text("name", &input.name)?;
        let number = JerseyNumber::parse(&required_text("number", &input.number)?)?;
        let birth_date = parse_birth_date(&required_text("birth_date", &input.birth_date)?, today)?;
        let height = Height::parse(&required_text("height", &input.height)?)?;
        let gender = required_text("gender", &input.gender)?;
        let position = required_text("position", &input.position)?;
        let team_id = parse_team_id(&required_text("team_id", &input.team_id)?)?;

        Ok(Self {
            name,
            number,
            birth_date,
            height,
            gender,
            position,
            team_id,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> JerseyNumber {
        self.number
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn height(&self) -> Height {
        self.height
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn team_id(&self) -> TeamId {
        self.team_id
    }

    /// Turns the draft into a stored player once the repository has
    /// assigned its identifier
    pub fn into_player(self, id: PlayerId, created_at: DateTime<Utc>) -> Player {
        Player {
            id,
            name: self.name,
            number: self.number,
            birth_date: self.birth_date,
            height: self.height,
            gender: self.gender,
            position: self.position,
            team_id: self.team_id,
            created_at,
        }
    }
}

fn parse_birth_date(raw: &str, today: NaiveDate) -> RosterResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| RosterError::validation("birth_date must be formatted as YYYY-MM-DD"))?;
    if date > today {
        return Err(RosterError::validation("birth_date cannot be in the future"));
    }
    Ok(date)
}

fn parse_team_id(raw: &str) -> RosterResult<TeamId> {
    match raw.trim().parse::<TeamId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(RosterError::validation("team_id must be a positive integer")),
    }
}

/// A registered player, owned by exactly one team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    number: JerseyNumber,
    birth_date: NaiveDate,
    height: Height,
    gender: String,
    position: String,
    team_id: TeamId,
    created_at: DateTime<Utc>,
}

impl Player {
    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> JerseyNumber {
        self.number
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn height(&self) -> Height {
        self.height
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn team_id(&self) -> TeamId {
        self.team_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Player from persistence layer data
    ///
    /// Only to be used by repository implementations.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: PlayerId,
        name: String,
        number: JerseyNumber,
        birth_date: NaiveDate,
        height: Height,
        gender: String,
        position: String,
        team_id: TeamId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            number,
            birth_date,
            height,
            gender,
            position,
            team_id,
            created_at,
        }
    }
}
