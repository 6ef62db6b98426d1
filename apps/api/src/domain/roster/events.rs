use std::fmt;

use crate::domain::player::{Player, PlayerId};
use crate::domain::team::{Team, TeamId};

/// Domain events raised when the roster changes
///
/// Teams and players are never updated or removed, so registration is the
/// only thing that happens to a roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterEvent {
    /// Fired when a team is stored
    TeamRegistered { team_id: TeamId, name: String },
    /// Fired when a player is stored
    PlayerRegistered {
        player_id: PlayerId,
        team_id: TeamId,
        /// Players on the team after this registration
        roster_size: usize,
    },
}

impl RosterEvent {
    pub fn team_registered(team: &Team) -> Self {
        Self::TeamRegistered {
            team_id: team.id(),
            name: team.name().to_string(),
        }
    }

    pub fn player_registered(player: &Player, roster_size: usize) -> Self {
        Self::PlayerRegistered {
            player_id: player.id(),
            team_id: player.team_id(),
            roster_size,
        }
    }

    /// Returns the team this event concerns
    pub fn team_id(&self) -> TeamId {
        match self {
            RosterEvent::TeamRegistered { team_id, .. } => *team_id,
            RosterEvent::PlayerRegistered { team_id, .. } => *team_id,
        }
    }
}

impl fmt::Display for RosterEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterEvent::TeamRegistered { team_id, name } => {
                write!(f, "team {} registered as {:?}", team_id, name)
            }
            RosterEvent::PlayerRegistered {
                player_id,
                team_id,
                roster_size,
            } => write!(
                f,
                "player {} registered on team {} ({}/{})",
                player_id,
                team_id,
                roster_size,
                super::ROSTER_CAPACITY
            ),
        }
    }
}
