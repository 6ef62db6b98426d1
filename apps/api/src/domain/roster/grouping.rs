use std::collections::HashMap;

use crate::domain::player::Player;
use crate::domain::team::{Team, TeamId};

/// The players of one team, as shown in the grouped view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamGroup {
    pub team: Team,
    pub players: Vec<Player>,
    /// Set when no stored team matched and `team` is a placeholder
    pub orphaned: bool,
}

/// Players grouped by owning team, in the order each team id was first seen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedRoster {
    groups: Vec<TeamGroup>,
    index: HashMap<TeamId, usize>,
}

impl GroupedRoster {
    pub fn get(&self, team_id: TeamId) -> Option<&TeamGroup> {
        self.index.get(&team_id).map(|&i| &self.groups[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &TeamGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups whose team could not be found
    pub fn orphans(&self) -> impl Iterator<Item = &TeamGroup> {
        self.groups.iter().filter(|g| g.orphaned)
    }
}

/// Groups players under their teams for display
///
/// Teams without players are left out. A player whose team id matches no
/// team is kept under a placeholder team named
/// [`MISSING_TEAM_NAME`](crate::domain::team::MISSING_TEAM_NAME), never
/// dropped.
///
/// # Example
/// ```
/// use roster_api::domain::roster::group_by_team;
///
/// let grouped = group_by_team(&[], &[]);
/// assert!(grouped.is_empty());
/// ```
pub fn group_by_team(teams: &[Team], players: &[Player]) -> GroupedRoster {
    let lookup: HashMap<TeamId, &Team> = teams.iter().map(|t| (t.id(), t)).collect();
    let mut grouped = GroupedRoster::default();

    for player in players {
        let team_id = player.team_id();
        let existing = grouped.index.get(&team_id).copied();
        let slot = match existing {
            Some(slot) => slot,
            None => {
                let (team, orphaned) = match lookup.get(&team_id) {
                    Some(team) => ((*team).clone(), false),
                    None => (Team::placeholder(team_id), true),
                };
                grouped.groups.push(TeamGroup {
                    team,
                    players: Vec::new(),
                    orphaned,
                });
                let slot = grouped.groups.len() - 1;
                grouped.index.insert(team_id, slot);
                slot
            }
        };
        grouped.groups[slot].players.push(player.clone());
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::{NewPlayer, PlayerInput};
    use crate::domain::team::{NewTeam, MISSING_TEAM_NAME};
    use chrono::{NaiveDate, Utc};

    fn team(id: TeamId, name: &str) -> Team {
        NewTeam::new(name, "Coach", "555-0100")
            .unwrap()
            .into_team(id, Utc::now())
    }

    fn player(id: i64, name: &str, team_id: TeamId) -> Player {
        let input = PlayerInput {
            name: name.to_string(),
            number: "7".to_string(),
            birth_date: "2000-01-01".to_string(),
            height: "1.80".to_string(),
            gender: "female".to_string(),
            position: "libero".to_string(),
            team_id: team_id.to_string(),
        };
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        NewPlayer::parse(&input, today)
            .unwrap()
            .into_player(id, Utc::now())
    }

    #[test]
    fn empty_inputs_give_empty_view() {
        let grouped = group_by_team(&[], &[]);
        assert!(grouped.is_empty());
    }

    #[test]
    fn teams_without_players_are_left_out() {
        let grouped = group_by_team(&[team(1, "Eagles")], &[]);
        assert_eq!(grouped.len(), 0);
    }

    #[test]
    fn players_grouped_in_first_seen_order() {
        let teams = vec![team(1, "Eagles"), team(2, "Hawks")];
        let players = vec![
            player(1, "Ana", 2),
            player(2, "Bia", 1),
            player(3, "Caio", 2),
        ];

        let grouped = group_by_team(&teams, &players);

        let order: Vec<TeamId> = grouped.iter().map(|g| g.team.id()).collect();
        assert_eq!(order, vec![2, 1]);

        let hawks = grouped.get(2).unwrap();
        assert_eq!(hawks.team.name(), "Hawks");
        assert!(!hawks.orphaned);
        let names: Vec<&str> = hawks.players.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Ana", "Caio"]);

        assert_eq!(grouped.get(1).unwrap().players.len(), 1);
    }

    #[test]
    fn orphaned_player_gets_placeholder_team() {
        let grouped = group_by_team(&[], &[player(1, "Ana", 99)]);

        assert_eq!(grouped.len(), 1);
        let group = grouped.get(99).unwrap();
        assert!(group.orphaned);
        assert_eq!(group.team.id(), 99);
        assert_eq!(group.team.name(), MISSING_TEAM_NAME);
        assert_eq!(group.players.len(), 1);
        assert_eq!(group.players[0].name(), "Ana");
        assert_eq!(grouped.orphans().count(), 1);
    }

    #[test]
    fn grouping_is_repeatable() {
        let teams = vec![team(1, "Eagles")];
        let players = vec![player(1, "Ana", 1), player(2, "Bia", 5)];

        let first = group_by_team(&teams, &players);
        let second = group_by_team(&teams, &players);

        assert_eq!(first, second);
        assert_eq!(teams.len(), 1);
        assert_eq!(players.len(), 2);
    }
}
