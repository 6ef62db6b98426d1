//! Roster service scenarios on the in-memory backend
//!
//! These tests verify:
//! - Team registration and listing
//! - The six-player roster cap
//! - Validation leaving the store untouched
//! - The grouped-by-team view, including orphaned players

use std::sync::Arc;

use roster_api::application::RosterService;
use roster_api::domain::player::{NewPlayer, PlayerInput};
use roster_api::domain::repositories::{PlayerRepository, TeamRepository};
use roster_api::domain::roster::{group_by_team, ROSTER_CAPACITY};
use roster_api::domain::team::{TeamId, MISSING_TEAM_NAME};
use roster_api::domain::RosterError;
use roster_api::infrastructure::repositories::{InMemoryPlayerRepository, InMemoryTeamRepository};

fn player_input(name: &str, team_id: TeamId) -> PlayerInput {
    PlayerInput {
        name: name.to_string(),
        number: "12".to_string(),
        birth_date: "1998-07-04".to_string(),
        height: "1.88".to_string(),
        gender: "female".to_string(),
        position: "outside hitter".to_string(),
        team_id: team_id.to_string(),
    }
}

#[tokio::test]
async fn test_created_team_is_listed_once_verbatim() {
    let service = RosterService::in_memory();

    let team = service
        .create_team("Eagles", "Alice", "555-0100")
        .await
        .expect("team created");

    let teams = service.list_teams().await.unwrap();
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0], team);
    assert_eq!(teams[0].name(), "Eagles");
    assert_eq!(teams[0].coach_name(), "Alice");
    assert_eq!(teams[0].coach_phone(), "555-0100");
}

#[tokio::test]
async fn test_teams_may_share_a_name() {
    let service = RosterService::in_memory();

    let first = service.create_team("Eagles", "Alice", "555-0100").await.unwrap();
    let second = service.create_team("Eagles", "Bob", "555-0101").await.unwrap();

    assert_ne!(first.id(), second.id());
    assert_eq!(service.list_teams().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_empty_store_lists_nothing() {
    let service = RosterService::in_memory();

    assert!(service.list_teams().await.unwrap().is_empty());
    assert!(service.list_players().await.unwrap().is_empty());
    assert!(service.grouped_players().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_eagles_roster_fills_at_six() {
    let service = RosterService::in_memory();
    let eagles = service.create_team("Eagles", "Alice", "555-0100").await.unwrap();

    for i in 1..=ROSTER_CAPACITY {
        let player = service
            .create_player(&player_input(&format!("Player {}", i), eagles.id()))
            .await
            .expect("player fits on roster");
        assert_eq!(player.team_id(), eagles.id());
    }

    let seventh = service
        .create_player(&player_input("Player 7", eagles.id()))
        .await;
    assert!(matches!(
        seventh,
        Err(RosterError::CapacityExceeded { team_id, capacity: 6 }) if team_id == eagles.id()
    ));

    let players = service.list_players().await.unwrap();
    let on_eagles = players.iter().filter(|p| p.team_id() == eagles.id()).count();
    assert_eq!(on_eagles, 6);
}

#[tokio::test]
async fn test_full_team_does_not_block_other_teams() {
    let service = RosterService::in_memory();
    let eagles = service.create_team("Eagles", "Alice", "555-0100").await.unwrap();
    let hawks = service.create_team("Hawks", "Carla", "555-0199").await.unwrap();

    for i in 0..ROSTER_CAPACITY {
        service
            .create_player(&player_input(&format!("E{}", i), eagles.id()))
            .await
            .unwrap();
    }

    service
        .create_player(&player_input("H1", hawks.id()))
        .await
        .expect("other team still has room");
    assert_eq!(service.player_count(hawks.id()).await.unwrap(), 1);
}

#[tokio::test]
async fn test_blank_field_creates_nothing() {
    let service = RosterService::in_memory();
    let team = service.create_team("Eagles", "Alice", "555-0100").await.unwrap();

    let mut input = player_input("Ana", team.id());
    input.position = String::new();

    let result = service.create_player(&input).await;

    assert_eq!(result, Err(RosterError::validation("position is required")));
    assert_eq!(service.player_count(team.id()).await.unwrap(), 0);
    assert!(service.list_players().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_team_is_rejected() {
    let service = RosterService::in_memory();
    service.create_team("Eagles", "Alice", "555-0100").await.unwrap();

    let result = service.create_player(&player_input("Ana", 99)).await;

    assert!(matches!(result, Err(RosterError::Validation(_))));
    assert!(service.list_players().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_concurrent_registrations_respect_cap() {
    let service = Arc::new(RosterService::in_memory());
    let team = service.create_team("Eagles", "Alice", "555-0100").await.unwrap();

    let mut handles = Vec::new();
    for i in 0..20 {
        let service = Arc::clone(&service);
        let input = player_input(&format!("Rush {}", i), team.id());
        handles.push(tokio::spawn(async move { service.create_player(&input).await }));
    }

    let mut accepted = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            accepted += 1;
        }
    }

    assert_eq!(accepted, ROSTER_CAPACITY);
    assert_eq!(service.player_count(team.id()).await.unwrap(), ROSTER_CAPACITY);
}

#[tokio::test]
async fn test_grouped_view_matches_registrations() {
    let service = RosterService::in_memory();
    let eagles = service.create_team("Eagles", "Alice", "555-0100").await.unwrap();
    let hawks = service.create_team("Hawks", "Carla", "555-0199").await.unwrap();
    service.create_team("Idle", "Dora", "555-0000").await.unwrap();

    service.create_player(&player_input("Ana", hawks.id())).await.unwrap();
    service.create_player(&player_input("Bia", eagles.id())).await.unwrap();
    service.create_player(&player_input("Caio", hawks.id())).await.unwrap();

    let grouped = service.grouped_players().await.unwrap();

    assert_eq!(grouped.len(), 2);
    let order: Vec<&str> = grouped.iter().map(|g| g.team.name()).collect();
    assert_eq!(order, vec!["Hawks", "Eagles"]);
    assert_eq!(grouped.get(hawks.id()).unwrap().players.len(), 2);
    assert_eq!(grouped.orphans().count(), 0);

    let again = service.grouped_players().await.unwrap();
    assert_eq!(grouped, again);
}

#[tokio::test]
async fn test_orphaned_player_surfaces_under_placeholder() {
    // Players stored directly, bypassing the service's team check
    let teams = InMemoryTeamRepository::new();
    let players = InMemoryPlayerRepository::new();
    let today = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let draft = NewPlayer::parse(&player_input("Lost", 99), today).unwrap();
    players.insert(draft).await.unwrap();

    let grouped = group_by_team(&teams.list().await.unwrap(), &players.list().await.unwrap());

    assert_eq!(grouped.len(), 1);
    let group = grouped.get(99).expect("group keyed by missing team id");
    assert!(group.orphaned);
    assert_eq!(group.team.name(), MISSING_TEAM_NAME);
    assert_eq!(group.players.len(), 1);
    assert_eq!(group.players[0].name(), "Lost");
}
