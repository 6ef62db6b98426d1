// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod memory_player_repository;
pub mod memory_team_repository;
pub mod postgres_player_repository;
pub mod postgres_team_repository;

pub use memory_player_repository::InMemoryPlayerRepository;
pub use memory_team_repository::InMemoryTeamRepository;
pub use postgres_player_repository::PostgresPlayerRepository;
pub use postgres_team_repository::PostgresTeamRepository;
