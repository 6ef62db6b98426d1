// Infrastructure layer module
// Storage adapters for the roster repositories
// Follows Hexagonal Architecture

pub mod database;
pub mod repositories;
