// Application services
// Orchestrate domain rules over the repository ports

pub mod roster_service;

pub use roster_service::RosterService;
