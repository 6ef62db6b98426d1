// Domain layer module exports
// Teams, players and the roster rules that bind them together
// Domain is independent of infrastructure concerns

pub mod errors;
pub mod player;
pub mod repositories;
pub mod roster;
pub mod team;
pub mod validation;

pub use errors::{RosterError, RosterResult};
