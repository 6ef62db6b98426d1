// Player domain module
// Contains the player entity, its registration input and value objects

#![allow(clippy::module_inception)]

pub mod player;
pub mod value_objects;

pub use player::{NewPlayer, Player, PlayerId, PlayerInput};
pub use value_objects::{Height, JerseyNumber};
