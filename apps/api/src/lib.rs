//! Roster API Library
//!
//! Team and player registration with a six-player roster cap, plus the
//! grouped-by-team view. Includes domain logic, storage adapters and the
//! HTTP layer.

pub mod api;
pub mod application;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
