//! Application layer: aggregation and the services built on it.
//!
//! # Available Services
//!
//! - [`services::GameService`] - game catalogue and modes
//! - [`services::TournamentService`] - tournaments with game and admin
//! - [`services::RegistrationService`] - registrations with user and tournament
//! - [`services::UserService`] - public user profiles
//! - [`services::AccountService`] - signed-in account and profile picture
//!
//! Raw payloads are turned into entities by an [`mapping::EntityMapper`].

pub mod mapping;
pub mod services;
