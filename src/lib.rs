//! # Arena Client
//!
//! Client for the Arena tournament API, a hypermedia (HAL) REST service.
//!
//! The API returns flat resources whose relations are links. This crate
//! follows those links and joins the results into complete entities: a
//! tournament with its game and admin, a registration with its user and its
//! tournament (itself with its game).
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, raw resources, link resolution and port traits
//! - **Application Layer** ([`application`]) - Aggregation, mapping and entity services
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest transport, identity adapters
//!
//! ## Quick Start
//!
//! ```bash
//! export ARENA_API_URL="http://localhost:8080/api"
//! cargo run -- tournament 2
//! ```
//!
//! ## Configuration
//!
//! Client configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

#[cfg(test)]
mod test_support;

pub use client::ArenaClient;
pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::mapping::{EntityMapper, HalMapper};
    pub use crate::application::services::{
        AccountService, Aggregator, GameService, RegistrationService, TournamentService,
        UserService,
    };
    pub use crate::client::ArenaClient;
    pub use crate::domain::entities::{
        Game, Mode, NewGame, NewRegistration, NewTournament, Page, Registration, Tournament,
        TournamentSummary, User,
    };
    pub use crate::domain::repositories::Transport;
    pub use crate::error::AppError;
    pub use crate::infrastructure::http::ReqwestTransport;
}
