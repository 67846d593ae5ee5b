//! Core domain entities.
//!
//! Entities are immutable value objects produced by a mapper from a complete
//! join of raw resources. None of them has a pending or partial state.
//!
//! # Entity Types
//!
//! - [`Game`], [`Mode`] - catalogue
//! - [`User`] - players and administrators
//! - [`Tournament`] - a tournament with its game and admin
//! - [`Registration`] - a user's entry, with the tournament and its game
//! - [`Page`] - one page of any listing
//! - [`AuthUser`], [`Claims`], [`AuthMethod`] - identity provider data
//!
//! Creation inputs follow the `NewX` naming: [`NewGame`], [`NewTournament`],
//! [`NewRegistration`].

pub mod auth;
pub mod game;
pub mod page;
pub mod registration;
pub mod tournament;
pub mod user;

pub use auth::{AuthMethod, AuthUser, Claims};
pub use game::{Game, Mode, NewGame};
pub use page::Page;
pub use registration::{NewRegistration, Registration};
pub use tournament::{NewTournament, Tournament, TournamentSummary};
pub use user::User;
