//! Projection of joined raw resources onto typed entities.
//!
//! The aggregator hands a mapper the parts of a join as a tuple in a fixed
//! order, primary resource first:
//!
//! - tournament: `(tournament, game, admin)`
//! - registration: `(registration, tournament, game, user)`
//!
//! Mappers are pure: no I/O, no state.

mod dto;
mod hal_mapper;

pub use dto::{GameBody, ModeBody, RegistrationBody, TournamentBody};
pub use hal_mapper::HalMapper;

use crate::domain::entities::{Game, Mode, Registration, Tournament, User};
use crate::domain::raw::RawResource;
use crate::error::AppError;

/// `(tournament, game, admin)`
pub type TournamentParts = (RawResource, RawResource, RawResource);

/// `(registration, tournament, game, user)`
pub type RegistrationParts = (RawResource, RawResource, RawResource, RawResource);

/// Maps raw API shapes to domain entities.
///
/// # Errors
///
/// Every method returns [`AppError::Decode`] when a part lacks a required
/// field or carries a value of the wrong type.
#[cfg_attr(test, mockall::automock)]
pub trait EntityMapper: Send + Sync {
    fn game(&self, raw: RawResource) -> Result<Game, AppError>;

    fn mode(&self, raw: RawResource) -> Result<Mode, AppError>;

    fn user(&self, raw: RawResource) -> Result<User, AppError>;

    fn tournament(&self, parts: TournamentParts) -> Result<Tournament, AppError>;

    fn registration(&self, parts: RegistrationParts) -> Result<Registration, AppError>;
}
