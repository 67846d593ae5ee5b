//! Registration entity.

use serde::Serialize;

use super::{TournamentSummary, User};

/// A user's entry in a tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub id: i64,
    pub outcome: Option<String>,
    pub user: User,
    pub tournament: TournamentSummary,
}

impl Registration {
    /// Returns true once the tournament recorded a result for this entry.
    pub fn is_settled(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Input data for registering a user to a tournament.
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub user: User,
    pub tournament: TournamentSummary,
    pub outcome: Option<String>,
}
