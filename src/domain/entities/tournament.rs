//! Tournament entities.

use serde::Serialize;

use super::{Game, User};
use crate::domain::paths::resource_path;

/// A fully hydrated tournament: its game and its administrator included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tournament {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub mode: String,
    pub players_number: u32,
    pub game: Game,
    pub admin: User,
}

impl Tournament {
    /// Drops the administrator, keeping what a registration shows.
    pub fn summary(&self) -> TournamentSummary {
        TournamentSummary {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            mode: self.mode.clone(),
            players_number: self.players_number,
            game: self.game.clone(),
        }
    }
}

/// A tournament as seen from a registration.
///
/// The registration join resolves the tournament's game but not its admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TournamentSummary {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub mode: String,
    pub players_number: u32,
    pub game: Game,
}

impl TournamentSummary {
    pub fn resource_path(&self) -> String {
        resource_path("tournaments", &self.id.to_string())
    }
}

/// Input data for creating a new tournament.
#[derive(Debug, Clone)]
pub struct NewTournament {
    pub players_number: u32,
    pub title: String,
    pub description: String,
    pub mode: String,
    pub admin: User,
    pub game: Game,
}
