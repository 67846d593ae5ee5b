//! Wire shapes of the Arena API.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewGame, NewRegistration, NewTournament};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GameDto {
    pub game_name: String,
    #[serde(default)]
    pub available_modes: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ModeDto {
    pub mode_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UserDto {
    pub email: String,
    pub nickname: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_subscriber: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct TournamentDto {
    pub title: String,
    #[serde(default)]
    pub tournament_description: String,
    pub tournament_mode: String,
    pub players_number: u32,
}

#[derive(Debug, Deserialize)]
pub(super) struct RegistrationDto {
    #[serde(default)]
    pub outcome: Option<String>,
}

/// Body of `POST /games`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameBody {
    pub game_name: String,
    pub available_modes: Vec<String>,
    pub image: String,
    pub icon: String,
}

impl From<NewGame> for GameBody {
    fn from(game: NewGame) -> Self {
        Self {
            game_name: game.name,
            available_modes: game.available_modes,
            image: game.image,
            icon: game.icon,
        }
    }
}

/// Body of `POST /modes`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeBody {
    pub mode_name: String,
}

/// Body of `POST /tournaments`. Associations are sent as resource paths.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentBody {
    pub players_number: u32,
    pub title: String,
    pub tournament_description: String,
    pub tournament_mode: String,
    pub admin: String,
    pub game: String,
}

impl From<NewTournament> for TournamentBody {
    fn from(tournament: NewTournament) -> Self {
        Self {
            admin: tournament.admin.resource_path(),
            game: tournament.game.resource_path(),
            players_number: tournament.players_number,
            title: tournament.title,
            tournament_description: tournament.description,
            tournament_mode: tournament.mode,
        }
    }
}

/// Body of `POST /registrations`. Associations are sent as resource paths.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrationBody {
    pub user: String,
    pub tournament: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
}

impl From<NewRegistration> for RegistrationBody {
    fn from(registration: NewRegistration) -> Self {
        Self {
            user: registration.user.resource_path(),
            tournament: registration.tournament.resource_path(),
            outcome: registration.outcome,
        }
    }
}
