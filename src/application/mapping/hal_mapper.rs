//! Serde-backed mapper for the HAL payloads the Arena API emits.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::dto::{GameDto, ModeDto, RegistrationDto, TournamentDto, UserDto};
use super::{EntityMapper, RegistrationParts, TournamentParts};
use crate::domain::entities::{Game, Mode, Registration, Tournament, TournamentSummary, User};
use crate::domain::raw::{RawResource, ResourceKind};
use crate::error::AppError;

/// Default [`EntityMapper`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HalMapper;

impl HalMapper {
    /// Creates a new HAL mapper.
    pub fn new() -> Self {
        Self
    }
}

impl EntityMapper for HalMapper {
    fn game(&self, raw: RawResource) -> Result<Game, AppError> {
        let dto: GameDto = decode(raw, ResourceKind::Game)?;
        Ok(Game::new(dto.game_name, dto.available_modes, dto.image, dto.icon))
    }

    fn mode(&self, raw: RawResource) -> Result<Mode, AppError> {
        let dto: ModeDto = decode(raw, ResourceKind::Mode)?;
        Ok(Mode::new(dto.mode_name))
    }

    fn user(&self, raw: RawResource) -> Result<User, AppError> {
        let id = text_id(&raw)?;
        let dto: UserDto = decode(raw, ResourceKind::User)?;
        Ok(User::new(
            id,
            dto.email,
            dto.nickname,
            dto.image,
            dto.is_subscriber,
        ))
    }

    fn tournament(&self, (tournament, game, admin): TournamentParts) -> Result<Tournament, AppError> {
        let summary = self.summary(tournament, game)?;
        Ok(Tournament {
            id: summary.id,
            title: summary.title,
            description: summary.description,
            mode: summary.mode,
            players_number: summary.players_number,
            game: summary.game,
            admin: self.user(admin)?,
        })
    }

    fn registration(
        &self,
        (registration, tournament, game, user): RegistrationParts,
    ) -> Result<Registration, AppError> {
        let id = registration.numeric_id(ResourceKind::Registration)?;
        let dto: RegistrationDto = decode(registration, ResourceKind::Registration)?;
        Ok(Registration {
            id,
            outcome: dto.outcome,
            tournament: self.summary(tournament, game)?,
            user: self.user(user)?,
        })
    }
}

impl HalMapper {
    fn summary(&self, tournament: RawResource, game: RawResource) -> Result<TournamentSummary, AppError> {
        let id = tournament.numeric_id(ResourceKind::Tournament)?;
        let dto: TournamentDto = decode(tournament, ResourceKind::Tournament)?;
        Ok(TournamentSummary {
            id,
            title: dto.title,
            description: dto.tournament_description,
            mode: dto.tournament_mode,
            players_number: dto.players_number,
            game: self.game(game)?,
        })
    }
}

fn decode<T: DeserializeOwned>(raw: RawResource, kind: ResourceKind) -> Result<T, AppError> {
    serde_json::from_value(raw.into_value()).map_err(|e| AppError::decode(kind.name(), e.to_string()))
}

/// User ids are opaque strings; numeric ids and self links are accepted too.
fn text_id(raw: &RawResource) -> Result<String, AppError> {
    match raw.get("id") {
        Some(Value::String(id)) => return Ok(id.clone()),
        Some(Value::Number(id)) => return Ok(id.to_string()),
        Some(other) => return Err(AppError::decode("user", format!("invalid id {other}"))),
        None => {}
    }

    raw.self_href()
        .and_then(|href| href.split('?').next())
        .and_then(|path| path.trim_end_matches('/').rsplit('/').next())
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| AppError::decode("user", "resource carries no id"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::mapping::TournamentBody;
    use crate::domain::entities::NewTournament;
    use serde_json::json;

    fn raw(value: Value) -> RawResource {
        RawResource::from_value(value).unwrap()
    }

    fn game_json() -> RawResource {
        raw(json!({
            "gameName": "Chess",
            "availableModes": ["1v1"],
            "image": "chess.png",
            "icon": "chess-icon.png",
            "_links": { "self": { "href": "/games/Chess" } }
        }))
    }

    fn user_json(id: &str, nickname: &str) -> RawResource {
        raw(json!({
            "id": id,
            "email": format!("{nickname}@example.com"),
            "nickname": nickname,
            "isSubscriber": true
        }))
    }

    fn tournament_json() -> RawResource {
        raw(json!({
            "title": "Spring Cup",
            "tournamentDescription": "Open bracket",
            "tournamentMode": "1v1",
            "playersNumber": 16,
            "_links": {
                "self": { "href": "/tournaments/2" },
                "game": { "href": "/games/Chess" },
                "admin": { "href": "/users/9" }
            }
        }))
    }

    #[test]
    fn test_map_game() {
        let game = HalMapper.game(game_json()).unwrap();
        assert_eq!(game.name, "Chess");
        assert_eq!(game.available_modes, vec!["1v1".to_string()]);
        assert_eq!(game.icon, "chess-icon.png");
    }

    #[test]
    fn test_map_mode() {
        let mode = HalMapper.mode(raw(json!({ "modeName": "3v3" }))).unwrap();
        assert_eq!(mode.name, "3v3");
    }

    #[test]
    fn test_map_user_with_id_from_self_link() {
        let user = HalMapper
            .user(raw(json!({
                "email": "ada@example.com",
                "nickname": "ada",
                "_links": { "self": { "href": "http://api.test/users/uid-3" } }
            })))
            .unwrap();

        assert_eq!(user.id, "uid-3");
        assert!(!user.is_subscriber);
        assert!(user.image.is_none());
    }

    #[test]
    fn test_map_user_id_from_self_link_ignores_query() {
        let user = HalMapper
            .user(raw(json!({
                "email": "ada@example.com",
                "nickname": "ada",
                "_links": { "self": { "href": "/users/uid-3?projection=full" } }
            })))
            .unwrap();

        assert_eq!(user.id, "uid-3");
    }

    #[test]
    fn test_map_tournament_positional_parts() {
        let tournament = HalMapper
            .tournament((tournament_json(), game_json(), user_json("9", "root")))
            .unwrap();

        assert_eq!(tournament.id, 2);
        assert_eq!(tournament.title, "Spring Cup");
        assert_eq!(tournament.players_number, 16);
        assert_eq!(tournament.game.name, "Chess");
        assert_eq!(tournament.admin.id, "9");
        assert!(tournament.admin.is_subscriber);
    }

    #[test]
    fn test_map_registration() {
        let registration = HalMapper
            .registration((
                raw(json!({ "id": 7, "outcome": "winner" })),
                tournament_json(),
                game_json(),
                user_json("3", "ada"),
            ))
            .unwrap();

        assert_eq!(registration.id, 7);
        assert_eq!(registration.outcome.as_deref(), Some("winner"));
        assert_eq!(registration.tournament.id, 2);
        assert_eq!(registration.tournament.game.name, "Chess");
        assert_eq!(registration.user.nickname, "ada");
    }

    #[test]
    fn test_missing_field_is_decode_error() {
        let err = HalMapper
            .game(raw(json!({ "availableModes": [] })))
            .unwrap_err();
        assert!(matches!(err, AppError::Decode { entity: "game", .. }));
    }

    #[test]
    fn test_swapped_parts_fail_to_decode() {
        let err = HalMapper
            .tournament((game_json(), tournament_json(), user_json("9", "root")))
            .unwrap_err();
        assert!(matches!(err, AppError::Decode { .. }));
    }

    #[test]
    fn test_tournament_body_links_associations() {
        let body = TournamentBody::from(NewTournament {
            players_number: 8,
            title: "Cup".to_string(),
            description: "desc".to_string(),
            mode: "1v1".to_string(),
            admin: HalMapper.user(user_json("9", "root")).unwrap(),
            game: HalMapper.game(game_json()).unwrap(),
        });

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["admin"], "/users/9");
        assert_eq!(json["game"], "/games/Chess");
        assert_eq!(json["tournamentDescription"], "desc");
        assert_eq!(json["playersNumber"], 8);
    }
}
