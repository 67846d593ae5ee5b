//! Game catalogue service.

use std::sync::Arc;

use super::aggregator::Aggregator;
use super::resource_fetcher::PageQuery;
use crate::application::mapping::{EntityMapper, GameBody, ModeBody};
use crate::domain::entities::{Game, Mode, NewGame, Page};
use crate::domain::raw::ResourceKind;
use crate::domain::repositories::Transport;
use crate::error::AppError;

/// Service for browsing and extending the game catalogue.
///
/// Games carry no relations, so every operation is a single fetch followed by
/// mapping.
pub struct GameService<T: Transport, M: EntityMapper> {
    aggregator: Arc<Aggregator<T, M>>,
}

impl<T: Transport, M: EntityMapper> GameService<T, M> {
    /// Creates a new game service.
    pub fn new(aggregator: Arc<Aggregator<T, M>>) -> Self {
        Self { aggregator }
    }

    /// Creates a game and returns it as the API stored it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Transport`] if the API rejects the game.
    /// Returns [`AppError::Decode`] if the created representation is malformed.
    pub async fn create_game(&self, game: NewGame) -> Result<Game, AppError> {
        let body = GameBody::from(game);
        let created = self
            .aggregator
            .fetcher()
            .create_from(ResourceKind::Game, &body)
            .await?;
        self.aggregator.game_from(created)
    }

    /// Creates a game mode.
    ///
    /// # Errors
    ///
    /// See [`Self::create_game`].
    pub async fn create_game_mode(&self, name: String) -> Result<Mode, AppError> {
        let body = ModeBody { mode_name: name };
        let created = self
            .aggregator
            .fetcher()
            .create_from(ResourceKind::Mode, &body)
            .await?;
        self.aggregator.mode_from(created)
    }

    pub async fn get_all_games(&self, page: u32) -> Result<Page<Game>, AppError> {
        self.games(PageQuery::all(page)).await
    }

    /// Retrieves a game by its name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no game has that name.
    pub async fn get_game_by_name(&self, name: &str) -> Result<Game, AppError> {
        self.aggregator.game(name).await
    }

    /// Games offering `mode`.
    pub async fn get_games_by_mode(&self, mode: &str, page: u32) -> Result<Page<Game>, AppError> {
        self.games(PageQuery::search("byMode", page).param("mode", mode))
            .await
    }

    /// Games whose name contains `name`.
    pub async fn get_games_containing_name(
        &self,
        name: &str,
        page: u32,
    ) -> Result<Page<Game>, AppError> {
        self.games(PageQuery::search("containingName", page).param("name", name))
            .await
    }

    /// Games matched by the API's name search.
    pub async fn search_games_by_name(&self, name: &str, page: u32) -> Result<Page<Game>, AppError> {
        self.games(PageQuery::search("byName", page).param("name", name))
            .await
    }

    async fn games(&self, query: PageQuery) -> Result<Page<Game>, AppError> {
        let raw = self
            .aggregator
            .fetcher()
            .fetch_page(ResourceKind::Game, &query)
            .await?;
        self.aggregator.game_page(raw).await
    }
}
