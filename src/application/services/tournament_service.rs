//! Tournament service.

use std::sync::Arc;

use tracing::debug;

use super::aggregator::Aggregator;
use super::resource_fetcher::PageQuery;
use crate::application::mapping::{EntityMapper, TournamentBody};
use crate::domain::entities::{NewTournament, Page, Tournament};
use crate::domain::raw::ResourceKind;
use crate::domain::repositories::Transport;
use crate::error::AppError;

/// Service returning fully hydrated tournaments.
///
/// Every tournament comes back with its game and administrator resolved.
/// Listings aggregate their items concurrently and fail as a whole.
pub struct TournamentService<T: Transport, M: EntityMapper> {
    aggregator: Arc<Aggregator<T, M>>,
}

impl<T: Transport, M: EntityMapper> TournamentService<T, M> {
    /// Creates a new tournament service.
    pub fn new(aggregator: Arc<Aggregator<T, M>>) -> Self {
        Self { aggregator }
    }

    /// Retrieves a tournament with its game and admin.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the tournament or one of its
    /// relations does not exist.
    /// Returns [`AppError::MissingLink`] if the API omitted a required link.
    pub async fn get_tournament_by_id(&self, id: i64) -> Result<Tournament, AppError> {
        self.aggregator.tournament(id).await
    }

    /// Creates a tournament, then reads it back fully aggregated.
    ///
    /// The created representation only carries links, so the tournament is
    /// fetched again by the id the API assigned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Decode`] if the created representation has no id,
    /// otherwise see [`Self::get_tournament_by_id`].
    pub async fn create_tournament(&self, tournament: NewTournament) -> Result<Tournament, AppError> {
        let body = TournamentBody::from(tournament);
        let created = self
            .aggregator
            .fetcher()
            .create_from(ResourceKind::Tournament, &body)
            .await?;

        let id = created.numeric_id(ResourceKind::Tournament)?;
        debug!(id, "tournament created");
        self.aggregator.tournament(id).await
    }

    /// Tournaments featured on the landing page.
    pub async fn get_showcase_tournaments(&self, page: u32) -> Result<Page<Tournament>, AppError> {
        self.tournaments(PageQuery::search("showcase", page)).await
    }

    pub async fn get_tournaments_by_game(
        &self,
        game_name: &str,
        page: u32,
    ) -> Result<Page<Tournament>, AppError> {
        self.tournaments(PageQuery::search("byGame", page).param("gameName", game_name))
            .await
    }

    pub async fn get_tournaments_by_mode(
        &self,
        mode: &str,
        page: u32,
    ) -> Result<Page<Tournament>, AppError> {
        self.tournaments(PageQuery::search("byMode", page).param("mode", mode))
            .await
    }

    /// Tournaments administered by `user_id`.
    pub async fn get_tournaments_by_user(
        &self,
        user_id: &str,
        page: u32,
    ) -> Result<Page<Tournament>, AppError> {
        self.tournaments(PageQuery::search("byAdmin", page).param("userId", user_id))
            .await
    }

    pub async fn get_tournaments_containing_title(
        &self,
        title: &str,
        page: u32,
    ) -> Result<Page<Tournament>, AppError> {
        self.tournaments(PageQuery::search("containingTitle", page).param("title", title))
            .await
    }

    /// Filters tournaments by title, optionally restricted to one game.
    pub async fn search_tournaments(
        &self,
        title: &str,
        page: u32,
        game_id: Option<&str>,
    ) -> Result<Page<Tournament>, AppError> {
        let query = PageQuery::search("filter", page)
            .param("title", title)
            .optional_param("gameId", game_id.map(str::to_owned));
        self.tournaments(query).await
    }

    async fn tournaments(&self, query: PageQuery) -> Result<Page<Tournament>, AppError> {
        let raw = self
            .aggregator
            .fetcher()
            .fetch_page(ResourceKind::Tournament, &query)
            .await?;
        self.aggregator.tournament_page(raw).await
    }
}
