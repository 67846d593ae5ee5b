//! Registration service.

use std::sync::Arc;

use tracing::debug;

use super::aggregator::Aggregator;
use super::resource_fetcher::PageQuery;
use crate::application::mapping::{EntityMapper, RegistrationBody};
use crate::domain::entities::{NewRegistration, Page, Registration};
use crate::domain::raw::ResourceKind;
use crate::domain::repositories::Transport;
use crate::error::AppError;

/// Service returning registrations with their user and tournament resolved.
pub struct RegistrationService<T: Transport, M: EntityMapper> {
    aggregator: Arc<Aggregator<T, M>>,
}

impl<T: Transport, M: EntityMapper> RegistrationService<T, M> {
    /// Creates a new registration service.
    pub fn new(aggregator: Arc<Aggregator<T, M>>) -> Self {
        Self { aggregator }
    }

    /// Retrieves a registration.
    ///
    /// Fetches the registration, then its user and its tournament
    /// concurrently, the tournament's game chained after the tournament.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingLink`] if any resource along the chain lacks
    /// a required link, and the first fetch error otherwise.
    pub async fn get_registration_by_id(&self, id: i64) -> Result<Registration, AppError> {
        self.aggregator.registration(id).await
    }

    /// Registers a user to a tournament, then reads the registration back.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Decode`] if the created representation has no id,
    /// otherwise see [`Self::get_registration_by_id`].
    pub async fn create_registration(
        &self,
        registration: NewRegistration,
    ) -> Result<Registration, AppError> {
        let body = RegistrationBody::from(registration);
        let created = self
            .aggregator
            .fetcher()
            .create_from(ResourceKind::Registration, &body)
            .await?;

        let id = created.numeric_id(ResourceKind::Registration)?;
        debug!(id, "registration created");
        self.aggregator.registration(id).await
    }

    pub async fn get_registrations_by_tournament(
        &self,
        tournament_id: i64,
        page: u32,
    ) -> Result<Page<Registration>, AppError> {
        let query = PageQuery::search("byTournament", page).param("tournamentId", tournament_id.to_string());
        self.registrations(query).await
    }

    pub async fn get_registrations_by_user(
        &self,
        user_id: &str,
        page: u32,
    ) -> Result<Page<Registration>, AppError> {
        self.registrations(PageQuery::search("byUser", page).param("userId", user_id))
            .await
    }

    async fn registrations(&self, query: PageQuery) -> Result<Page<Registration>, AppError> {
        let raw = self
            .aggregator
            .fetcher()
            .fetch_page(ResourceKind::Registration, &query)
            .await?;
        self.aggregator.registration_page(raw).await
    }
}
