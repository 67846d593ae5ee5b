//! Hypermedia aggregation.
//!
//! Turns a flat API resource plus its relation links into one fully hydrated
//! entity. For each composite entity the aggregator:
//!
//! 1. fetches the primary resource (or takes it pre-supplied),
//! 2. resolves every required link on it, failing before any further fetch
//!    if one is missing,
//! 3. fetches sibling relations concurrently, recursing into composite ones,
//! 4. fails as a whole on the first error, dropping the in-flight siblings,
//! 5. hands the mapper the parts in relation order, never completion order.
//!
//! Nothing is cached: every call starts from scratch.

use std::future;
use std::sync::Arc;

use futures_util::FutureExt;
use futures_util::future::{BoxFuture, try_join_all};
use tracing::debug;

use super::pagination::transform_page;
use super::resource_fetcher::ResourceFetcher;
use crate::application::mapping::EntityMapper;
use crate::domain::entities::{Game, Mode, Page, Registration, Tournament, User};
use crate::domain::links::resolve_link;
use crate::domain::raw::{RawPage, RawResource, ResourceKind};
use crate::domain::relations::{self, Relation};
use crate::domain::repositories::Transport;
use crate::error::AppError;

/// Joins raw resources into domain entities.
///
/// Collaborators are injected: the transport behind the fetcher and the
/// mapper projecting joined parts onto entities.
pub struct Aggregator<T: Transport, M: EntityMapper> {
    fetcher: ResourceFetcher<T>,
    mapper: Arc<M>,
}

impl<T: Transport, M: EntityMapper> Aggregator<T, M> {
    /// Creates a new aggregator over `transport` and `mapper`.
    pub fn new(transport: Arc<T>, mapper: Arc<M>) -> Self {
        Self {
            fetcher: ResourceFetcher::new(transport),
            mapper,
        }
    }

    pub fn fetcher(&self) -> &ResourceFetcher<T> {
        &self.fetcher
    }

    /// Aggregates tournament `id` with its game and admin.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingLink`] if the tournament lacks a `game` or
    /// `admin` link, and any fetch error unchanged.
    pub async fn tournament(&self, id: i64) -> Result<Tournament, AppError> {
        let primary = self.fetcher.fetch_tournament(id).await?;
        self.tournament_from(primary).await
    }

    /// Aggregates an already fetched tournament resource.
    ///
    /// # Errors
    ///
    /// See [`Self::tournament`].
    pub async fn tournament_from(&self, primary: RawResource) -> Result<Tournament, AppError> {
        let [tournament, game, admin] = self
            .join_exact::<3>(primary, relations::TOURNAMENT, ResourceKind::Tournament)
            .await?;
        self.mapper.tournament((tournament, game, admin))
    }

    /// Aggregates registration `id` with its user and its tournament, the
    /// tournament itself joined with its game.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingLink`] if any link along the chain is
    /// missing, and any fetch error unchanged.
    pub async fn registration(&self, id: i64) -> Result<Registration, AppError> {
        let primary = self.fetcher.fetch_registration(id).await?;
        self.registration_from(primary).await
    }

    /// Aggregates an already fetched registration resource.
    ///
    /// # Errors
    ///
    /// See [`Self::registration`].
    pub async fn registration_from(&self, primary: RawResource) -> Result<Registration, AppError> {
        let [registration, tournament, game, user] = self
            .join_exact::<4>(primary, relations::REGISTRATION, ResourceKind::Registration)
            .await?;
        self.mapper.registration((registration, tournament, game, user))
    }

    pub async fn game(&self, name: &str) -> Result<Game, AppError> {
        let raw = self.fetcher.fetch_game(name).await?;
        self.game_from(raw)
    }

    pub fn game_from(&self, raw: RawResource) -> Result<Game, AppError> {
        self.mapper.game(raw)
    }

    pub async fn user(&self, id: &str) -> Result<User, AppError> {
        let raw = self.fetcher.fetch_user(id).await?;
        self.mapper.user(raw)
    }

    pub async fn mode(&self, name: &str) -> Result<Mode, AppError> {
        let raw = self.fetcher.fetch_mode(name).await?;
        self.mode_from(raw)
    }

    pub fn mode_from(&self, raw: RawResource) -> Result<Mode, AppError> {
        self.mapper.mode(raw)
    }

    /// Aggregates every tournament of a listing; all-or-nothing.
    ///
    /// # Errors
    ///
    /// Returns the first item failure.
    pub async fn tournament_page(&self, page: RawPage) -> Result<Page<Tournament>, AppError> {
        transform_page(page, |raw| self.tournament_from(raw)).await
    }

    /// Aggregates every registration of a listing; all-or-nothing.
    ///
    /// # Errors
    ///
    /// Returns the first item failure.
    pub async fn registration_page(&self, page: RawPage) -> Result<Page<Registration>, AppError> {
        transform_page(page, |raw| self.registration_from(raw)).await
    }

    /// Maps every game of a listing; games have no relations to fetch.
    ///
    /// # Errors
    ///
    /// Returns the first item that fails to map.
    pub async fn game_page(&self, page: RawPage) -> Result<Page<Game>, AppError> {
        transform_page(page, |raw| future::ready(self.game_from(raw))).await
    }

    /// Joins `primary` with `relations`, recursing into nested ones.
    ///
    /// Parts come back in pre-order: the primary, then each relation in
    /// declaration order immediately followed by its own nested parts.
    /// Siblings are fetched concurrently; the first failure wins.
    pub fn join<'a>(
        &'a self,
        primary: RawResource,
        relations: &'static [Relation],
    ) -> BoxFuture<'a, Result<Vec<RawResource>, AppError>> {
        async move {
            if relations.is_empty() {
                return Ok(vec![primary]);
            }

            let links = relations
                .iter()
                .map(|relation| resolve_link(&primary, relation.name))
                .collect::<Result<Vec<_>, _>>()?;

            debug!(
                resource = %primary.describe(),
                relations = links.len(),
                "joining relations"
            );

            let branches = relations.iter().zip(links).map(|(relation, link)| async move {
                let related = self.fetcher.fetch_by_link(&link).await?;
                self.join(related, relation.nested).await
            });
            let resolved = try_join_all(branches).await?;

            let mut parts = Vec::with_capacity(relations::arity(relations));
            parts.push(primary);
            parts.extend(resolved.into_iter().flatten());
            Ok(parts)
        }
        .boxed()
    }

    async fn join_exact<const N: usize>(
        &self,
        primary: RawResource,
        relations: &'static [Relation],
        kind: ResourceKind,
    ) -> Result<[RawResource; N], AppError> {
        let parts = self.join(primary, relations).await?;
        <[RawResource; N]>::try_from(parts).map_err(|parts| {
            AppError::decode(
                kind.name(),
                format!("expected {N} joined parts, got {}", parts.len()),
            )
        })
    }
}
