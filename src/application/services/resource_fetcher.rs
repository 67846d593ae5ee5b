//! Single-shot fetches of raw resources.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::domain::links::Link;
use crate::domain::paths::{query_path, resource_path};
use crate::domain::raw::{RawPage, RawResource, ResourceKind};
use crate::domain::repositories::Transport;
use crate::error::AppError;

/// A listing request: collection or finder, filters and page number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    finder: Option<&'static str>,
    params: Vec<(&'static str, Option<String>)>,
    page: u32,
}

impl PageQuery {
    /// `GET /{collection}?page=`
    pub fn all(page: u32) -> Self {
        Self {
            finder: None,
            params: Vec::new(),
            page,
        }
    }

    /// `GET /{collection}/search/{finder}?...&page=`
    pub fn search(finder: &'static str, page: u32) -> Self {
        Self {
            finder: Some(finder),
            params: Vec::new(),
            page,
        }
    }

    pub fn param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.params.push((key, Some(value.into())));
        self
    }

    /// Adds `key` only when `value` is present.
    pub fn optional_param(mut self, key: &'static str, value: Option<String>) -> Self {
        self.params.push((key, value));
        self
    }

    pub fn path(&self, kind: ResourceKind) -> String {
        let base = match self.finder {
            Some(finder) => format!("/{}/search/{finder}", kind.collection()),
            None => format!("/{}", kind.collection()),
        };

        let mut params = self.params.clone();
        params.push(("page", Some(self.page.to_string())));
        query_path(&base, &params)
    }
}

/// Fetches raw resources by id, by link, or as pages.
///
/// Every call maps to exactly one transport request and returns the
/// transport's error unchanged.
pub struct ResourceFetcher<T: Transport> {
    transport: Arc<T>,
}

impl<T: Transport> ResourceFetcher<T> {
    /// Creates a new resource fetcher over `transport`.
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Fetches `/{collection}/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the resource does not exist.
    /// Returns [`AppError::Transport`] on any other failure.
    pub async fn fetch_by_id(&self, kind: ResourceKind, id: &str) -> Result<RawResource, AppError> {
        let path = resource_path(kind.collection(), id);
        debug!(%kind, %path, "fetching resource by id");
        self.transport.get(&path).await
    }

    /// Follows a link discovered on another resource.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_by_id`].
    pub async fn fetch_by_link(&self, link: &Link) -> Result<RawResource, AppError> {
        debug!(relation = %link.relation, href = %link.href, "following link");
        self.transport.get(&link.href).await
    }

    pub async fn fetch_game(&self, name: &str) -> Result<RawResource, AppError> {
        self.fetch_by_id(ResourceKind::Game, name).await
    }

    pub async fn fetch_mode(&self, name: &str) -> Result<RawResource, AppError> {
        self.fetch_by_id(ResourceKind::Mode, name).await
    }

    pub async fn fetch_tournament(&self, id: i64) -> Result<RawResource, AppError> {
        self.fetch_by_id(ResourceKind::Tournament, &id.to_string())
            .await
    }

    pub async fn fetch_registration(&self, id: i64) -> Result<RawResource, AppError> {
        self.fetch_by_id(ResourceKind::Registration, &id.to_string())
            .await
    }

    pub async fn fetch_user(&self, id: &str) -> Result<RawResource, AppError> {
        self.fetch_by_id(ResourceKind::User, id).await
    }

    /// Fetches one page of a listing and splits it into raw items.
    ///
    /// # Errors
    ///
    /// Transport errors as in [`Self::fetch_by_id`]; [`AppError::Decode`] if
    /// the listing envelope is malformed.
    pub async fn fetch_page(&self, kind: ResourceKind, query: &PageQuery) -> Result<RawPage, AppError> {
        let path = query.path(kind);
        debug!(%kind, %path, "fetching page");
        let raw = self.transport.get(&path).await?;
        RawPage::from_raw(raw, kind)
    }

    /// Posts a new resource to its collection.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_by_id`].
    pub async fn create(&self, kind: ResourceKind, body: Value) -> Result<RawResource, AppError> {
        let path = format!("/{}", kind.collection());
        debug!(%kind, %path, "creating resource");
        self.transport.post(&path, body).await
    }

    /// Serializes `body` and posts it like [`Self::create`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Decode`] if `body` cannot be serialized, otherwise
    /// see [`Self::create`].
    pub async fn create_from<B: Serialize + Sync>(
        &self,
        kind: ResourceKind,
        body: &B,
    ) -> Result<RawResource, AppError> {
        let body = serde_json::to_value(body).map_err(|e| AppError::decode(kind.name(), e.to_string()))?;
        self.create(kind, body).await
    }
}
