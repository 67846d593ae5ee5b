//! Transport port used by the resource fetcher.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::raw::RawResource;
use crate::error::AppError;

/// Raw access to the hypermedia API.
///
/// Paths are either relative to the API base (`/users/3`) or absolute hrefs
/// taken verbatim from a link. Calls are single-shot: implementations must not
/// retry.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::ReqwestTransport`] - HTTP via reqwest
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetches the resource at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] on a 404.
    /// Returns [`AppError::Transport`] for any other failure.
    async fn get(&self, path: &str) -> Result<RawResource, AppError>;

    /// Creates a resource by posting `body` to `path` and returns the created
    /// representation.
    ///
    /// # Errors
    ///
    /// Same as [`Transport::get`].
    async fn post(&self, path: &str, body: Value) -> Result<RawResource, AppError>;
}
