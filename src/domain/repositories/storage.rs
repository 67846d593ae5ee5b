//! Binary object storage port.

use async_trait::async_trait;

use crate::error::AppError;

/// Object storage holding profile pictures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Download URL of the object at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Identity`] if the provider rejects the request.
    async fn file_url(&self, path: &str) -> Result<String, AppError>;

    /// Uploads `bytes` to `path`, replacing any existing object.
    async fn upload(&self, bytes: Vec<u8>, path: &str) -> Result<(), AppError>;
}
