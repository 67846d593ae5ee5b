//! Identity provider for runs without a session.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::{AuthMethod, AuthUser, Claims};
use crate::domain::repositories::{FileStorage, IdentityProvider};
use crate::error::AppError;

/// An identity provider and file storage with nobody signed in.
///
/// Used when no identity backend is configured, e.g. by the command line
/// client. Reads report no user; sign-in attempts are declined; anything
/// that needs a session fails with [`AppError::Unauthenticated`].
#[derive(Debug, Clone, Copy)]
pub struct AnonymousIdentity;

impl AnonymousIdentity {
    /// Creates a new anonymous identity.
    pub fn new() -> Self {
        debug!("Using AnonymousIdentity (no session)");
        Self
    }
}

impl Default for AnonymousIdentity {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for AnonymousIdentity {
    async fn current_user(&self) -> Result<Option<AuthUser>, AppError> {
        Ok(None)
    }

    async fn claims(&self) -> Result<Claims, AppError> {
        Err(AppError::Unauthenticated)
    }

    async fn create_account(&self, _email: &str, _password: &str) -> Result<bool, AppError> {
        Ok(false)
    }

    async fn sign_in_with_password(&self, _email: &str, _password: &str) -> Result<bool, AppError> {
        Ok(false)
    }

    async fn sign_in_with_token(&self, _method: AuthMethod, _token: &str) -> Result<bool, AppError> {
        Ok(false)
    }

    async fn link_method(&self, _method: AuthMethod, _credential: &str) -> Result<bool, AppError> {
        Err(AppError::Unauthenticated)
    }

    async fn reauthenticate(&self, _method: AuthMethod, _token: &str) -> Result<bool, AppError> {
        Err(AppError::Unauthenticated)
    }

    async fn sign_out(&self) -> Result<bool, AppError> {
        Ok(false)
    }

    async fn methods_for_email(&self, _email: &str) -> Result<Vec<AuthMethod>, AppError> {
        Ok(Vec::new())
    }

    async fn current_user_methods(&self) -> Result<Vec<AuthMethod>, AppError> {
        Err(AppError::Unauthenticated)
    }

    async fn is_email_verified(&self) -> Result<bool, AppError> {
        Ok(false)
    }

    async fn update_email(&self, _email: &str) -> Result<bool, AppError> {
        Err(AppError::Unauthenticated)
    }

    async fn update_nickname(&self, _nickname: &str) -> Result<bool, AppError> {
        Err(AppError::Unauthenticated)
    }

    async fn update_password(&self, _password: &str) -> Result<bool, AppError> {
        Err(AppError::Unauthenticated)
    }

    async fn update_profile_image(&self, _storage_path: &str) -> Result<bool, AppError> {
        Err(AppError::Unauthenticated)
    }
}

#[async_trait]
impl FileStorage for AnonymousIdentity {
    async fn file_url(&self, _path: &str) -> Result<String, AppError> {
        Err(AppError::Unauthenticated)
    }

    async fn upload(&self, _bytes: Vec<u8>, _path: &str) -> Result<(), AppError> {
        Err(AppError::Unauthenticated)
    }
}
