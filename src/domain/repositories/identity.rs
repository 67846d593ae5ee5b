//! Identity provider port.

use async_trait::async_trait;

use crate::domain::entities::{AuthMethod, AuthUser, Claims};
use crate::error::AppError;

/// Authentication and session provider.
///
/// The client does not own sessions: sign-in, token refresh and claims all
/// live behind this trait. Boolean results report whether the provider
/// accepted the operation.
///
/// # Implementations
///
/// - [`crate::infrastructure::identity::AnonymousIdentity`] - no session
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The signed-in account, or `None` without a session.
    async fn current_user(&self) -> Result<Option<AuthUser>, AppError>;

    /// Claims of the current session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthenticated`] without a session.
    async fn claims(&self) -> Result<Claims, AppError>;

    async fn create_account(&self, email: &str, password: &str) -> Result<bool, AppError>;

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<bool, AppError>;

    /// Signs in with a token issued by an external provider (Google, Facebook).
    async fn sign_in_with_token(&self, method: AuthMethod, token: &str) -> Result<bool, AppError>;

    /// Links another sign-in method to the current account. `credential` is
    /// a provider token, or the new password for [`AuthMethod::Password`].
    async fn link_method(&self, method: AuthMethod, credential: &str) -> Result<bool, AppError>;

    async fn reauthenticate(&self, method: AuthMethod, token: &str) -> Result<bool, AppError>;

    async fn sign_out(&self) -> Result<bool, AppError>;

    async fn methods_for_email(&self, email: &str) -> Result<Vec<AuthMethod>, AppError>;

    async fn current_user_methods(&self) -> Result<Vec<AuthMethod>, AppError>;

    async fn is_email_verified(&self) -> Result<bool, AppError>;

    async fn update_email(&self, email: &str) -> Result<bool, AppError>;

    async fn update_nickname(&self, nickname: &str) -> Result<bool, AppError>;

    async fn update_password(&self, password: &str) -> Result<bool, AppError>;

    /// Records the storage path of the current user's profile picture.
    async fn update_profile_image(&self, storage_path: &str) -> Result<bool, AppError>;
}
