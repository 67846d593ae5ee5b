//! Account and profile service.
//!
//! Sits on top of the identity provider and the file storage. The signed-in
//! user is assembled from both: identity data from the provider, the
//! profile picture URL from storage, the subscription flag from the session
//! claims.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::{AuthMethod, User};
use crate::domain::repositories::{FileStorage, IdentityProvider};
use crate::error::AppError;

pub struct AccountService<I: IdentityProvider, S: FileStorage> {
    identity: Arc<I>,
    storage: Arc<S>,
}

impl<I: IdentityProvider, S: FileStorage> AccountService<I, S> {
    /// Creates a new account service.
    pub fn new(identity: Arc<I>, storage: Arc<S>) -> Self {
        Self { identity, storage }
    }

    /// Returns the signed-in user, or `None` without a session.
    ///
    /// The profile image URL and the claims are fetched concurrently.
    ///
    /// # Errors
    ///
    /// Returns the first provider or storage failure.
    pub async fn get_current_user(&self) -> Result<Option<User>, AppError> {
        let Some(auth_user) = self.identity.current_user().await? else {
            return Ok(None);
        };

        let image_path = auth_user.storage_image_path();
        let (image, claims) = tokio::try_join!(
            self.storage.file_url(&image_path),
            self.identity.claims()
        )?;

        Ok(Some(User::new(
            auth_user.id,
            auth_user.email,
            auth_user.nickname,
            Some(image),
            claims.is_subscriber,
        )))
    }

    pub async fn is_current_user_subscriber(&self) -> Result<bool, AppError> {
        Ok(self.identity.claims().await?.is_subscriber)
    }

    /// Uploads a new profile picture and records it on the profile.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthenticated`] without a signed-in user; the
    /// upload is not attempted in that case.
    pub async fn update_current_user_profile_image(&self, bytes: Vec<u8>) -> Result<bool, AppError> {
        let auth_user = self
            .identity
            .current_user()
            .await?
            .ok_or(AppError::Unauthenticated)?;

        let path = format!("users/{}/profile", auth_user.id);
        self.storage.upload(bytes, &path).await?;
        info!(user_id = %auth_user.id, %path, "profile image uploaded");

        self.identity.update_profile_image(&path).await
    }

    pub async fn create_account(&self, email: &str, password: &str) -> Result<bool, AppError> {
        self.identity.create_account(email, password).await
    }

    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<bool, AppError> {
        self.identity.sign_in_with_password(email, password).await
    }

    /// Signs in with a token issued by a third-party provider.
    pub async fn sign_in_with_provider(&self, method: AuthMethod, token: &str) -> Result<bool, AppError> {
        debug!(%method, "signing in with provider");
        self.identity.sign_in_with_token(method, token).await
    }

    pub async fn link_method(&self, method: AuthMethod, credential: &str) -> Result<bool, AppError> {
        self.identity.link_method(method, credential).await
    }

    pub async fn reauthenticate(&self, method: AuthMethod, token: &str) -> Result<bool, AppError> {
        self.identity.reauthenticate(method, token).await
    }

    pub async fn sign_out(&self) -> Result<bool, AppError> {
        self.identity.sign_out().await
    }

    /// Sign-in methods registered for `email`, empty for unknown addresses.
    pub async fn get_auth_methods_for_email(&self, email: &str) -> Result<Vec<AuthMethod>, AppError> {
        self.identity.methods_for_email(email).await
    }

    pub async fn get_current_user_auth_methods(&self) -> Result<Vec<AuthMethod>, AppError> {
        self.identity.current_user_methods().await
    }

    pub async fn is_email_verified(&self) -> Result<bool, AppError> {
        self.identity.is_email_verified().await
    }

    pub async fn update_current_user_email(&self, email: &str) -> Result<bool, AppError> {
        self.identity.update_email(email).await
    }

    pub async fn update_current_user_nickname(&self, nickname: &str) -> Result<bool, AppError> {
        self.identity.update_nickname(nickname).await
    }

    pub async fn update_current_user_password(&self, password: &str) -> Result<bool, AppError> {
        self.identity.update_password(password).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AuthUser, Claims};
    use crate::domain::repositories::{MockFileStorage, MockIdentityProvider};

    fn ada() -> AuthUser {
        AuthUser {
            id: "u1".to_string(),
            email: "ada@example.com".to_string(),
            nickname: "ada".to_string(),
            image_path: None,
        }
    }

    #[tokio::test]
    async fn test_get_current_user_joins_image_and_claims() {
        let mut identity = MockIdentityProvider::new();
        identity
            .expect_current_user()
            .times(1)
            .returning(|| Ok(Some(ada())));
        identity
            .expect_claims()
            .times(1)
            .returning(|| Ok(Claims { is_subscriber: true }));

        let mut storage = MockFileStorage::new();
        storage
            .expect_file_url()
            .withf(|path| path == "users/u1/profile")
            .times(1)
            .returning(|path| Ok(format!("https://cdn.test/{path}")));

        let service = AccountService::new(Arc::new(identity), Arc::new(storage));
        let user = service.get_current_user().await.unwrap().unwrap();

        assert_eq!(user.id, "u1");
        assert_eq!(user.image.as_deref(), Some("https://cdn.test/users/u1/profile"));
        assert!(user.is_subscriber);
    }

    #[tokio::test]
    async fn test_get_current_user_without_session() {
        let mut identity = MockIdentityProvider::new();
        identity.expect_current_user().times(1).returning(|| Ok(None));
        identity.expect_claims().never();

        let mut storage = MockFileStorage::new();
        storage.expect_file_url().never();

        let service = AccountService::new(Arc::new(identity), Arc::new(storage));

        assert_eq!(service.get_current_user().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_current_user_storage_failure_propagates() {
        let mut identity = MockIdentityProvider::new();
        identity
            .expect_current_user()
            .returning(|| Ok(Some(ada())));
        identity
            .expect_claims()
            .returning(|| Ok(Claims::default()));

        let mut storage = MockFileStorage::new();
        storage
            .expect_file_url()
            .returning(|_| Err(AppError::identity("object not found")));

        let service = AccountService::new(Arc::new(identity), Arc::new(storage));

        assert_eq!(
            service.get_current_user().await.unwrap_err(),
            AppError::identity("object not found")
        );
    }

    #[tokio::test]
    async fn test_update_profile_image_requires_user() {
        let mut identity = MockIdentityProvider::new();
        identity.expect_current_user().times(1).returning(|| Ok(None));
        identity.expect_update_profile_image().never();

        let mut storage = MockFileStorage::new();
        storage.expect_upload().never();

        let service = AccountService::new(Arc::new(identity), Arc::new(storage));
        let err = service
            .update_current_user_profile_image(vec![1, 2, 3])
            .await
            .unwrap_err();

        assert_eq!(err, AppError::Unauthenticated);
    }

    #[tokio::test]
    async fn test_update_profile_image_uploads_then_records_path() {
        let mut identity = MockIdentityProvider::new();
        identity
            .expect_current_user()
            .returning(|| Ok(Some(ada())));
        identity
            .expect_update_profile_image()
            .withf(|path| path == "users/u1/profile")
            .times(1)
            .returning(|_| Ok(true));

        let mut storage = MockFileStorage::new();
        storage
            .expect_upload()
            .withf(|bytes, path| bytes == &vec![1u8, 2, 3] && path == "users/u1/profile")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = AccountService::new(Arc::new(identity), Arc::new(storage));

        assert!(service
            .update_current_user_profile_image(vec![1, 2, 3])
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_is_current_user_subscriber() {
        let mut identity = MockIdentityProvider::new();
        identity
            .expect_claims()
            .returning(|| Ok(Claims { is_subscriber: false }));

        let service = AccountService::new(Arc::new(identity), Arc::new(MockFileStorage::new()));

        assert!(!service.is_current_user_subscriber().await.unwrap());
    }

    #[tokio::test]
    async fn test_sign_in_with_provider_passes_method() {
        let mut identity = MockIdentityProvider::new();
        identity
            .expect_sign_in_with_token()
            .withf(|method, token| *method == AuthMethod::Google && token == "tok")
            .times(1)
            .returning(|_, _| Ok(true));

        let service = AccountService::new(Arc::new(identity), Arc::new(MockFileStorage::new()));

        assert!(service
            .sign_in_with_provider(AuthMethod::Google, "tok")
            .await
            .unwrap());
    }
}
