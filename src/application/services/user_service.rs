//! User lookup service.

use std::sync::Arc;

use super::aggregator::Aggregator;
use crate::application::mapping::EntityMapper;
use crate::domain::entities::User;
use crate::domain::repositories::Transport;
use crate::error::AppError;

pub struct UserService<T: Transport, M: EntityMapper> {
    aggregator: Arc<Aggregator<T, M>>,
}

impl<T: Transport, M: EntityMapper> UserService<T, M> {
    /// Creates a new user service.
    pub fn new(aggregator: Arc<Aggregator<T, M>>) -> Self {
        Self { aggregator }
    }

    /// Retrieves a user's public profile.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has that id.
    pub async fn get_user_by_id(&self, id: &str) -> Result<User, AppError> {
        self.aggregator.user(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::mapping::MockEntityMapper;
    use crate::domain::raw::RawResource;
    use crate::domain::repositories::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_user_by_id() {
        let mut transport = MockTransport::new();
        transport
            .expect_get()
            .withf(|path| path == "/users/uid-3")
            .times(1)
            .returning(|_| RawResource::from_value(json!({ "nickname": "ada" })));

        let mut mapper = MockEntityMapper::new();
        mapper
            .expect_user()
            .withf(|raw| raw.get("nickname") == Some(&json!("ada")))
            .times(1)
            .returning(|_| {
                Ok(User::new(
                    "uid-3".to_string(),
                    "ada@example.com".to_string(),
                    "ada".to_string(),
                    None,
                    false,
                ))
            });

        let aggregator = Aggregator::new(Arc::new(transport), Arc::new(mapper));
        let service = UserService::new(Arc::new(aggregator));

        let user = service.get_user_by_id("uid-3").await.unwrap();
        assert_eq!(user.id, "uid-3");
    }

    #[tokio::test]
    async fn test_get_user_by_id_not_found_skips_mapping() {
        let mut transport = MockTransport::new();
        transport
            .expect_get()
            .times(1)
            .returning(|path| Err(AppError::not_found(path)));

        let mut mapper = MockEntityMapper::new();
        mapper.expect_user().never();

        let aggregator = Aggregator::new(Arc::new(transport), Arc::new(mapper));
        let service = UserService::new(Arc::new(aggregator));

        let err = service.get_user_by_id("404").await.unwrap_err();
        assert_eq!(err, AppError::not_found("/users/404"));
    }
}
