//! User entity.

use serde::Serialize;

use crate::domain::paths::resource_path;

/// A registered player or tournament administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub nickname: String,
    pub image: Option<String>,
    pub is_subscriber: bool,
}

impl User {
    pub fn new(
        id: String,
        email: String,
        nickname: String,
        image: Option<String>,
        is_subscriber: bool,
    ) -> Self {
        Self {
            id,
            email,
            nickname,
            image,
            is_subscriber,
        }
    }

    /// Path of this user's resource, used when linking it from other resources.
    pub fn resource_path(&self) -> String {
        resource_path("users", &self.id)
    }

    /// Storage path of the user's profile picture.
    pub fn profile_image_path(&self) -> String {
        format!("users/{}/profile", self.id)
    }
}
