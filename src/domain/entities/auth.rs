//! Identity types handed over by the authentication provider.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sign-in methods an account can be linked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    Password,
    Google,
    Facebook,
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Password => f.write_str("password"),
            Self::Google => f.write_str("google"),
            Self::Facebook => f.write_str("facebook"),
        }
    }
}

/// The signed-in account as the identity provider knows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub nickname: String,
    /// Storage path of the profile picture, when one was uploaded.
    pub image_path: Option<String>,
}

impl AuthUser {
    /// Storage path to read the profile picture from.
    pub fn storage_image_path(&self) -> String {
        self.image_path
            .clone()
            .unwrap_or_else(|| format!("users/{}/profile", self.id))
    }
}

/// Custom claims attached to the session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Claims {
    pub is_subscriber: bool,
}
