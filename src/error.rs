//! Error taxonomy shared by every layer of the client.
//!
//! The aggregation core never wraps or translates these: a failure in any
//! fetch composing an entity reaches the caller with its original kind, so a
//! data-integrity problem ([`AppError::MissingLink`]) stays distinguishable
//! from a missing resource ([`AppError::NotFound`]) and from a network
//! problem ([`AppError::Transport`]).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// A required relation link is absent from a raw resource.
    #[error("resource {resource} has no `{relation}` link")]
    MissingLink { relation: String, resource: String },

    /// The API answered 404 for the requested path.
    #[error("resource not found: {path}")]
    NotFound { path: String },

    /// Network failure, non-success status or an undecodable body.
    #[error("transport error: {message}")]
    Transport { message: String },

    /// Well-formed JSON that does not have the shape of the expected entity.
    #[error("malformed {entity} payload: {message}")]
    Decode {
        entity: &'static str,
        message: String,
    },

    #[error("user not logged in")]
    Unauthenticated,

    /// Failure reported by the identity or storage provider.
    #[error("identity provider error: {message}")]
    Identity { message: String },
}

impl AppError {
    pub fn missing_link(relation: impl Into<String>, resource: impl Into<String>) -> Self {
        Self::MissingLink {
            relation: relation.into(),
            resource: resource.into(),
        }
    }
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
    pub fn decode(entity: &'static str, message: impl Into<String>) -> Self {
        Self::Decode {
            entity,
            message: message.into(),
        }
    }
    pub fn identity(message: impl Into<String>) -> Self {
        Self::Identity {
            message: message.into(),
        }
    }
}
