//! Infrastructure layer: concrete implementations of the port traits.
//!
//! - [`http`] - reqwest transport for the hypermedia API
//! - [`identity`] - identity and storage adapters

pub mod http;
pub mod identity;
