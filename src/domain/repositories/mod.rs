//! Port traits for the collaborators the client depends on.
//!
//! The aggregation core and the services only see these traits; concrete
//! implementations live in `crate::infrastructure` and are injected through
//! constructors.
//!
//! # Available Ports
//!
//! - [`Transport`] - raw GET/POST against the hypermedia API
//! - [`IdentityProvider`] - sessions, sign-in methods and claims
//! - [`FileStorage`] - profile picture storage
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod identity;
pub mod storage;
pub mod transport;

pub use identity::IdentityProvider;
pub use storage::FileStorage;
pub use transport::Transport;

#[cfg(test)]
pub use identity::MockIdentityProvider;
#[cfg(test)]
pub use storage::MockFileStorage;
#[cfg(test)]
pub use transport::MockTransport;
