//! Identity and storage adapters.

mod anonymous;

pub use anonymous::AnonymousIdentity;
