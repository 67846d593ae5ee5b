//! Domain layer: raw payloads, links, composite keys, entities and ports.
//!
//! # Architecture
//!
//! - [`raw`] - untyped API payloads and listing envelopes
//! - [`links`] - link resolution (pure)
//! - [`relations`] - composite keys of each aggregated entity
//! - [`paths`] - API path construction
//! - [`entities`] - typed, fully hydrated value objects
//! - [`repositories`] - port traits implemented by the infrastructure layer
//!
//! # Design Principles
//!
//! - Nothing here performs I/O
//! - Ports define contracts implemented by the infrastructure layer
//! - Orchestration lives in services (see [`crate::application::services`])

pub mod entities;
pub mod links;
pub mod paths;
pub mod raw;
pub mod relations;
pub mod repositories;
