//! Services of the application layer.
//!
//! The [`Aggregator`] is the core: it joins raw resources into entities. The
//! entity services are thin facades over it, one per resource family, and
//! share a single aggregator instance.

pub mod account_service;
pub mod aggregator;
pub mod game_service;
pub mod pagination;
pub mod registration_service;
pub mod resource_fetcher;
pub mod tournament_service;
pub mod user_service;

pub use account_service::AccountService;
pub use aggregator::Aggregator;
pub use game_service::GameService;
pub use pagination::transform_page;
pub use registration_service::RegistrationService;
pub use resource_fetcher::{PageQuery, ResourceFetcher};
pub use tournament_service::TournamentService;
pub use user_service::UserService;
