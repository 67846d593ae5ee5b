//! Client construction and wiring.
//!
//! Builds the HTTP transport from configuration and hands one shared
//! aggregator to every entity service.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::mapping::{EntityMapper, HalMapper};
use crate::application::services::{
    Aggregator, GameService, RegistrationService, TournamentService, UserService,
};
use crate::config::Config;
use crate::domain::repositories::Transport;
use crate::infrastructure::http::ReqwestTransport;

/// Entry point of the library: every service over one transport.
pub struct ArenaClient<T: Transport = ReqwestTransport, M: EntityMapper = HalMapper> {
    pub games: GameService<T, M>,
    pub tournaments: TournamentService<T, M>,
    pub registrations: RegistrationService<T, M>,
    pub users: UserService<T, M>,
}

impl ArenaClient {
    /// Builds a client talking HTTP to the configured API.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be constructed.
    pub fn from_config(config: &Config) -> Result<Self> {
        let base_url = config.api_base_url()?;
        let transport = ReqwestTransport::new(base_url, config.http_timeout(), &config.user_agent)
            .context("Failed to build HTTP client")?;
        tracing::info!("API client ready: {}", transport.base_url().host_str().unwrap_or("-"));

        Ok(Self::new(Arc::new(transport), Arc::new(HalMapper::new())))
    }
}

impl<T: Transport, M: EntityMapper> ArenaClient<T, M> {
    /// Creates a new client sharing one aggregator across its services.
    pub fn new(transport: Arc<T>, mapper: Arc<M>) -> Self {
        let aggregator = Arc::new(Aggregator::new(transport, mapper));
        Self {
            games: GameService::new(aggregator.clone()),
            tournaments: TournamentService::new(aggregator.clone()),
            registrations: RegistrationService::new(aggregator.clone()),
            users: UserService::new(aggregator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubTransport;
    use serde_json::json;

    #[test]
    fn test_from_config() {
        let config = Config {
            api_url: "http://localhost:9000/api".to_string(),
            http_timeout_secs: 5,
            user_agent: "arena-client/test".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        };

        assert!(ArenaClient::from_config(&config).is_ok());
    }

    #[tokio::test]
    async fn test_services_share_transport() {
        let transport = Arc::new(
            StubTransport::new()
                .with("/users/3", json!({ "id": "3", "email": "a@b.c", "nickname": "ada" }))
                .with("/games/Chess", json!({ "gameName": "Chess" })),
        );
        let client = ArenaClient::new(transport.clone(), Arc::new(HalMapper::new()));

        client.users.get_user_by_id("3").await.unwrap();
        client.games.get_game_by_name("Chess").await.unwrap();

        assert_eq!(transport.calls(), vec!["GET /users/3", "GET /games/Chess"]);
    }
}
