//! Blocking HTTP fetcher
//!
//! One reqwest client is built up front with the configured timeout and
//! reused for every request. The walk is strictly sequential, so there is
//! no connection pooling beyond what reqwest does on its own.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

use crate::client::types::{ChessDataRequest, ChessDataResponse, GameMode, UserRating};
use crate::client::ChessDataFetcher;
use crate::config::WalkConfig;
use crate::error::{FetchError, FetchResult};

/// Header the service's origin check expects on internal traffic
const REQUESTED_BY_HEADER: &str = "x-requested-by";
const REQUESTED_BY_VALUE: &str = "internal";

/// Fetcher backed by the real chess data service
pub struct HttpFetcher {
    client: Client,
    endpoint: Url,
    games_count: u32,
}

impl HttpFetcher {
    /// Build a fetcher from the validated configuration.
    pub fn new(config: &WalkConfig) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            games_count: config.games_count,
        })
    }

    fn request_for(&self, user: &UserRating, mode: GameMode) -> ChessDataRequest {
        ChessDataRequest::new(user.name.clone(), self.games_count, mode)
    }
}

impl ChessDataFetcher for HttpFetcher {
    fn fetch(&self, user: &UserRating, mode: GameMode) -> FetchResult<ChessDataResponse> {
        let request = self.request_for(user, mode);
        debug!(user = %user.name, mode = %mode, "Requesting chess data");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(REQUESTED_BY_HEADER, REQUESTED_BY_VALUE)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                username: user.name.clone(),
                status,
            });
        }

        // Decode from text so body problems surface as Malformed, not as a
        // transport error.
        let body = response.text()?;
        let parsed: ChessDataResponse = serde_json::from_str(&body)?;
        debug!(
            user = %user.name,
            opponents = parsed.opponents.len(),
            "Decoded chess data response"
        );
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::types::COLOR_BOTH;

    #[test]
    fn test_fetcher_builds_from_config() {
        let config = WalkConfig::default();
        let fetcher = HttpFetcher::new(&config).unwrap();
        assert_eq!(fetcher.games_count, config.games_count);
        assert_eq!(fetcher.endpoint, config.endpoint);
    }

    #[test]
    fn test_request_carries_configured_values() {
        let mut config = WalkConfig::default();
        config.games_count = 25;
        let fetcher = HttpFetcher::new(&config).unwrap();

        let user = UserRating::new("Hexaquarks1", 1900);
        let request = fetcher.request_for(&user, GameMode::Rapid);
        assert_eq!(request.username, "Hexaquarks1");
        assert_eq!(request.games_count, 25);
        assert_eq!(request.game_mode, GameMode::Rapid);
        assert_eq!(request.user_color, COLOR_BOTH);
    }
}
