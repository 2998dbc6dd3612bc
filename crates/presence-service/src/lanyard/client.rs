//! Lanyard REST client

use presence_common::LanyardConfig;
use presence_core::Snowflake;
use reqwest::header::{ACCEPT, CACHE_CONTROL};
use reqwest::{Client, StatusCode};
use tracing::{debug, error, info, instrument};

use super::error::LanyardError;
use super::models::{LanyardPresence, LanyardResponse};

/// Client for the Lanyard presence API
#[derive(Debug, Clone)]
pub struct LanyardClient {
    http: Client,
    base_url: String,
}

impl LanyardClient {
    /// Build a client identifying itself with the configured user agent
    pub fn new(config: &LanyardConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().user_agent(&config.user_agent).build()?;
        Ok(Self::with_client(http, &config.base_url))
    }

    /// Wrap an existing HTTP client
    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the presence of one monitored user.
    ///
    /// Every call goes to the network; responses are never cached.
    #[instrument(skip(self))]
    pub async fn fetch_presence(&self, user_id: Snowflake) -> Result<LanyardPresence, LanyardError> {
        let url = format!("{}/users/{user_id}", self.base_url);

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        let status = response.status();
        info!(status = status.as_u16(), "Lanyard API responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "Lanyard API error");

            return Err(match status {
                StatusCode::NOT_FOUND => LanyardError::NotFound,
                StatusCode::TOO_MANY_REQUESTS => LanyardError::RateLimited,
                _ => LanyardError::Status {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        let bytes = response.bytes().await?;
        debug!(payload = %String::from_utf8_lossy(&bytes), "Raw Lanyard response");

        let envelope: LanyardResponse = serde_json::from_slice(&bytes)?;

        if !envelope.success {
            let message = envelope
                .error
                .map_or_else(|| "Unknown error".to_string(), |e| e.message);
            return Err(LanyardError::Unsuccessful(message));
        }

        envelope.data.ok_or(LanyardError::MissingData)
    }
}
