//! HTTP status source reading the proxy

use async_trait::async_trait;
use presence_core::{ErrorBody, PresenceSnapshot, StatusError, StatusResult, StatusSource};
use reqwest::header::CACHE_CONTROL;
use reqwest::Client;
use tracing::{instrument, warn};

/// Reads snapshots from the status proxy over HTTP
#[derive(Debug, Clone)]
pub struct HttpStatusSource {
    http: Client,
    url: String,
}

impl HttpStatusSource {
    pub fn new(url: impl Into<String>) -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(Client::builder().build()?, url))
    }

    pub fn with_client(http: Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl StatusSource for HttpStatusSource {
    /// Transport failures become `NETWORK_ERROR`. Error bodies keep the code
    /// the proxy sent, anything unreadable becomes `HTTP_ERROR`.
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_status(&self) -> StatusResult<PresenceSnapshot> {
        let response = self
            .http
            .get(&self.url)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Status proxy unreachable");
                StatusError::network_error()
            })?;

        let code = response.status();
        let status = code.as_u16();
        let bytes = response.bytes().await.map_err(|e| {
            warn!(error = %e, "Failed to read status proxy response");
            StatusError::network_error()
        })?;

        if code.is_success() {
            return serde_json::from_slice(&bytes).map_err(|e| {
                warn!(status, error = %e, "Unexpected status proxy response");
                StatusError::http_error(status)
            });
        }

        match serde_json::from_slice::<ErrorBody>(&bytes) {
            Ok(body) => Err(StatusError::from_body(status, body)),
            Err(_) => Err(StatusError::http_error(status)),
        }
    }
}
