//! Test helpers for integration tests
//!
//! Provides a proxy server wired to a mocked Lanyard API, plus request and
//! assertion helpers.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use presence_api::{bind, create_app, create_app_state, serve};
use presence_common::AppConfig;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::fixtures::{PresenceFixture, TEST_USER_ID};

/// Proxy instance in front of a mock Lanyard API
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub lanyard: MockServer,
    _shutdown: oneshot::Sender<()>,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        Self::start_with_config(|_| {}).await
    }

    /// Start a test server, adjusting the default test config first
    pub async fn start_with_config(configure: impl FnOnce(&mut AppConfig)) -> Result<Self> {
        let lanyard = MockServer::start().await;

        let mut config = test_config(&format!("{}/v1", lanyard.uri()))?;
        configure(&mut config);

        let state = create_app_state(config)?;
        let app = create_app(state)?;

        let listener = bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        // Stops when the sender is dropped with the server
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let shutdown = async move {
                let _ = shutdown_rx.await;
            };
            serve(listener, app, shutdown).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            lanyard,
            _shutdown: shutdown_tx,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// URL of the status endpoint
    pub fn status_url(&self) -> String {
        format!("{}/api/discord-status", self.base_url())
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Replace whatever Lanyard currently answers with `template`
    pub async fn mock_lanyard(&self, template: ResponseTemplate) {
        self.lanyard.reset().await;
        Mock::given(method("GET"))
            .and(path(format!("/v1/users/{TEST_USER_ID}")))
            .respond_with(template)
            .mount(&self.lanyard)
            .await;
    }

    /// Make Lanyard answer with a presence payload
    pub async fn mock_presence(&self, fixture: &PresenceFixture) {
        self.mock_lanyard(ResponseTemplate::new(200).set_body_json(fixture.envelope()))
            .await;
    }
}

/// Create a test configuration pointing at `lanyard_url`
pub fn test_config(lanyard_url: &str) -> Result<AppConfig> {
    let vars: HashMap<&str, String> = HashMap::from([
        ("DISCORD_USER_ID", TEST_USER_ID.to_string()),
        ("LANYARD_API_URL", lanyard_url.to_string()),
        ("API_HOST", "127.0.0.1".to_string()),
        ("API_PORT", "0".to_string()),
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "1000".to_string()),
        ("RATE_LIMIT_BURST", "1000".to_string()),
    ]);

    let config = AppConfig::from_lookup(|key: &str| vars.get(key).cloned())
        .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;

    Ok(config)
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}
