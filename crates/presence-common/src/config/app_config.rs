//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use presence_core::Snowflake;
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Proxy configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub lanyard: LanyardConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Presence aggregator (Lanyard) configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LanyardConfig {
    #[serde(default = "default_lanyard_url")]
    pub base_url: String,
    /// The one Discord user this proxy reports on
    pub user_id: Snowflake,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Status poller configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PollerConfig {
    #[serde(default = "default_status_url")]
    pub status_url: String,
    #[serde(default = "default_poll_interval_ms")]
    pub interval_ms: u64,
    /// Selects the log format, like the proxy's `APP_ENV`
    #[serde(default)]
    pub env: Environment,
}

impl PollerConfig {
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            status_url: default_status_url(),
            interval_ms: default_poll_interval_ms(),
            env: Environment::default(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "discord-presence".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_lanyard_url() -> String {
    "https://api.lanyard.rest/v1".to_string()
}

fn default_user_agent() -> String {
    "Discord-Profile-Integration/1.0".to_string()
}

fn default_requests_per_second() -> u32 {
    5
}

fn default_burst() -> u32 {
    20
}

fn default_status_url() -> String {
    "http://127.0.0.1:3000/api/discord-status".to_string()
}

fn default_poll_interval_ms() -> u64 {
    30_000
}

/// Parse an optional variable, rejecting values that are present but malformed
fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        None => Ok(None),
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key/value source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let user_id = lookup("DISCORD_USER_ID").ok_or(ConfigError::MissingVar("DISCORD_USER_ID"))?;
        let user_id = Snowflake::parse(&user_id)
            .map_err(|_| ConfigError::InvalidValue("DISCORD_USER_ID", user_id))?;

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: lookup("APP_ENV")
                    .as_deref()
                    .and_then(Environment::parse)
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: lookup("API_HOST").unwrap_or_else(default_host),
                port: parse_var(&lookup, "API_PORT")?.unwrap_or_else(default_port),
            },
            lanyard: LanyardConfig {
                base_url: lookup("LANYARD_API_URL").unwrap_or_else(default_lanyard_url),
                user_id,
                user_agent: lookup("LANYARD_USER_AGENT").unwrap_or_else(default_user_agent),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parse_var(&lookup, "RATE_LIMIT_REQUESTS_PER_SECOND")?
                    .unwrap_or_else(default_requests_per_second),
                burst: parse_var(&lookup, "RATE_LIMIT_BURST")?.unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|origin| !origin.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }
}

impl PollerConfig {
    /// Load poller configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            status_url: lookup("STATUS_URL").unwrap_or_else(default_status_url),
            interval_ms: parse_var(&lookup, "POLL_INTERVAL_MS")?
                .unwrap_or_else(default_poll_interval_ms),
            env: lookup("APP_ENV")
                .as_deref()
                .and_then(Environment::parse)
                .unwrap_or_default(),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
