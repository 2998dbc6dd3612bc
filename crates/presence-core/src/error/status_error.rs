//! Status errors - the failures a status read can surface
//!
//! The proxy produces the first three kinds, the poller adds the last two for
//! failures reaching the proxy itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where to go when the aggregator does not know the user
pub const LANYARD_HELP_URL: &str = "https://discord.gg/lanyard";

const USER_NOT_FOUND_DETAILS: &str = "Discord user not found or not being monitored by Lanyard. \
                                      Make sure to join the Lanyard Discord server.";
const RATE_LIMITED_DETAILS: &str = "Too many requests to Lanyard API. Please try again later.";
const NETWORK_ERROR_DETAILS: &str = "Unable to fetch Discord status";

/// Extra diagnostics attached to `FETCH_ERROR` outside production
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchDebug {
    /// Error message followed by its sources, outermost first
    pub chain: Vec<String>,
}

impl FetchDebug {
    /// Collect the source chain of an error
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut chain = vec![err.to_string()];
        let mut source = err.source();
        while let Some(cause) = source {
            chain.push(cause.to_string());
            source = cause.source();
        }
        Self { chain }
    }
}

/// A failed status read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    /// The aggregator does not track the configured user
    #[error("User not found: {details}")]
    UserNotFound { details: String, help_url: String },

    /// The aggregator throttled the proxy
    #[error("Rate limited: {details}")]
    RateLimited { details: String },

    /// Any other upstream or validation failure
    #[error("Failed to fetch Discord status: {details}")]
    FetchError {
        details: String,
        timestamp: DateTime<Utc>,
        user_id: String,
        debug: Option<FetchDebug>,
    },

    /// The proxy could not be reached
    #[error("Connection failed: {details}")]
    NetworkError { details: String },

    /// The proxy answered with something unexpected
    #[error("Failed to fetch Discord status: {details}")]
    HttpError { status: u16, details: String },
}

impl StatusError {
    pub const USER_NOT_FOUND: &'static str = "USER_NOT_FOUND";
    pub const RATE_LIMITED: &'static str = "RATE_LIMITED";
    pub const FETCH_ERROR: &'static str = "FETCH_ERROR";
    pub const NETWORK_ERROR: &'static str = "NETWORK_ERROR";
    pub const HTTP_ERROR: &'static str = "HTTP_ERROR";

    /// User not found, with remediation text
    pub fn user_not_found() -> Self {
        Self::UserNotFound {
            details: USER_NOT_FOUND_DETAILS.to_string(),
            help_url: LANYARD_HELP_URL.to_string(),
        }
    }

    pub fn rate_limited() -> Self {
        Self::RateLimited {
            details: RATE_LIMITED_DETAILS.to_string(),
        }
    }

    /// Generic fetch failure stamped with the current time
    pub fn fetch_error(details: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self::FetchError {
            details: details.into(),
            timestamp: Utc::now(),
            user_id: user_id.into(),
            debug: None,
        }
    }

    pub fn network_error() -> Self {
        Self::NetworkError {
            details: NETWORK_ERROR_DETAILS.to_string(),
        }
    }

    pub fn http_error(status: u16) -> Self {
        Self::HttpError {
            status,
            details: format!("HTTP {status}"),
        }
    }

    /// Attach debug diagnostics (only meaningful for `FETCH_ERROR`)
    pub fn with_debug(mut self, diagnostics: FetchDebug) -> Self {
        if let Self::FetchError { debug, .. } = &mut self {
            *debug = Some(diagnostics);
        }
        self
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound { .. } => Self::USER_NOT_FOUND,
            Self::RateLimited { .. } => Self::RATE_LIMITED,
            Self::FetchError { .. } => Self::FETCH_ERROR,
            Self::NetworkError { .. } => Self::NETWORK_ERROR,
            Self::HttpError { .. } => Self::HTTP_ERROR,
        }
    }

    /// Short human-readable title
    pub fn title(&self) -> &'static str {
        match self {
            Self::UserNotFound { .. } => "User not found",
            Self::RateLimited { .. } => "Rate limited",
            Self::FetchError { .. } | Self::HttpError { .. } => "Failed to fetch Discord status",
            Self::NetworkError { .. } => "Connection failed",
        }
    }

    pub fn details(&self) -> &str {
        match self {
            Self::UserNotFound { details, .. }
            | Self::RateLimited { details }
            | Self::FetchError { details, .. }
            | Self::NetworkError { details }
            | Self::HttpError { details, .. } => details,
        }
    }

    /// HTTP status the proxy answers with
    pub fn http_status(&self) -> u16 {
        match self {
            Self::UserNotFound { .. } => 404,
            Self::RateLimited { .. } => 429,
            Self::HttpError { status, .. } => *status,
            Self::FetchError { .. } | Self::NetworkError { .. } => 500,
        }
    }

    /// Rebuild an error from a proxy error body.
    ///
    /// Unknown or missing codes become `HTTP_ERROR` for the given status.
    pub fn from_body(status: u16, body: ErrorBody) -> Self {
        let details = body.details.unwrap_or_else(|| format!("HTTP {status}"));
        match body.code.as_deref() {
            Some(Self::USER_NOT_FOUND) => Self::UserNotFound {
                details,
                help_url: body.help_url.unwrap_or_else(|| LANYARD_HELP_URL.to_string()),
            },
            Some(Self::RATE_LIMITED) => Self::RateLimited { details },
            Some(Self::FETCH_ERROR) => Self::FetchError {
                details,
                timestamp: body.timestamp.unwrap_or_else(Utc::now),
                user_id: body.user_id.unwrap_or_default(),
                debug: body.debug,
            },
            Some(Self::NETWORK_ERROR) => Self::NetworkError { details },
            _ => Self::HttpError { status, details },
        }
    }
}

/// Error body exchanged between proxy and poller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<FetchDebug>,
}

impl From<&StatusError> for ErrorBody {
    fn from(err: &StatusError) -> Self {
        let mut body = Self {
            error: Some(err.title().to_string()),
            details: Some(err.details().to_string()),
            code: Some(err.code().to_string()),
            ..Self::default()
        };

        match err {
            StatusError::UserNotFound { help_url, .. } => {
                body.help_url = Some(help_url.clone());
            }
            StatusError::FetchError {
                timestamp,
                user_id,
                debug,
                ..
            } => {
                body.timestamp = Some(*timestamp);
                body.user_id = Some(user_id.clone());
                body.debug.clone_from(debug);
            }
            StatusError::RateLimited { .. }
            | StatusError::NetworkError { .. }
            | StatusError::HttpError { .. } => {}
        }

        body
    }
}
