//! Application error types
//!
//! Failures while starting or running a binary (config, bind, serve).
//! Request-level failures are `StatusError`s and never end up here.

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Server lifecycle errors
    #[error("Server error: {0}")]
    Server(String),

    // HTTP client construction
    #[error("HTTP client error: {0}")]
    Client(String),

    // Internal errors
    #[error("Internal error")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    /// Create a server error
    pub fn server(msg: impl std::fmt::Display) -> Self {
        Self::Server(msg.to_string())
    }

    /// Create an HTTP client error
    pub fn client(msg: impl std::fmt::Display) -> Self {
        Self::Client(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
