//! Application state
//!
//! Holds the status source answering proxy requests and the configuration.

use std::sync::Arc;

use presence_common::AppConfig;
use presence_core::StatusSource;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Where snapshots come from (the Lanyard-backed service in production)
    status_source: Arc<dyn StatusSource>,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(status_source: Arc<dyn StatusSource>, config: AppConfig) -> Self {
        Self {
            status_source,
            config: Arc::new(config),
        }
    }

    pub fn status_source(&self) -> &dyn StatusSource {
        self.status_source.as_ref()
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("status_source", &"StatusSource")
            .field("config", &self.config)
            .finish()
    }
}
