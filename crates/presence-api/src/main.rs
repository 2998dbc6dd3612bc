//! Discord status proxy entry point
//!
//! Run with:
//! ```bash
//! DISCORD_USER_ID=781158548364853270 cargo run -p presence-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use presence_common::{
    try_init_tracing_with_config, AppConfig, AppResult, ConfigError, TracingConfig,
};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env();

    // Log format follows the environment, even when the rest of the config is invalid
    let env = config.as_ref().map(|c| c.app.env).unwrap_or_default();
    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run(config: Result<AppConfig, ConfigError>) -> AppResult<()> {
    info!("Starting Discord status proxy...");

    let config = config.map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        port = config.api.port,
        user_id = %config.lanyard.user_id,
        "Configuration loaded"
    );

    presence_api::run(config).await
}
