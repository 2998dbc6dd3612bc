//! Status watcher entry point
//!
//! Polls the status proxy and logs a one-line presence card whenever it
//! changes, until Ctrl-C.
//!
//! Run with:
//! ```bash
//! STATUS_URL=http://127.0.0.1:3000/api/discord-status cargo run -p presence-poller
//! ```

use std::sync::Arc;

use chrono::Utc;
use presence_common::{
    try_init_tracing_with_config, AppError, AppResult, ConfigError, PollerConfig, TracingConfig,
};
use presence_poller::{render_card, HttpStatusSource, StatusPoller};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = PollerConfig::from_env();

    let env = config.as_ref().map(|c| c.env).unwrap_or_default();
    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(config).await {
        error!(error = %e, "Watcher failed to start");
        std::process::exit(1);
    }
}

async fn run(config: Result<PollerConfig, ConfigError>) -> AppResult<()> {
    let config = config.map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        url = %config.status_url,
        interval_ms = config.interval_ms,
        env = ?config.env,
        "Configuration loaded"
    );

    let source = HttpStatusSource::new(config.status_url.clone()).map_err(AppError::client)?;
    let poller = StatusPoller::spawn(Arc::new(source), config.interval());
    let mut updates = poller.subscribe();

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut last_card = String::new();
    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                let card = render_card(&state, Utc::now());
                if card != last_card {
                    info!(online = state.is_online(), loading = state.loading, "{card}");
                    last_card = card;
                }
            }
            signal = &mut shutdown => {
                if let Err(e) = signal {
                    error!(error = %e, "Failed to listen for shutdown signal");
                }
                break;
            }
        }
    }

    poller.shutdown();
    info!("Watcher stopped");
    Ok(())
}
