//! Server setup and initialization
//!
//! Provides the application builder and server runner.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use presence_common::{AppConfig, AppError, AppResult};
use presence_service::{LanyardClient, StatusService};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::handlers::status::not_found;
use crate::middleware::apply_middleware_with_config;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> AppResult<Router> {
    let config = state.config();
    let router = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;

    Ok(router
        .merge(health_routes())
        .fallback(not_found)
        .with_state(state))
}

/// Initialize all dependencies and create AppState
pub fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    let client = LanyardClient::new(&config.lanyard).map_err(AppError::client)?;
    info!(base_url = %client.base_url(), "Lanyard client ready");

    let service = StatusService::new(client, config.lanyard.user_id, config.app.env);
    Ok(AppState::new(Arc::new(service), config))
}

/// Bind the listening socket
pub async fn bind(addr: &str) -> AppResult<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::server(format!("Failed to bind to {addr}: {e}")))
}

/// Serve until `shutdown` resolves, then drain in-flight requests
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> AppResult<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{addr}");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::server(format!("Server error: {e}")))
}

/// Resolves on Ctrl-C
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr = config.api.address();

    let state = create_app_state(config)?;
    let app = create_app(state)?;

    let listener = bind(&addr).await?;
    serve(listener, app, shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}
