//! # presence-api
//!
//! Discord status proxy built with the Axum framework.

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{bind, create_app, create_app_state, run, serve, shutdown_signal};
pub use state::AppState;
