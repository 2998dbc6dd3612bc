//! Lanyard REST API client and wire models

mod client;
mod error;
mod models;

pub use client::LanyardClient;
pub use error::LanyardError;
pub use models::{LanyardActivity, LanyardApiError, LanyardPresence, LanyardResponse, LanyardUser};
