//! Lanyard client errors

use thiserror::Error;

/// A failed call to the Lanyard API
#[derive(Debug, Error)]
pub enum LanyardError {
    /// The user is not monitored by Lanyard (HTTP 404)
    #[error("Lanyard API returned 404: user not monitored")]
    NotFound,

    /// Lanyard throttled the request (HTTP 429)
    #[error("Lanyard API rate limited the request")]
    RateLimited,

    /// Any other non-success status
    #[error("Lanyard API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Request to Lanyard API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid Lanyard API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The envelope carried `success: false`
    #[error("Lanyard API error: {0}")]
    Unsuccessful(String),

    #[error("Lanyard API returned no data")]
    MissingData,

    #[error("No discord_user data received from Lanyard API")]
    MissingUser,
}
