//! Status source port
//!
//! Anything that can produce a fresh [`PresenceSnapshot`]: the proxy's HTTP
//! endpoint for the poller, or a scripted source in tests.

use async_trait::async_trait;

use crate::entities::PresenceSnapshot;
use crate::error::StatusError;

/// Result type for status reads
pub type StatusResult<T> = Result<T, StatusError>;

#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Read the latest presence snapshot.
    ///
    /// Dropping the returned future abandons the request.
    async fn fetch_status(&self) -> StatusResult<PresenceSnapshot>;
}
