//! Poller state

use chrono::{DateTime, Utc};
use presence_core::{ErrorBody, PresenceSnapshot, StatusError};

/// What presentation consumers see
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollerState {
    /// Latest good snapshot, kept across failed fetches
    pub status: Option<PresenceSnapshot>,
    pub loading: bool,
    pub error: Option<StatusError>,
    /// Wall-clock time of the last successful fetch
    pub last_fetch_time: Option<DateTime<Utc>>,
}

impl PollerState {
    /// State before the first fetch completes
    pub fn new() -> Self {
        Self {
            status: None,
            loading: true,
            error: None,
            last_fetch_time: None,
        }
    }

    /// Online or idle
    pub fn is_online(&self) -> bool {
        self.status.as_ref().is_some_and(PresenceSnapshot::is_online)
    }

    /// The error as `{ error, details, code, ... }`
    pub fn error_body(&self) -> Option<ErrorBody> {
        self.error.as_ref().map(ErrorBody::from)
    }

    pub(crate) fn apply_success(&mut self, snapshot: PresenceSnapshot, now: DateTime<Utc>) {
        self.status = Some(snapshot);
        self.last_fetch_time = Some(now);
        self.error = None;
        self.loading = false;
    }

    pub(crate) fn apply_failure(&mut self, error: StatusError) {
        self.error = Some(error);
        self.loading = false;
    }
}

impl Default for PollerState {
    fn default() -> Self {
        Self::new()
    }
}
