//! Status poller
//!
//! Owns one repeating timer task and at most one outstanding fetch. Starting a
//! fetch cancels the previous one; a cancelled fetch never touches the state.
//! Dropping the poller (or calling [`StatusPoller::shutdown`]) stops the timer
//! and cancels the outstanding fetch.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use parking_lot::Mutex;
use presence_core::{PresenceSnapshot, StatusResult, StatusSource};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::state::PollerState;

/// Default poll interval (30 seconds)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(30_000);

/// Shortest usable interval; a zero interval is raised to this
const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Outstanding-fetch bookkeeping
#[derive(Default)]
struct InFlight {
    current: Option<CancellationToken>,
    closed: bool,
}

struct Shared {
    source: Arc<dyn StatusSource>,
    state: watch::Sender<PollerState>,
    in_flight: Mutex<InFlight>,
}

impl Shared {
    /// Claim the in-flight slot, cancelling whoever held it
    fn begin(&self, mark_loading: bool) -> Option<CancellationToken> {
        let mut in_flight = self.in_flight.lock();
        if in_flight.closed {
            return None;
        }

        if mark_loading {
            self.state.send_if_modified(|state| !std::mem::replace(&mut state.loading, true));
        }

        let token = CancellationToken::new();
        if let Some(previous) = in_flight.current.replace(token.clone()) {
            previous.cancel();
        }
        Some(token)
    }

    /// Apply a result unless it has been superseded.
    ///
    /// Cancel and apply both happen under the in-flight lock, so a result is
    /// either applied before its successor starts or not at all.
    fn finish(&self, token: &CancellationToken, result: StatusResult<PresenceSnapshot>) {
        let mut in_flight = self.in_flight.lock();
        if in_flight.closed || token.is_cancelled() {
            debug!("Discarding superseded fetch result");
            return;
        }
        in_flight.current = None;

        match result {
            Ok(snapshot) => {
                info!(
                    status = %snapshot.presence.status,
                    activities = snapshot.presence.activities.len(),
                    has_spotify = snapshot.presence.spotify.is_some(),
                    "Status updated"
                );
                self.state
                    .send_modify(|state| state.apply_success(snapshot, Utc::now()));
            }
            Err(error) => {
                warn!(code = error.code(), details = error.details(), "Status fetch failed");
                self.state.send_modify(|state| state.apply_failure(error));
            }
        }
    }

    async fn fetch(&self, mark_loading: bool) {
        let Some(token) = self.begin(mark_loading) else {
            return;
        };

        let result = tokio::select! {
            biased;
            () = token.cancelled() => {
                debug!("Fetch cancelled");
                return;
            }
            result = self.source.fetch_status() => result,
        };

        self.finish(&token, result);
    }

    fn close(&self) {
        let mut in_flight = self.in_flight.lock();
        in_flight.closed = true;
        if let Some(current) = in_flight.current.take() {
            current.cancel();
        }
    }
}

/// Live, auto-refreshing view of the latest snapshot
pub struct StatusPoller {
    shared: Arc<Shared>,
    ticker: JoinHandle<()>,
}

impl StatusPoller {
    /// Start polling: one fetch immediately, then one per `every`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn(source: Arc<dyn StatusSource>, every: Duration) -> Self {
        let (state, _) = watch::channel(PollerState::new());
        let shared = Arc::new(Shared {
            source,
            state,
            in_flight: Mutex::new(InFlight::default()),
        });

        // Created here so the first tick completes immediately
        let mut ticks = interval(every.max(MIN_POLL_INTERVAL));
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let ticker_shared = Arc::clone(&shared);
        let ticker = tokio::spawn(async move {
            loop {
                ticks.tick().await;
                // Detached so the next tick can cancel a slow fetch
                let shared = Arc::clone(&ticker_shared);
                tokio::spawn(async move { shared.fetch(false).await });
            }
        });

        debug!(interval_ms = every.as_millis(), "Status poller started");
        Self { shared, ticker }
    }

    /// Start polling at [`DEFAULT_POLL_INTERVAL`]
    pub fn with_default_interval(source: Arc<dyn StatusSource>) -> Self {
        Self::spawn(source, DEFAULT_POLL_INTERVAL)
    }

    /// Current state
    pub fn state(&self) -> PollerState {
        self.shared.state.borrow().clone()
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<PollerState> {
        self.shared.state.subscribe()
    }

    pub fn is_online(&self) -> bool {
        self.shared.state.borrow().is_online()
    }

    /// Fetch now: sets `loading`, cancels any outstanding fetch and resolves
    /// once this fetch has been applied, superseded or cancelled.
    pub async fn refetch(&self) {
        self.shared.fetch(true).await;
    }

    /// Stop the timer and cancel the outstanding fetch. Idempotent.
    pub fn shutdown(&self) {
        self.ticker.abort();
        self.shared.close();
    }
}

impl Drop for StatusPoller {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for StatusPoller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // One lock at a time: fetches take in_flight before the state
        let closed = self.shared.in_flight.lock().closed;
        let state = self.shared.state.borrow().clone();
        f.debug_struct("StatusPoller")
            .field("state", &state)
            .field("closed", &closed)
            .finish()
    }
}
