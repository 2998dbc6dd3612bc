//! # presence-poller
//!
//! Keeps a live, auto-refreshing view of the status proxy's latest snapshot.
//!
//! A [`StatusPoller`] fetches once on spawn, then on every interval tick,
//! with at most one request in flight. Consumers read [`PollerState`] or
//! subscribe to its changes.

pub mod card;
pub mod client;
pub mod poller;
pub mod state;

pub use card::render_card;
pub use client::HttpStatusSource;
pub use poller::{StatusPoller, DEFAULT_POLL_INTERVAL};
pub use state::PollerState;
