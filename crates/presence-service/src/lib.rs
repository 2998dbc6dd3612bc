//! # presence-service
//!
//! Application layer: the Lanyard aggregator client and the status service
//! that turns its payload into a [`presence_core::PresenceSnapshot`].

pub mod lanyard;
pub mod services;

pub use lanyard::{LanyardClient, LanyardError, LanyardPresence};
pub use services::{normalize, StatusService};
