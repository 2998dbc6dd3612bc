//! Business logic services

pub mod status;

pub use status::{normalize, StatusService};
