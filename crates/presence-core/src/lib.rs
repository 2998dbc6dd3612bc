//! # presence-core
//!
//! Domain layer containing the presence snapshot, identity value objects, the
//! status error taxonomy and the status source port.
//! This crate has zero dependencies on infrastructure (HTTP client, web framework, etc.).

pub mod display;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use display::{format_elapsed, ActivityKind};
pub use entities::{
    avatar_url, default_avatar_index, default_avatar_url, ActiveOn, Activity, ActivityAssets,
    ActivityTimestamps, PresenceInfo, PresenceSnapshot, PresenceStatus, SpotifyInfo,
    SpotifyTimestamps, UserSummary,
};
pub use error::{ErrorBody, FetchDebug, StatusError};
pub use traits::{StatusResult, StatusSource};
pub use value_objects::{PublicFlags, Snowflake, SnowflakeParseError};
