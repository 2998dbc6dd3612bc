//! Lanyard wire models
//!
//! Mirrors the subset of the `GET /v1/users/:id` payload the proxy reads.
//! Unknown fields are ignored.

use presence_core::{Activity, ActivityAssets, ActivityTimestamps, PresenceStatus, Snowflake};
use serde::Deserialize;
use serde_json::Value;

/// Response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct LanyardResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<LanyardPresence>,
    #[serde(default)]
    pub error: Option<LanyardApiError>,
}

/// Error object reported alongside `success: false`
#[derive(Debug, Clone, Deserialize)]
pub struct LanyardApiError {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Presence data of one monitored user
#[derive(Debug, Clone, Deserialize)]
pub struct LanyardPresence {
    /// Absent only in malformed payloads, rejected during normalization
    #[serde(default)]
    pub discord_user: Option<LanyardUser>,
    pub discord_status: PresenceStatus,
    #[serde(default)]
    pub activities: Vec<LanyardActivity>,
    #[serde(default)]
    pub listening_to_spotify: bool,
    /// Raw Spotify block, only decoded while `listening_to_spotify` is set
    #[serde(default)]
    pub spotify: Option<Value>,
    /// User key/value store, not forwarded
    #[serde(default)]
    pub kv: Option<Value>,
    #[serde(default)]
    pub active_on_discord_web: bool,
    #[serde(default)]
    pub active_on_discord_desktop: bool,
    #[serde(default)]
    pub active_on_discord_mobile: bool,
    #[serde(default)]
    pub active_on_discord_embedded: bool,
}

/// Discord user record
#[derive(Debug, Clone, Deserialize)]
pub struct LanyardUser {
    pub id: Snowflake,
    pub username: String,
    #[serde(default)]
    pub discriminator: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bot: bool,
    #[serde(default)]
    pub global_name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub public_flags: Option<u64>,
}

/// Raw activity entry
#[derive(Debug, Clone, Deserialize)]
pub struct LanyardActivity {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub timestamps: Option<ActivityTimestamps>,
    #[serde(default)]
    pub assets: Option<ActivityAssets>,
    #[serde(default)]
    pub application_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub platform: Option<String>,
}

impl From<LanyardActivity> for Activity {
    fn from(raw: LanyardActivity) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            kind: raw.kind,
            state: raw.state,
            details: raw.details,
            timestamps: raw.timestamps,
            assets: raw.assets,
            platform: raw.platform,
            application_id: raw.application_id,
            created_at: raw.created_at,
        }
    }
}
