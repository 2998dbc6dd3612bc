//! Presence snapshot - one normalized read of a user's presence
//!
//! Snapshots are immutable values: every successful proxy call produces a new
//! one that replaces the previous snapshot wholesale.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::{PublicFlags, Snowflake};

/// Activity type code used for music listening
pub const LISTENING_ACTIVITY_TYPE: u8 = 2;

/// Activity name the aggregator uses for Spotify
pub const SPOTIFY_ACTIVITY_NAME: &str = "Spotify";

/// Source tag written into every snapshot
pub const SNAPSHOT_SOURCE: &str = "lanyard";

/// Online status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceStatus {
    Online,
    Idle,
    Dnd,
    Offline,
}

impl PresenceStatus {
    /// Online and idle both count as reachable
    #[inline]
    pub fn is_online(&self) -> bool {
        matches!(self, Self::Online | Self::Idle)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Idle => "idle",
            Self::Dnd => "dnd",
            Self::Offline => "offline",
        }
    }
}

impl fmt::Display for PresenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of the tracked user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: Snowflake,
    pub username: String,
    pub discriminator: String,
    pub global_name: Option<String>,
    pub display_name: Option<String>,
    /// Always a fully-qualified URL, never the raw avatar hash
    pub avatar_url: String,
    pub public_flags: u64,
}

impl UserSummary {
    /// Decoded public flags
    pub fn flags(&self) -> PublicFlags {
        PublicFlags::from_bits_truncate(self.public_flags)
    }
}

/// Start/end timestamps of an activity (unix milliseconds)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityTimestamps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
}

/// Artwork references of an activity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityAssets {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_text: Option<String>,
}

/// A foreground activity (game, stream, custom status, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamps: Option<ActivityTimestamps>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<ActivityAssets>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

impl Activity {
    /// Music listening entries are reported through [`SpotifyInfo`] instead.
    ///
    /// Matches on either the listening type code or the Spotify name.
    pub fn is_music_listening(&self) -> bool {
        self.kind == LISTENING_ACTIVITY_TYPE || self.name == SPOTIFY_ACTIVITY_NAME
    }
}

/// Spotify track timestamps (unix milliseconds)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotifyTimestamps {
    pub start: i64,
    pub end: i64,
}

/// Currently playing Spotify track.
///
/// Keys keep the aggregator's snake_case spelling so the block is passed
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotifyInfo {
    pub track_id: Option<String>,
    pub timestamps: SpotifyTimestamps,
    #[serde(default)]
    pub song: String,
    #[serde(default)]
    pub artist: String,
    pub album_art_url: Option<String>,
    #[serde(default)]
    pub album: String,
}

impl SpotifyInfo {
    /// Track length in milliseconds
    pub fn duration_ms(&self) -> i64 {
        self.timestamps.end.saturating_sub(self.timestamps.start).max(0)
    }

    /// Playback progress in `[0, 1]` at `now_ms`
    pub fn progress(&self, now_ms: i64) -> f64 {
        let duration = self.duration_ms();
        if duration == 0 {
            return 0.0;
        }
        let elapsed = now_ms.saturating_sub(self.timestamps.start).clamp(0, duration);
        elapsed as f64 / duration as f64
    }
}

/// Which clients the user is active on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveOn {
    pub web: bool,
    pub desktop: bool,
    pub mobile: bool,
    pub embedded: bool,
}

/// Presence portion of a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceInfo {
    pub status: PresenceStatus,
    pub activities: Vec<Activity>,
    pub primary_activity: Option<Activity>,
    pub spotify: Option<SpotifyInfo>,
    pub active_on: ActiveOn,
}

impl PresenceInfo {
    /// Build presence info from raw activities.
    ///
    /// Music listening entries are dropped, the first remaining entry (in
    /// original order) becomes the primary activity.
    pub fn new(
        status: PresenceStatus,
        activities: impl IntoIterator<Item = Activity>,
        spotify: Option<SpotifyInfo>,
        active_on: ActiveOn,
    ) -> Self {
        let activities: Vec<Activity> = activities
            .into_iter()
            .filter(|activity| !activity.is_music_listening())
            .collect();
        let primary_activity = activities.first().cloned();

        Self {
            status,
            activities,
            primary_activity,
            spotify,
            active_on,
        }
    }
}

/// One normalized presence read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceSnapshot {
    pub user: UserSummary,
    pub presence: PresenceInfo,
    /// Wall-clock time the proxy produced this snapshot
    pub last_updated: DateTime<Utc>,
    pub source: String,
}

impl PresenceSnapshot {
    /// Create a snapshot stamped with `last_updated`
    pub fn new(user: UserSummary, presence: PresenceInfo, last_updated: DateTime<Utc>) -> Self {
        Self {
            user,
            presence,
            last_updated,
            source: SNAPSHOT_SOURCE.to_string(),
        }
    }

    /// Equal in every field except `last_updated`
    pub fn same_presence(&self, other: &Self) -> bool {
        self.user == other.user && self.presence == other.presence && self.source == other.source
    }

    #[inline]
    pub fn is_online(&self) -> bool {
        self.presence.status.is_online()
    }
}
