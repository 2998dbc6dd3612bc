//! Presentation mapping
//!
//! Read-only helpers that turn a snapshot into the strings a presence card
//! shows: status labels and colours, activity headlines, artwork URLs and
//! elapsed-time text.

use crate::entities::{Activity, PresenceStatus, UserSummary, CDN_BASE_URL};

/// Media proxy used for externally hosted activity artwork
pub const MEDIA_PROXY_URL: &str = "https://media.discordapp.net";

const EXTERNAL_ASSET_PREFIX: &str = "mp:external/";

impl PresenceStatus {
    /// Label shown next to the status dot
    pub fn label(&self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Idle => "Away",
            Self::Dnd => "Do Not Disturb",
            Self::Offline => "Offline",
        }
    }

    /// Status dot colour (hex)
    pub fn color(&self) -> &'static str {
        match self {
            Self::Online => "#43b581",
            Self::Idle => "#faa61a",
            Self::Dnd => "#f04747",
            Self::Offline => "#747f8d",
        }
    }
}

/// Activity type decoded from its integer code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Playing,
    Streaming,
    Listening,
    Watching,
    Custom,
    Competing,
    Unknown(u8),
}

impl From<u8> for ActivityKind {
    fn from(code: u8) -> Self {
        match code {
            0 => Self::Playing,
            1 => Self::Streaming,
            2 => Self::Listening,
            3 => Self::Watching,
            4 => Self::Custom,
            5 => Self::Competing,
            other => Self::Unknown(other),
        }
    }
}

impl Activity {
    pub fn activity_kind(&self) -> ActivityKind {
        ActivityKind::from(self.kind)
    }

    /// Headline above the activity name
    pub fn headline(&self) -> &'static str {
        match self.activity_kind() {
            ActivityKind::Playing => "Playing a Game",
            ActivityKind::Streaming => "Streaming",
            _ => "Activity",
        }
    }

    /// URL of the large artwork, if the activity has one that can be resolved
    pub fn large_image_url(&self) -> Option<String> {
        let image = self.assets.as_ref()?.large_image.as_deref()?;
        if let Some(external) = image.strip_prefix(EXTERNAL_ASSET_PREFIX) {
            return Some(format!("{MEDIA_PROXY_URL}/external/{external}"));
        }
        let application_id = self.application_id.as_deref()?;
        Some(format!("{CDN_BASE_URL}/app-assets/{application_id}/{image}.png"))
    }

    /// Elapsed time since the activity started, if it has a start timestamp
    pub fn elapsed(&self, now_ms: i64) -> Option<String> {
        let start = self.timestamps.as_ref()?.start?;
        Some(format_elapsed(start, now_ms))
    }
}

impl UserSummary {
    /// Display name, then global name, then username
    pub fn preferred_name(&self) -> &str {
        [self.display_name.as_deref(), self.global_name.as_deref()]
            .into_iter()
            .flatten()
            .find(|name| !name.is_empty())
            .unwrap_or(&self.username)
    }
}

/// Format the time between `start_ms` and `now_ms` as `"1h 5m"` or `"5m"`
pub fn format_elapsed(start_ms: i64, now_ms: i64) -> String {
    let minutes = now_ms.saturating_sub(start_ms).max(0) / 60_000;
    let hours = minutes / 60;

    if hours > 0 {
        format!("{hours}h {}m", minutes % 60)
    } else {
        format!("{minutes}m")
    }
}
