//! Test fixtures and data generators
//!
//! Builders for Lanyard API payloads.

use serde_json::{json, Value};

/// Discord user the proxy is configured for
pub const TEST_USER_ID: &str = "781158548364853270";

/// Custom (non-animated) avatar hash
pub const TEST_AVATAR: &str = "3f1e5f7c2d4b6a8e9f0a1b2c3d4e5f60";

/// A raw activity entry
pub fn activity(id: &str, name: &str, kind: u8) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": kind,
        "created_at": 1_700_000_000_000_i64
    })
}

/// A populated Spotify block
pub fn spotify_block() -> Value {
    json!({
        "track_id": "4cOdK2wGLETKBW3PvgPWqT",
        "timestamps": { "start": 1_700_000_000_000_i64, "end": 1_700_000_212_000_i64 },
        "song": "Never Gonna Give You Up",
        "artist": "Rick Astley; Stock Aitken Waterman",
        "album_art_url": "https://i.scdn.co/image/ab67616d0000b273255e131abc1410833be95673",
        "album": "Whenever You Need Somebody"
    })
}

/// Lanyard presence payload builder
#[derive(Debug, Clone)]
pub struct PresenceFixture {
    pub status: String,
    pub discriminator: String,
    pub avatar: Option<String>,
    pub activities: Vec<Value>,
    pub listening_to_spotify: bool,
    pub spotify: Option<Value>,
}

impl PresenceFixture {
    /// Online, custom avatar, no activities
    pub fn online() -> Self {
        Self {
            status: "online".to_string(),
            discriminator: "0".to_string(),
            avatar: Some(TEST_AVATAR.to_string()),
            activities: Vec::new(),
            listening_to_spotify: false,
            spotify: None,
        }
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn activity(mut self, activity: Value) -> Self {
        self.activities.push(activity);
        self
    }

    pub fn avatar(mut self, avatar: Option<&str>) -> Self {
        self.avatar = avatar.map(String::from);
        self
    }

    pub fn discriminator(mut self, discriminator: &str) -> Self {
        self.discriminator = discriminator.to_string();
        self
    }

    /// Attach the Spotify block, flagged as playing or not
    pub fn spotify(mut self, listening: bool) -> Self {
        self.listening_to_spotify = listening;
        self.spotify = Some(spotify_block());
        self
    }

    /// The `data` object
    pub fn data(&self) -> Value {
        json!({
            "kv": {},
            "discord_user": {
                "id": TEST_USER_ID,
                "username": "quokka",
                "avatar": self.avatar,
                "discriminator": self.discriminator,
                "bot": false,
                "global_name": "Quokka",
                "display_name": null,
                "public_flags": 4_194_304
            },
            "activities": self.activities,
            "discord_status": self.status,
            "active_on_discord_web": false,
            "active_on_discord_desktop": true,
            "active_on_discord_mobile": false,
            "active_on_discord_embedded": false,
            "listening_to_spotify": self.listening_to_spotify,
            "spotify": self.spotify
        })
    }

    /// The full `{ success, data }` envelope
    pub fn envelope(&self) -> Value {
        json!({ "success": true, "data": self.data() })
    }
}
