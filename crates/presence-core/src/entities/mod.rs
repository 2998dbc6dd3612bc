//! Domain entities - presence snapshot and its parts

mod avatar;
mod snapshot;

pub use avatar::{
    avatar_url, default_avatar_index, default_avatar_url, ANIMATED_AVATAR_PREFIX, CDN_BASE_URL,
    UNIQUE_USERNAME_DISCRIMINATOR,
};
pub use snapshot::{
    ActiveOn, Activity, ActivityAssets, ActivityTimestamps, PresenceInfo, PresenceSnapshot,
    PresenceStatus, SpotifyInfo, SpotifyTimestamps, UserSummary, LISTENING_ACTIVITY_TYPE,
    SNAPSHOT_SOURCE, SPOTIFY_ACTIVITY_NAME,
};
