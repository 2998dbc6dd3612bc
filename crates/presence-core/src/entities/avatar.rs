//! Avatar URL derivation
//!
//! Custom avatars come from the CDN `avatars/` path, animated ones (hash
//! prefixed with `a_`) as GIF. Users without a custom avatar get one of the
//! platform's default avatars.

use crate::value_objects::Snowflake;

/// Discord CDN base URL
pub const CDN_BASE_URL: &str = "https://cdn.discordapp.com";

/// Prefix that marks an animated avatar hash
pub const ANIMATED_AVATAR_PREFIX: &str = "a_";

/// Discriminator reported for accounts on the unique-username system
pub const UNIQUE_USERNAME_DISCRIMINATOR: &str = "0";

/// Number of default avatars for legacy (discriminator) accounts
pub const LEGACY_DEFAULT_AVATARS: u16 = 5;

/// Requested size for custom avatars
const AVATAR_SIZE: u16 = 256;

/// Build the avatar URL for a user.
///
/// Always returns a fully-qualified URL.
pub fn avatar_url(id: Snowflake, discriminator: &str, avatar: Option<&str>) -> String {
    match avatar.filter(|hash| !hash.is_empty()) {
        Some(hash) => {
            let extension = if hash.starts_with(ANIMATED_AVATAR_PREFIX) {
                "gif"
            } else {
                "png"
            };
            format!("{CDN_BASE_URL}/avatars/{id}/{hash}.{extension}?size={AVATAR_SIZE}")
        }
        None => default_avatar_url(id, discriminator),
    }
}

/// Build the default avatar URL for a user without a custom avatar
pub fn default_avatar_url(id: Snowflake, discriminator: &str) -> String {
    format!(
        "{CDN_BASE_URL}/embed/avatars/{}.png",
        default_avatar_index(id, discriminator)
    )
}

/// Default avatar index.
///
/// Unique-username accounts use `(id >> 22) % 6`, legacy accounts use
/// `discriminator % 5`. An unparsable discriminator falls back to 0.
pub fn default_avatar_index(id: Snowflake, discriminator: &str) -> u8 {
    if discriminator == UNIQUE_USERNAME_DISCRIMINATOR {
        id.default_avatar_index()
    } else {
        (discriminator.parse::<u16>().unwrap_or(0) % LEGACY_DEFAULT_AVATARS) as u8
    }
}
