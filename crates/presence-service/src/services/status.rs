//! Status service
//!
//! Fetches the configured user's presence from Lanyard and normalizes it into
//! a [`PresenceSnapshot`]. Stateless: every call performs one upstream request.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use presence_common::Environment;
use presence_core::{
    avatar_url, ActiveOn, Activity, FetchDebug, PresenceInfo, PresenceSnapshot, Snowflake,
    SpotifyInfo, StatusError, StatusResult, StatusSource, UserSummary,
};
use tracing::{error, info, instrument, warn};

use crate::lanyard::{LanyardClient, LanyardError, LanyardPresence};

/// Status service
#[derive(Debug, Clone)]
pub struct StatusService {
    client: LanyardClient,
    user_id: Snowflake,
    expose_debug: bool,
}

impl StatusService {
    /// Create a status service for one fixed user.
    ///
    /// Outside production, `FETCH_ERROR`s carry the error chain as `debug`.
    pub fn new(client: LanyardClient, user_id: Snowflake, env: Environment) -> Self {
        Self {
            client,
            user_id,
            expose_debug: !env.is_production(),
        }
    }

    pub fn user_id(&self) -> Snowflake {
        self.user_id
    }

    /// Fetch and normalize the current presence
    #[instrument(skip(self), fields(user_id = %self.user_id))]
    pub async fn current_status(&self) -> StatusResult<PresenceSnapshot> {
        info!("Fetching Discord status");

        let presence = self
            .client
            .fetch_presence(self.user_id)
            .await
            .map_err(|e| self.status_error(e))?;

        let snapshot = normalize(presence, Utc::now()).map_err(|e| self.status_error(e))?;

        info!(
            username = %snapshot.user.username,
            global_name = ?snapshot.user.global_name,
            display_name = ?snapshot.user.display_name,
            status = %snapshot.presence.status,
            activities = snapshot.presence.activities.len(),
            has_spotify = snapshot.presence.spotify.is_some(),
            desktop = snapshot.presence.active_on.desktop,
            web = snapshot.presence.active_on.web,
            mobile = snapshot.presence.active_on.mobile,
            "Successfully processed Discord status"
        );

        Ok(snapshot)
    }

    /// Classify an upstream failure
    fn status_error(&self, err: LanyardError) -> StatusError {
        match err {
            LanyardError::NotFound => StatusError::user_not_found(),
            LanyardError::RateLimited => StatusError::rate_limited(),
            other => {
                error!(error = %other, "Discord API error");
                let status_error =
                    StatusError::fetch_error(other.to_string(), self.user_id.to_string());
                if self.expose_debug {
                    status_error.with_debug(FetchDebug::from_error(&other))
                } else {
                    status_error
                }
            }
        }
    }
}

#[async_trait]
impl StatusSource for StatusService {
    async fn fetch_status(&self) -> StatusResult<PresenceSnapshot> {
        self.current_status().await
    }
}

/// Normalize a Lanyard presence into a snapshot stamped with `now`.
///
/// Fails only when the payload has no user record.
pub fn normalize(
    presence: LanyardPresence,
    now: DateTime<Utc>,
) -> Result<PresenceSnapshot, LanyardError> {
    let user = presence.discord_user.ok_or(LanyardError::MissingUser)?;

    let user = UserSummary {
        avatar_url: avatar_url(user.id, &user.discriminator, user.avatar.as_deref()),
        id: user.id,
        username: user.username,
        discriminator: user.discriminator,
        global_name: user.global_name.filter(|name| !name.is_empty()),
        display_name: user.display_name.filter(|name| !name.is_empty()),
        public_flags: user.public_flags.unwrap_or(0),
    };

    // the raw block may linger after playback stops
    let spotify = match presence.spotify {
        Some(raw) if presence.listening_to_spotify => serde_json::from_value::<SpotifyInfo>(raw)
            .map_err(|e| warn!(error = %e, "Ignoring malformed Spotify block"))
            .ok(),
        _ => None,
    };

    let active_on = ActiveOn {
        web: presence.active_on_discord_web,
        desktop: presence.active_on_discord_desktop,
        mobile: presence.active_on_discord_mobile,
        embedded: presence.active_on_discord_embedded,
    };

    let info = PresenceInfo::new(
        presence.discord_status,
        presence.activities.into_iter().map(Activity::from),
        spotify,
        active_on,
    );

    Ok(PresenceSnapshot::new(user, info, now))
}
