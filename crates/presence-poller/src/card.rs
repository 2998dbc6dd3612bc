//! One-line presence card
//!
//! Text rendering of a [`PollerState`] for terminals and logs, built from the
//! core display helpers.

use chrono::{DateTime, Utc};
use presence_core::{PresenceSnapshot, SpotifyInfo};

use crate::state::PollerState;

/// Render the state as a single line
pub fn render_card(state: &PollerState, now: DateTime<Utc>) -> String {
    let Some(snapshot) = &state.status else {
        return match &state.error {
            Some(error) => format!("{}: {}", error.title(), error.details()),
            None => "Loading Discord status...".to_string(),
        };
    };

    let mut parts = vec![headline(snapshot)];
    let now_ms = now.timestamp_millis();

    if let Some(activity) = &snapshot.presence.primary_activity {
        let mut text = format!("{}: {}", activity.headline(), activity.name);
        if let Some(details) = &activity.details {
            text.push_str(&format!(" - {details}"));
        }
        if let Some(elapsed) = activity.elapsed(now_ms) {
            text.push_str(&format!(" ({elapsed})"));
        }
        parts.push(text);
    }

    if let Some(spotify) = &snapshot.presence.spotify {
        parts.push(listening(spotify, now_ms));
    }

    let devices = active_devices(snapshot);
    if !devices.is_empty() {
        parts.push(format!("on {}", devices.join(", ")));
    }

    if let Some(error) = &state.error {
        parts.push(format!("stale: {}", error.details()));
    }

    parts.join(" | ")
}

fn headline(snapshot: &PresenceSnapshot) -> String {
    let status = snapshot.presence.status;
    let badges = snapshot.user.flags().badge_labels();

    let mut text = format!(
        "{} [{} {}]",
        snapshot.user.preferred_name(),
        status.label(),
        status.color()
    );
    if !badges.is_empty() {
        text.push_str(&format!(" {{{}}}", badges.join(", ")));
    }
    text
}

fn listening(spotify: &SpotifyInfo, now_ms: i64) -> String {
    format!(
        "Listening to {} by {} ({:.0}%)",
        spotify.song,
        spotify.artist,
        spotify.progress(now_ms) * 100.0
    )
}

fn active_devices(snapshot: &PresenceSnapshot) -> Vec<&'static str> {
    let active_on = snapshot.presence.active_on;
    [
        (active_on.desktop, "desktop"),
        (active_on.web, "web"),
        (active_on.mobile, "mobile"),
        (active_on.embedded, "embedded"),
    ]
    .into_iter()
    .filter_map(|(active, name)| active.then_some(name))
    .collect()
}
