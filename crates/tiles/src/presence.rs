//! "Joined 5 minutes ago" and occupancy line of room tiles.

use chrono::{DateTime, Utc};
use roomdeck_core::Entry;
use serde::Serialize;

/// Shown instead of an empty name so the info block keeps its height.
const NBSP: &str = "\u{00A0}";

const SECONDS_PER_DAY: f64 = 86_400.0;
const DAYS_PER_MONTH: f64 = 30.436_875;
const DAYS_PER_YEAR: f64 = 365.242_5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HubPresence {
    /// Relative time of the last activation, e.g. `"3 hours ago"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_joined: Option<String>,
    /// `"<members>/<capacity>"`
    pub occupancy: String,
}

/// Presence line for room entries; `None` for every other kind.
pub fn presence(entry: &Entry, now: DateTime<Utc>) -> Option<HubPresence> {
    if !entry.kind.is_room() {
        return None;
    }
    Some(HubPresence {
        last_joined: entry.last_activated_at.map(|at| relative_time(at, now)),
        occupancy: format!(
            "{}/{}",
            entry.member_count.unwrap_or(0),
            entry.room_size.unwrap_or(0)
        ),
    })
}

/// Name under the tile.
pub fn display_name(entry: &Entry) -> &str {
    if entry.name.is_empty() {
        NBSP
    } else {
        &entry.name
    }
}

/// Humanized distance between `then` and `now`.
///
/// Rounds each unit and switches at 45 seconds, 90 seconds, 45 minutes,
/// 90 minutes, 22 hours, 36 hours, 26 days, 46 days, 11 months and 18 months.
/// Months and years use their average length.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(then);
    let future = delta.num_milliseconds() < 0;
    let secs = (delta.num_milliseconds() as f64 / 1000.0).abs();

    let seconds = secs.round();
    let minutes = (secs / 60.0).round();
    let hours = (secs / 3600.0).round();
    let days = (secs / SECONDS_PER_DAY).round();
    let months = (secs / SECONDS_PER_DAY / DAYS_PER_MONTH).round();
    let years = (secs / SECONDS_PER_DAY / DAYS_PER_YEAR).round();

    let phrase = if seconds <= 44.0 {
        "a few seconds".to_string()
    } else if seconds <= 89.0 {
        "a minute".to_string()
    } else if minutes <= 44.0 {
        format!("{minutes} minutes")
    } else if minutes <= 89.0 {
        "an hour".to_string()
    } else if hours <= 21.0 {
        format!("{hours} hours")
    } else if hours <= 35.0 {
        "a day".to_string()
    } else if days <= 25.0 {
        format!("{days} days")
    } else if days <= 45.0 {
        "a month".to_string()
    } else if months <= 10.0 {
        format!("{months} months")
    } else if months <= 17.0 {
        "a year".to_string()
    } else {
        format!("{years} years")
    };

    if future {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}
