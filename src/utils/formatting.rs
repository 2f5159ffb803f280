//! Display formatting for tracked time, datetimes and member names.

use crate::models::metadata::Member;
use chrono::{DateTime, Local};

/// Render a second count as `Xh Ym` (plus a seconds part when allowed).
pub fn format_time(seconds: i64, with_seconds: bool) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    if with_seconds && secs > 0 {
        parts.push(format!("{secs}s"));
    }

    if parts.is_empty() {
        if with_seconds { "0s" } else { "0m" }.to_string()
    } else {
        parts.join(" ")
    }
}

/// Render epoch seconds as a local datetime, or time-only when the date is
/// already clear from context (same-day range ends).
pub fn format_datetime(epoch_seconds: i64, time_only: bool) -> String {
    let Some(dt) = DateTime::from_timestamp(epoch_seconds, 0) else {
        return "N/A".to_string();
    };
    let local = dt.with_timezone(&Local);

    if time_only {
        local.format("%H:%M").to_string()
    } else {
        local.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Display name for a member: full name, else username, else the raw id.
pub fn format_member_name(member: &Member) -> String {
    member
        .full_name
        .clone()
        .or_else(|| member.username.clone())
        .unwrap_or_else(|| member.id.clone())
}
