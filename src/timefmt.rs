use chrono::{DateTime, Utc};

/// Render a record timestamp as a short relative phrase ("5m ago",
/// "2 weeks ago"), falling back to an absolute date past 30 days.
/// Accepts Unix seconds or milliseconds; sub-1970 garbage renders as
/// "Unknown time" rather than something misleading.
pub fn format_relative(timestamp: i64) -> String {
    format_relative_at(timestamp, Utc::now().timestamp_millis())
}

fn format_relative_at(timestamp: i64, now_ms: i64) -> String {
    if timestamp <= 0 {
        return "Unknown time".to_string();
    }

    // Unix timestamps in seconds stay below this for centuries.
    let ms = if timestamp < 10_000_000_000 {
        timestamp * 1000
    } else {
        timestamp
    };

    let diff = now_ms - ms;
    if diff < 0 {
        return "Just now".to_string();
    }

    let seconds = diff / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if seconds < 60 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    if hours < 24 {
        return format!("{hours}h ago");
    }
    if days <= 6 {
        return format!("{days}d ago");
    }
    if days <= 30 {
        let weeks = days / 7;
        return if weeks == 1 {
            "1 week ago".to_string()
        } else {
            format!("{weeks} weeks ago")
        };
    }

    format_absolute(ms)
}

fn format_absolute(ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(ms) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => "Unknown date".to_string(),
    }
}
