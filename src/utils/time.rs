//! Time utilities: turning API timestamps into a short clock reading.

use chrono::{DateTime, Local, NaiveDateTime, NaiveTime};
use tracing::warn;

/// Shown when a timestamp is missing or unreadable.
pub const PLACEHOLDER: &str = "-";

/// Parse an API timestamp into a local wall-clock time.
///
/// Offset-aware values (`...Z`, `...+09:00`) are converted to the local
/// zone; naive date-times and bare times are taken as they are.
pub fn parse_timestamp(raw: &str) -> Option<NaiveTime> {
    let s = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).time());
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.time());
        }
    }

    for fmt in ["%H:%M:%S%.f", "%H:%M"] {
        if let Ok(t) = NaiveTime::parse_from_str(s, fmt) {
            return Some(t);
        }
    }

    None
}

/// `HH:MM` for a timestamp, the placeholder dash when absent or unreadable.
pub fn format_clock(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => PLACEHOLDER.to_string(),
        Some(s) => match parse_timestamp(s) {
            Some(t) => t.format("%H:%M").to_string(),
            None => {
                warn!(timestamp = s, "unreadable timestamp");
                PLACEHOLDER.to_string()
            }
        },
    }
}
