//! Formatting utilities used for launcher items and terminal output.

/// `{hours}h {minutes}m`, negative input counts as zero.
pub fn mins2readable(mins: i64) -> String {
    let m = mins.max(0);
    format!("{}h {}m", m / 60, m % 60)
}

/// First `max` characters of `s` (characters, not bytes).
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
