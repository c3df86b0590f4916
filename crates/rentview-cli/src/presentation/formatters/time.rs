use chrono::{DateTime, Utc};

/// Display-only rendering of a rental term's end instant.
pub fn format_expiration(ends: DateTime<Utc>) -> String {
    ends.format("%Y-%m-%d %H:%M UTC").to_string()
}
