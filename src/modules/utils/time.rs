use chrono::{DateTime, Local, Utc};

/// Format a stored UTC timestamp as local time for display
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
