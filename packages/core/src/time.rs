//! Timestamp formatting for report rows.

use chrono::{DateTime, Utc};

use crate::DisplayConfig;

/// The two lines shown in a report's time cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampLabel {
    /// Relative label ("12m ago", "3h ago") or absolute day/month/time.
    pub primary: String,
    /// Absolute calendar date, always present.
    pub date: String,
}

/// Format a report timestamp relative to `now`.
///
/// Elapsed time is truncated to whole minutes and hours. Timestamps in the
/// future count as zero elapsed.
pub fn format_timestamp(
    timestamp: DateTime<Utc>,
    now: DateTime<Utc>,
    config: &DisplayConfig,
) -> TimestampLabel {
    let elapsed = now.signed_duration_since(timestamp);
    let minutes = elapsed.num_minutes().max(0);
    let hours = elapsed.num_hours().max(0);
    let local = timestamp.with_timezone(&config.offset());

    let primary = if minutes < config.relative_minutes_limit {
        format!("{minutes}m ago")
    } else if hours < config.relative_hours_limit {
        format!("{hours}h ago")
    } else {
        local.format("%d %b, %I:%M %P").to_string()
    };

    TimestampLabel {
        primary,
        date: local.format("%d/%m/%Y").to_string(),
    }
}
