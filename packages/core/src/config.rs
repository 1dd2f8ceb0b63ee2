//! Display configuration for the report table.

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::ReportError;

/// Settings that control how report cells are formatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Offset from UTC used for absolute dates (minutes). Defaults to IST.
    pub utc_offset_minutes: i32,
    /// Decimal places shown for coordinates.
    pub coordinate_precision: usize,
    /// Below this many elapsed minutes the label reads "<n>m ago".
    pub relative_minutes_limit: i64,
    /// Below this many elapsed hours the label reads "<n>h ago".
    pub relative_hours_limit: i64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 330,
            coordinate_precision: 4,
            relative_minutes_limit: 60,
            relative_hours_limit: 24,
        }
    }
}

impl DisplayConfig {
    /// Parse a config from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Offset used for absolute dates. Out-of-range values fall back to UTC.
    pub fn offset(&self) -> FixedOffset {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_ist_and_four_decimals() {
        let config = DisplayConfig::default();
        assert_eq!(config.offset().local_minus_utc(), 330 * 60);
        assert_eq!(config.coordinate_precision, 4);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = DisplayConfig::from_json(r#"{ "utc_offset_minutes": 0 }"#).expect("parse");
        assert_eq!(config.utc_offset_minutes, 0);
        assert_eq!(config.relative_minutes_limit, 60);
        assert_eq!(config.relative_hours_limit, 24);
    }

    #[test]
    fn out_of_range_offset_falls_back_to_utc() {
        let config = DisplayConfig {
            utc_offset_minutes: 100_000,
            ..DisplayConfig::default()
        };
        assert_eq!(config.offset().local_minus_utc(), 0);

        let config = DisplayConfig::from_json(r#"{ "utc_offset_minutes": 40000000 }"#)
            .expect("parse");
        assert!(config.utc_offset_minutes > i32::MAX / 60);
        assert_eq!(config.offset().local_minus_utc(), 0);
    }
}
