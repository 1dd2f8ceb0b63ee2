//! Sort directives for the report table.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::Report;

/// Sortable column of the report table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortColumn {
    #[default]
    Timestamp,
    HazardType,
    Severity,
    Location,
    Reporter,
    Status,
}

impl SortColumn {
    /// Columns in header order.
    pub const ALL: [SortColumn; 6] = [
        SortColumn::Timestamp,
        SortColumn::HazardType,
        SortColumn::Severity,
        SortColumn::Location,
        SortColumn::Reporter,
        SortColumn::Status,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::Timestamp => "timestamp",
            SortColumn::HazardType => "hazardType",
            SortColumn::Severity => "severity",
            SortColumn::Location => "location",
            SortColumn::Reporter => "reporter",
            SortColumn::Status => "status",
        }
    }

    /// Header text.
    pub fn title(&self) -> &'static str {
        match self {
            SortColumn::Timestamp => "Time",
            SortColumn::HazardType => "Hazard",
            SortColumn::Severity => "Severity",
            SortColumn::Location => "Location",
            SortColumn::Reporter => "Reporter",
            SortColumn::Status => "Status",
        }
    }
}

impl std::fmt::Display for SortColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active sort column and direction. Defaults to newest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortDirective {
    pub column: SortColumn,
    pub order: SortOrder,
}

impl SortDirective {
    pub fn new(column: SortColumn, order: SortOrder) -> Self {
        Self { column, order }
    }

    /// Directive produced by clicking the header of `clicked`.
    ///
    /// Only an ascending active column flips to descending; every other
    /// click selects `clicked` ascending.
    pub fn toggle(self, clicked: SortColumn) -> Self {
        let order = if self.column == clicked && self.order == SortOrder::Asc {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        };
        Self::new(clicked, order)
    }
}

fn compare(a: &Report, b: &Report, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Timestamp => a.timestamp.cmp(&b.timestamp),
        SortColumn::HazardType => a.hazard_type.as_str().cmp(b.hazard_type.as_str()),
        SortColumn::Severity => a.severity.cmp(&b.severity),
        SortColumn::Location => a
            .location
            .address
            .to_lowercase()
            .cmp(&b.location.address.to_lowercase()),
        SortColumn::Reporter => {
            let name = |r: &Report| r.reporter.as_ref().map(|p| p.name.to_lowercase());
            name(a).cmp(&name(b))
        }
        SortColumn::Status => a.status.cmp(&b.status),
    }
}

/// Order reports in place. Ties keep their existing relative order.
pub fn sort_reports(reports: &mut [Report], directive: SortDirective) {
    reports.sort_by(|a, b| {
        let ordering = compare(a, b, directive.column);
        match directive.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HazardType, ReportStatus, Severity};
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn ascending_active_column_flips_to_descending() {
        let current = SortDirective::new(SortColumn::Severity, SortOrder::Asc);
        assert_eq!(
            current.toggle(SortColumn::Severity),
            SortDirective::new(SortColumn::Severity, SortOrder::Desc)
        );
    }

    #[test]
    fn descending_active_column_flips_to_ascending() {
        let current = SortDirective::new(SortColumn::Severity, SortOrder::Desc);
        assert_eq!(
            current.toggle(SortColumn::Severity),
            SortDirective::new(SortColumn::Severity, SortOrder::Asc)
        );
    }

    #[test]
    fn other_column_starts_ascending() {
        for order in [SortOrder::Asc, SortOrder::Desc] {
            let current = SortDirective::new(SortColumn::Timestamp, order);
            assert_eq!(
                current.toggle(SortColumn::Status),
                SortDirective::new(SortColumn::Status, SortOrder::Asc)
            );
        }
    }

    #[test]
    fn default_is_newest_first() {
        assert_eq!(
            SortDirective::default(),
            SortDirective::new(SortColumn::Timestamp, SortOrder::Desc)
        );
    }

    #[test]
    fn column_wire_names() {
        let json = serde_json::to_string(&SortColumn::HazardType).expect("serialize");
        assert_eq!(json, "\"hazardType\"");
        assert_eq!(SortColumn::ALL.len(), 6);
        assert_eq!(SortColumn::ALL[0].title(), "Time");
    }

    fn fixture() -> Vec<Report> {
        let base = Utc.with_ymd_and_hms(2026, 10, 16, 6, 0, 0).unwrap();
        vec![
            Report::new(HazardType::Tsunami, "puri beach")
                .with_timestamp(base)
                .with_severity(Severity::Critical)
                .with_status(ReportStatus::Verified)
                .with_reporter("Meera", "+91 90000 00001"),
            Report::new(HazardType::Erosion, "Alappuzha")
                .with_timestamp(base + Duration::hours(2))
                .with_severity(Severity::Low),
            Report::new(HazardType::Flooding, "Kochi")
                .with_timestamp(base + Duration::hours(1))
                .with_severity(Severity::High)
                .with_status(ReportStatus::Rejected)
                .with_reporter("arjun", "+91 90000 00002"),
        ]
    }

    fn addresses(reports: &[Report]) -> Vec<&str> {
        reports.iter().map(|r| r.location.address.as_str()).collect()
    }

    #[test]
    fn sorts_by_timestamp_descending() {
        let mut reports = fixture();
        sort_reports(&mut reports, SortDirective::default());
        assert_eq!(addresses(&reports), ["Alappuzha", "Kochi", "puri beach"]);
    }

    #[test]
    fn sorts_by_severity_rank() {
        let mut reports = fixture();
        sort_reports(
            &mut reports,
            SortDirective::new(SortColumn::Severity, SortOrder::Asc),
        );
        assert_eq!(addresses(&reports), ["Alappuzha", "Kochi", "puri beach"]);
    }

    #[test]
    fn sorts_location_case_insensitively() {
        let mut reports = fixture();
        sort_reports(
            &mut reports,
            SortDirective::new(SortColumn::Location, SortOrder::Asc),
        );
        assert_eq!(addresses(&reports), ["Alappuzha", "Kochi", "puri beach"]);
    }

    #[test]
    fn missing_reporter_sorts_first_ascending() {
        let mut reports = fixture();
        sort_reports(
            &mut reports,
            SortDirective::new(SortColumn::Reporter, SortOrder::Asc),
        );
        assert_eq!(addresses(&reports), ["Alappuzha", "Kochi", "puri beach"]);
    }

    #[test]
    fn sorts_status_by_lifecycle() {
        let mut reports = fixture();
        sort_reports(
            &mut reports,
            SortDirective::new(SortColumn::Status, SortOrder::Desc),
        );
        assert_eq!(addresses(&reports), ["Kochi", "puri beach", "Alappuzha"]);
    }
}
