//! Report domain types for hazard observations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use ulid::Ulid;

use crate::ReportError;

/// Unique identifier for a report, using ULID for chronological sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(pub Ulid);

impl ReportId {
    /// Create a new unique report ID.
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Parse a report ID from a string.
    pub fn parse(s: &str) -> Result<Self, ReportError> {
        Ok(Self(Ulid::from_string(s)?))
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ReportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of hazard observed. Unrecognized values collapse into `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "Option<String>")]
pub enum HazardType {
    Tsunami,
    Flooding,
    HighWaves,
    StormSurge,
    Erosion,
    #[default]
    Other,
}

impl HazardType {
    /// Wire name of the hazard type.
    pub fn as_str(&self) -> &'static str {
        match self {
            HazardType::Tsunami => "tsunami",
            HazardType::Flooding => "flooding",
            HazardType::HighWaves => "high-waves",
            HazardType::StormSurge => "storm-surge",
            HazardType::Erosion => "erosion",
            HazardType::Other => "other",
        }
    }

    /// Display label: the wire name with hyphens turned into spaces.
    pub fn label(&self) -> String {
        self.as_str().replace('-', " ")
    }
}

impl From<&str> for HazardType {
    fn from(value: &str) -> Self {
        match value {
            "tsunami" => HazardType::Tsunami,
            "flooding" => HazardType::Flooding,
            "high-waves" => HazardType::HighWaves,
            "storm-surge" => HazardType::StormSurge,
            "erosion" => HazardType::Erosion,
            _ => HazardType::Other,
        }
    }
}

impl From<Option<String>> for HazardType {
    fn from(value: Option<String>) -> Self {
        value.as_deref().map(Self::from).unwrap_or_default()
    }
}

impl std::fmt::Display for HazardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative risk level of a report. Ordered from least to most severe.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl From<&str> for Severity {
    fn from(value: &str) -> Self {
        match value {
            "medium" => Severity::Medium,
            "high" => Severity::High,
            "critical" => Severity::Critical,
            _ => Severity::Low,
        }
    }
}

impl From<Option<String>> for Severity {
    fn from(value: Option<String>) -> Self {
        value.as_deref().map(Self::from).unwrap_or_default()
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Moderation state of a report.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum ReportStatus {
    /// Awaiting a moderator decision.
    #[default]
    Pending,
    /// Confirmed by a moderator.
    Verified,
    /// Dismissed by a moderator.
    Rejected,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Verified => "verified",
            ReportStatus::Rejected => "rejected",
        }
    }

    /// Only pending reports can still be verified or rejected.
    pub fn is_actionable(&self) -> bool {
        matches!(self, ReportStatus::Pending)
    }
}

impl From<&str> for ReportStatus {
    fn from(value: &str) -> Self {
        match value {
            "verified" => ReportStatus::Verified,
            "rejected" => ReportStatus::Rejected,
            _ => ReportStatus::Pending,
        }
    }
}

impl From<Option<String>> for ReportStatus {
    fn from(value: Option<String>) -> Self {
        value.as_deref().map(Self::from).unwrap_or_default()
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lng", alias = "lon")]
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Render as `"lat, lng"` with a fixed number of decimals.
    pub fn display(&self, precision: usize) -> String {
        format!(
            "{:.prec$}, {:.prec$}",
            self.latitude,
            self.longitude,
            prec = precision
        )
    }
}

/// Coordinates as they arrive on the wire; either half may be missing.
#[derive(Deserialize)]
struct PartialCoordinates {
    #[serde(default, alias = "lat")]
    latitude: Option<f64>,
    #[serde(default, alias = "lng", alias = "lon")]
    longitude: Option<f64>,
}

/// A pair with a missing or null half decodes as no coordinates at all.
fn lenient_coordinates<'de, D>(deserializer: D) -> Result<Option<Coordinates>, D::Error>
where
    D: Deserializer<'de>,
{
    let partial = Option::<PartialCoordinates>::deserialize(deserializer)?;
    Ok(partial.and_then(|p| Some(Coordinates::new(p.latitude?, p.longitude?))))
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Where the hazard was observed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Free-text address.
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(
        default,
        deserialize_with = "lenient_coordinates",
        skip_serializing_if = "Option::is_none"
    )]
    pub coordinates: Option<Coordinates>,
}

/// Person who submitted the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reporter {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
}

/// A single hazard observation, displayed as one table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: ReportId,
    /// When the hazard was observed.
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub hazard_type: HazardType,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub status: ReportStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter: Option<Reporter>,
}

impl Report {
    /// Create a new pending report observed now.
    pub fn new(hazard_type: HazardType, address: impl Into<String>) -> Self {
        Self {
            id: ReportId::new(),
            timestamp: Utc::now(),
            hazard_type,
            severity: Severity::default(),
            status: ReportStatus::Pending,
            location: Location {
                address: address.into(),
                coordinates: None,
            },
            reporter: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_status(mut self, status: ReportStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.location.coordinates = Some(Coordinates::new(latitude, longitude));
        self
    }

    pub fn with_reporter(mut self, name: impl Into<String>, phone: impl Into<String>) -> Self {
        self.reporter = Some(Reporter {
            name: name.into(),
            phone: phone.into(),
        });
        self
    }
}

/// Payload of the verify and reject actions.
///
/// Row buttons send a single id with `bulk: false`; the bulk banner sends the
/// whole selection with `bulk: true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationRequest {
    pub ids: Vec<ReportId>,
    pub bulk: bool,
}

impl ModerationRequest {
    pub fn single(id: ReportId) -> Self {
        Self {
            ids: vec![id],
            bulk: false,
        }
    }

    pub fn bulk(ids: Vec<ReportId>) -> Self {
        Self { ids, bulk: true }
    }
}

/// Move the pending reports named in `ids` to `status`.
///
/// Reports that were already moderated are left alone. Returns how many
/// reports changed.
pub fn apply_moderation(reports: &mut [Report], ids: &[ReportId], status: ReportStatus) -> usize {
    let mut changed = 0;
    for report in reports
        .iter_mut()
        .filter(|r| r.status.is_actionable() && ids.contains(&r.id))
    {
        report.status = status;
        changed += 1;
    }
    changed
}

/// Decode a JSON array of reports.
pub fn parse_reports(json: &str) -> Result<Vec<Report>, ReportError> {
    Ok(serde_json::from_str(json)?)
}
