//! Core domain types for the hazard report console.
//!
//! This crate contains shared types used across all packages:
//! - Report and its closed enumerations (hazard type, severity, status)
//! - Sort directives and the header toggle rule
//! - Selection helpers and timestamp formatting for the report table

mod config;
mod error;
mod report;
pub mod selection;
mod sort;
pub mod time;

pub use config::DisplayConfig;
pub use error::ReportError;
pub use report::{
    Coordinates, HazardType, Location, ModerationRequest, Report, ReportId, ReportStatus,
    Reporter, Severity, apply_moderation, parse_reports,
};
pub use sort::{SortColumn, SortDirective, SortOrder, sort_reports};
pub use time::{TimestampLabel, format_timestamp};
