//! Admin console components for moderating hazard reports.

mod bulk_action_bar;
mod pages;
mod report_detail;
mod report_row;
mod report_table;
mod status_badge;

pub use bulk_action_bar::BulkActionBar;
pub use pages::{AdminReportsPage, sample_reports};
pub use report_detail::ReportDetail;
pub use report_row::ReportRow;
pub use report_table::{ReportTable, ReportTableProps, SortableHeader};
pub use status_badge::{HazardLabel, SeverityBadge, StatusBadge};
