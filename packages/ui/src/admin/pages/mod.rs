//! Admin page components for route-based navigation.

mod reports_page;

pub use reports_page::{AdminReportsPage, sample_reports};
