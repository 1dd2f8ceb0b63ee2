//! Selection helpers shared by the table and its callers.

use crate::{Report, ReportId};

/// Whether the header checkbox should render as checked.
pub fn is_all_selected(selected: usize, total: usize) -> bool {
    total > 0 && selected == total
}

/// Banner text for the bulk action bar, e.g. "3 reports selected".
pub fn bulk_summary(count: usize) -> String {
    let noun = if count == 1 { "report" } else { "reports" };
    format!("{count} {noun} selected")
}

/// Apply a single row checkbox toggle to `selected`.
pub fn toggle_one(selected: &mut Vec<ReportId>, id: ReportId, checked: bool) {
    if checked {
        if !selected.contains(&id) {
            selected.push(id);
        }
    } else {
        selected.retain(|s| *s != id);
    }
}

/// Selection after the header checkbox is toggled.
pub fn select_all(reports: &[Report], checked: bool) -> Vec<ReportId> {
    if checked {
        reports.iter().map(|r| r.id).collect()
    } else {
        Vec::new()
    }
}

/// Drop ids that no longer belong to a rendered report.
pub fn retain_present(selected: &mut Vec<ReportId>, reports: &[Report]) {
    selected.retain(|id| reports.iter().any(|r| r.id == *id));
}
