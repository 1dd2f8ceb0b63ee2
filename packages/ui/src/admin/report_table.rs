//! Sortable, selectable table of hazard reports.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use hazard_core::selection::is_all_selected;
use hazard_core::{
    DisplayConfig, ModerationRequest, Report, ReportId, SortColumn, SortDirective, SortOrder,
};

use super::{BulkActionBar, ReportRow};
use crate::primitives::{Checkbox, Icon, IconName};

/// Props for ReportTable component.
///
/// Every prop is optional. Reports, selection, and sort state belong to the
/// caller; the table only reads them and reports user intent back through the
/// callbacks.
#[derive(Props, Clone, PartialEq)]
pub struct ReportTableProps {
    /// Reports to display, in the order they should appear.
    #[props(default)]
    pub reports: Vec<Report>,
    /// Identifiers of the checked rows.
    #[props(default)]
    pub selected: Vec<ReportId>,
    /// Row checkbox toggled: `(id, checked)`.
    pub on_select_report: Option<EventHandler<(ReportId, bool)>>,
    /// Header checkbox toggled.
    pub on_select_all: Option<EventHandler<bool>>,
    /// Row body or view button clicked.
    pub on_view_report: Option<EventHandler<Report>>,
    pub on_verify_report: Option<EventHandler<ModerationRequest>>,
    pub on_reject_report: Option<EventHandler<ModerationRequest>>,
    /// Active sort column.
    #[props(default)]
    pub sort_by: SortColumn,
    /// Active sort direction.
    #[props(default)]
    pub sort_order: SortOrder,
    /// Header clicked; receives the directive the caller should apply.
    pub on_sort: Option<EventHandler<SortDirective>>,
    /// Reference time for relative timestamps. Defaults to the wall clock.
    pub now: Option<DateTime<Utc>>,
}

fn emit<T: 'static>(handler: Option<EventHandler<T>>, value: T) {
    if let Some(handler) = handler {
        handler.call(value);
    }
}

/// Table of hazard reports with row selection and moderation actions.
#[component]
pub fn ReportTable(props: ReportTableProps) -> Element {
    let mut hovered = use_signal(|| None::<ReportId>);
    let config = try_use_context::<DisplayConfig>().unwrap_or_default();

    let select_report = props.on_select_report;
    let view_report = props.on_view_report;
    let verify_report = props.on_verify_report;
    let reject_report = props.on_reject_report;
    let sort_handler = props.on_sort;

    let on_select = use_callback(move |change: (ReportId, bool)| emit(select_report, change));
    let on_view = use_callback(move |report: Report| emit(view_report, report));
    let on_verify = use_callback(move |request: ModerationRequest| emit(verify_report, request));
    let on_reject = use_callback(move |request: ModerationRequest| emit(reject_report, request));
    let on_hover = use_callback(move |id: Option<ReportId>| hovered.set(id));
    let on_sort = use_callback(move |next: SortDirective| {
        tracing::debug!(column = %next.column, order = %next.order, "sort requested");
        emit(sort_handler, next);
    });

    if props.reports.is_empty() {
        return rsx! {
            div { class: "empty-state",
                div { class: "empty-state-icon",
                    Icon { name: IconName::AlertTriangle }
                }
                h3 { "No Reports Found" }
                p { class: "hint", "Submitted hazard reports will appear here" }
            }
        };
    }

    let now = props.now.unwrap_or_else(Utc::now);
    let sort = SortDirective::new(props.sort_by, props.sort_order);
    let select_all = props.on_select_all;
    let all_selected = is_all_selected(props.selected.len(), props.reports.len());

    rsx! {
        div { class: "report-table",
            if !props.selected.is_empty() {
                BulkActionBar { selected: props.selected.clone(), on_verify, on_reject }
            }

            div { class: "table-container",
                table { class: "data-table",
                    thead {
                        tr {
                            th { class: "cell-select",
                                Checkbox {
                                    checked: all_selected,
                                    label: "Select all reports",
                                    onchange: move |checked: bool| emit(select_all, checked),
                                }
                            }
                            for column in SortColumn::ALL {
                                SortableHeader { key: "{column}", column, sort, on_sort }
                            }
                            th { class: "text-right", "Actions" }
                        }
                    }
                    tbody {
                        for report in props.reports.iter() {
                            ReportRow {
                                key: "{report.id}",
                                report: report.clone(),
                                selected: props.selected.contains(&report.id),
                                hovered: hovered() == Some(report.id),
                                now,
                                config: config.clone(),
                                on_select,
                                on_view,
                                on_verify,
                                on_reject,
                                on_hover,
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Clickable header cell with a sort indicator.
///
/// A click sends the directive the table should move to, following
/// [`SortDirective::toggle`].
#[component]
pub fn SortableHeader(
    column: SortColumn,
    sort: SortDirective,
    on_sort: EventHandler<SortDirective>,
) -> Element {
    let active = sort.column == column;
    let (icon, aria_sort) = match (active, sort.order) {
        (false, _) => (IconName::ChevronsUpDown, "none"),
        (true, SortOrder::Asc) => (IconName::ChevronUp, "ascending"),
        (true, SortOrder::Desc) => (IconName::ChevronDown, "descending"),
    };
    let active_class = if active { "sort-active" } else { "" };
    let title = column.title();

    rsx! {
        th {
            class: "sortable {active_class}",
            aria_sort,
            onclick: move |_| on_sort.call(sort.toggle(column)),
            div { class: "th-content",
                span { "{title}" }
                Icon { name: icon, class: "sort-indicator" }
            }
        }
    }
}
