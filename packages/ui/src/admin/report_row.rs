//! Report row component for displaying a single report in the table.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use hazard_core::{DisplayConfig, ModerationRequest, Report, ReportId, format_timestamp};

use super::{HazardLabel, SeverityBadge, StatusBadge};
use crate::primitives::{ButtonVariant, Checkbox, IconButton, IconName};

/// Props for ReportRow component.
#[derive(Props, Clone, PartialEq)]
pub struct ReportRowProps {
    /// The report to display.
    pub report: Report,
    /// Whether the row checkbox is checked.
    pub selected: bool,
    /// Whether the pointer is over this row.
    #[props(default = false)]
    pub hovered: bool,
    /// Reference time for relative labels.
    pub now: DateTime<Utc>,
    pub config: DisplayConfig,
    /// Callback when the row checkbox is toggled.
    pub on_select: EventHandler<(ReportId, bool)>,
    /// Callback when the row body or view button is clicked.
    pub on_view: EventHandler<Report>,
    pub on_verify: EventHandler<ModerationRequest>,
    pub on_reject: EventHandler<ModerationRequest>,
    /// Callback when the pointer enters (`Some`) or leaves (`None`) the row.
    pub on_hover: EventHandler<Option<ReportId>>,
}

/// Table row component for displaying a single report.
#[component]
pub fn ReportRow(props: ReportRowProps) -> Element {
    let report = props.report.clone();
    let id = report.id;
    let time = format_timestamp(report.timestamp, props.now, &props.config);
    let coordinates = report
        .location
        .coordinates
        .map(|c| c.display(props.config.coordinate_precision));
    let can_moderate = report.status.is_actionable();
    let hover_class = if props.hovered { "hovered" } else { "" };
    let selected_class = if props.selected { "selected" } else { "" };

    // Clone report for each closure that needs it
    let report_for_row = report.clone();
    let report_for_view = report.clone();

    rsx! {
        tr {
            class: "report-row {hover_class} {selected_class}",
            onclick: move |_| props.on_view.call(report_for_row.clone()),
            onmouseenter: move |_| props.on_hover.call(Some(id)),
            onmouseleave: move |_| props.on_hover.call(None),

            td {
                class: "cell-select",
                onclick: move |e| e.stop_propagation(),
                Checkbox {
                    checked: props.selected,
                    label: "Select report",
                    onchange: move |checked: bool| props.on_select.call((id, checked)),
                }
            }
            td { class: "cell-time",
                div { class: "time-primary tabular-nums", "{time.primary}" }
                div { class: "time-secondary text-muted", "{time.date}" }
            }
            td { class: "cell-hazard",
                HazardLabel { hazard: report.hazard_type }
            }
            td { class: "cell-severity",
                SeverityBadge { severity: report.severity }
            }
            td { class: "cell-location",
                div { class: "location-address", "{report.location.address}" }
                if let Some(coords) = coordinates {
                    div { class: "location-coords text-muted tabular-nums", "{coords}" }
                }
            }
            td { class: "cell-reporter",
                if let Some(ref reporter) = report.reporter {
                    div { class: "reporter-name", "{reporter.name}" }
                    div { class: "reporter-phone text-muted", "{reporter.phone}" }
                }
            }
            td { class: "cell-status",
                StatusBadge { status: report.status }
            }
            td {
                class: "cell-actions text-right",
                onclick: move |e| e.stop_propagation(),
                div { class: "row-actions",
                    IconButton {
                        icon: IconName::Eye,
                        title: "View",
                        onclick: move |e: MouseEvent| {
                            e.stop_propagation();
                            props.on_view.call(report_for_view.clone());
                        },
                    }
                    if can_moderate {
                        IconButton {
                            icon: IconName::Check,
                            title: "Verify",
                            variant: ButtonVariant::Success,
                            onclick: move |e: MouseEvent| {
                                e.stop_propagation();
                                props.on_verify.call(ModerationRequest::single(id));
                            },
                        }
                        IconButton {
                            icon: IconName::X,
                            title: "Reject",
                            variant: ButtonVariant::Danger,
                            onclick: move |e: MouseEvent| {
                                e.stop_propagation();
                                props.on_reject.call(ModerationRequest::single(id));
                            },
                        }
                    }
                }
            }
        }
    }
}
