//! Report detail panel component.

use dioxus::prelude::*;
use hazard_core::{DisplayConfig, ModerationRequest, Report};

use super::{HazardLabel, SeverityBadge, StatusBadge};

/// Props for ReportDetail component.
#[derive(Props, Clone, PartialEq)]
pub struct ReportDetailProps {
    /// The report to display.
    pub report: Report,
    /// Callback when close is clicked.
    pub on_close: EventHandler<()>,
    /// Callback when verify is clicked.
    pub on_verify: EventHandler<ModerationRequest>,
    /// Callback when reject is clicked.
    pub on_reject: EventHandler<ModerationRequest>,
}

/// Detail panel component for displaying full report information.
#[component]
pub fn ReportDetail(props: ReportDetailProps) -> Element {
    let report = props.report.clone();
    let id = report.id;
    let config = try_use_context::<DisplayConfig>().unwrap_or_default();
    let can_moderate = report.status.is_actionable();

    let observed = report
        .timestamp
        .with_timezone(&config.offset())
        .format("%d %b %Y, %I:%M %P")
        .to_string();
    let coordinates = report
        .location
        .coordinates
        .map(|c| c.display(config.coordinate_precision));

    let raw_json = serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string());

    rsx! {
        div { class: "report-detail-panel",
            div { class: "report-detail-header",
                h3 { "Report Details" }
                button {
                    class: "btn-close",
                    onclick: move |_| props.on_close.call(()),
                    "x"
                }
            }

            div { class: "report-detail-content",
                div { class: "detail-row",
                    span { class: "detail-label", "ID" }
                    span { class: "detail-value", "{report.id}" }
                }

                div { class: "detail-row",
                    span { class: "detail-label", "Hazard" }
                    HazardLabel { hazard: report.hazard_type }
                }

                div { class: "detail-row",
                    span { class: "detail-label", "Severity" }
                    SeverityBadge { severity: report.severity }
                }

                div { class: "detail-row",
                    span { class: "detail-label", "Status" }
                    StatusBadge { status: report.status }
                }

                div { class: "detail-row",
                    span { class: "detail-label", "Observed" }
                    span { class: "detail-value", "{observed}" }
                }

                div { class: "detail-row",
                    span { class: "detail-label", "Location" }
                    span { class: "detail-value", "{report.location.address}" }
                }

                if let Some(coords) = coordinates {
                    div { class: "detail-row",
                        span { class: "detail-label", "Coordinates" }
                        span { class: "detail-value tabular-nums", "{coords}" }
                    }
                }

                if let Some(ref reporter) = report.reporter {
                    div { class: "detail-row",
                        span { class: "detail-label", "Reporter" }
                        span { class: "detail-value", "{reporter.name} ({reporter.phone})" }
                    }
                }

                div { class: "detail-section",
                    h4 { "Raw" }
                    pre { class: "payload-json", "{raw_json}" }
                }
            }

            if can_moderate {
                div { class: "report-detail-actions",
                    button {
                        class: "btn btn-success",
                        onclick: move |_| props.on_verify.call(ModerationRequest::single(id)),
                        "Verify Report"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| props.on_reject.call(ModerationRequest::single(id)),
                        "Reject Report"
                    }
                }
            }
        }
    }
}
