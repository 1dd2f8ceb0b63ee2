//! Reports page - moderation console for submitted hazard reports.

use chrono::Utc;
use dioxus::prelude::*;
use hazard_core::selection::{retain_present, select_all, toggle_one};
use hazard_core::{
    DisplayConfig, ModerationRequest, Report, ReportError, ReportId, ReportStatus,
    SortDirective, apply_moderation, parse_reports, sort_reports,
};

use crate::admin::{ReportDetail, ReportTable};

const SAMPLE_REPORTS: &str = include_str!("../../../assets/sample_reports.json");

/// Relative timestamps are recomputed this often.
const CLOCK_INTERVAL_MS: u32 = 60_000;

/// Reports bundled with the console for demonstration.
pub fn sample_reports() -> Result<Vec<Report>, ReportError> {
    parse_reports(SAMPLE_REPORTS)
}

/// Reports page component.
#[component]
pub fn AdminReportsPage() -> Element {
    let config = use_context_provider(DisplayConfig::default);

    let loaded = use_hook(|| {
        sample_reports().map_err(|e| {
            tracing::warn!(error = %e, "failed to load sample reports");
            format!("Failed to load reports: {}", e)
        })
    });
    let initial = loaded.clone();
    let mut reports = use_signal(move || initial.clone().unwrap_or_default());
    let mut error = use_signal(move || loaded.clone().err());

    let mut selected = use_signal(Vec::<ReportId>::new);
    let mut sort = use_signal(SortDirective::default);
    let mut viewing = use_signal(|| None::<ReportId>);
    let mut now = use_signal(Utc::now);

    // Keep relative labels fresh
    let _clock = use_coroutine(move |_rx: UnboundedReceiver<()>| async move {
        loop {
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::TimeoutFuture::new(CLOCK_INTERVAL_MS).await;

            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(std::time::Duration::from_millis(CLOCK_INTERVAL_MS as u64)).await;

            now.set(Utc::now());
        }
    });

    let sorted = use_memo(move || {
        let mut list = reports();
        sort_reports(&mut list, sort());
        list
    });

    let mut moderate = move |request: ModerationRequest, status: ReportStatus| {
        let changed = apply_moderation(&mut reports.write(), &request.ids, status);
        tracing::info!(
            requested = request.ids.len(),
            changed,
            bulk = request.bulk,
            status = %status,
            "moderated reports"
        );
        selected.write().retain(|id| !request.ids.contains(id));
        retain_present(&mut selected.write(), &reports.read());
    };

    let on_verify = move |request: ModerationRequest| moderate(request, ReportStatus::Verified);
    let on_reject = move |request: ModerationRequest| moderate(request, ReportStatus::Rejected);

    let viewed_report = viewing().and_then(|id| reports().into_iter().find(|r| r.id == id));

    let counts = {
        let list = reports.read();
        let count = |status: ReportStatus| list.iter().filter(|r| r.status == status).count();
        (
            list.len(),
            count(ReportStatus::Pending),
            count(ReportStatus::Verified),
            count(ReportStatus::Rejected),
        )
    };
    let (total, pending, verified, rejected) = counts;
    let offset_label = config.offset().to_string();

    rsx! {
        div { class: "page-container",
            // Page header
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Hazard Reports" }
                    p { class: "page-description",
                        "Review citizen hazard reports. Times shown in UTC{offset_label}."
                    }
                }
            }

            // Error banner
            if let Some(err) = error() {
                div { class: "error-banner",
                    span { "{err}" }
                    button {
                        onclick: move |_| error.set(None),
                        "×"
                    }
                }
            }

            // Stats summary
            div { class: "stats-grid",
                div { class: "stat-card",
                    div { class: "stat-card-value", "{total}" }
                    div { class: "stat-card-label", "Total Reports" }
                }
                div { class: "stat-card stat-card-accent",
                    div { class: "stat-card-value", "{pending}" }
                    div { class: "stat-card-label", "Pending" }
                }
                div { class: "stat-card stat-card-success",
                    div { class: "stat-card-value", "{verified}" }
                    div { class: "stat-card-label", "Verified" }
                }
                div { class: "stat-card stat-card-danger",
                    div { class: "stat-card-value", "{rejected}" }
                    div { class: "stat-card-label", "Rejected" }
                }
            }

            div { class: "reports-layout",
                div { class: "card",
                    div { class: "card-header",
                        h2 { class: "card-title", "Reports" }
                        span { class: "card-count", "{total} total" }
                    }
                    ReportTable {
                        reports: sorted(),
                        selected: selected(),
                        sort_by: sort().column,
                        sort_order: sort().order,
                        now: now(),
                        on_sort: move |next: SortDirective| sort.set(next),
                        on_select_report: move |(id, checked): (ReportId, bool)| {
                            toggle_one(&mut selected.write(), id, checked)
                        },
                        on_select_all: move |checked: bool| {
                            let ids = select_all(&reports.read(), checked);
                            selected.set(ids);
                        },
                        on_view_report: move |report: Report| viewing.set(Some(report.id)),
                        on_verify_report: on_verify,
                        on_reject_report: on_reject,
                    }
                }

                if let Some(report) = viewed_report {
                    ReportDetail {
                        report,
                        on_close: move |_| viewing.set(None),
                        on_verify,
                        on_reject,
                    }
                }
            }
        }
    }
}
