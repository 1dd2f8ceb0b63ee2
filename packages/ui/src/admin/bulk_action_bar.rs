//! Banner shown above the report table while rows are selected.

use dioxus::prelude::*;
use hazard_core::selection::bulk_summary;
use hazard_core::{ModerationRequest, ReportId};

use crate::primitives::{Button, ButtonVariant, Icon, IconName};

/// Props for BulkActionBar component.
#[derive(Props, Clone, PartialEq)]
pub struct BulkActionBarProps {
    /// Identifiers of the selected reports.
    pub selected: Vec<ReportId>,
    /// Receives a bulk request for every selected report.
    pub on_verify: EventHandler<ModerationRequest>,
    pub on_reject: EventHandler<ModerationRequest>,
}

/// Selection summary with bulk verify and reject buttons.
#[component]
pub fn BulkActionBar(props: BulkActionBarProps) -> Element {
    let summary = bulk_summary(props.selected.len());
    let for_verify = props.selected.clone();
    let for_reject = props.selected.clone();

    rsx! {
        div { class: "bulk-action-bar",
            span { class: "bulk-summary", "{summary}" }
            div { class: "bulk-actions",
                Button {
                    variant: ButtonVariant::Success,
                    onclick: move |_| {
                        props.on_verify.call(ModerationRequest::bulk(for_verify.clone()))
                    },
                    Icon { name: IconName::Check }
                    "Bulk Verify"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: move |_| {
                        props.on_reject.call(ModerationRequest::bulk(for_reject.clone()))
                    },
                    Icon { name: IconName::X }
                    "Bulk Reject"
                }
            }
        }
    }
}
