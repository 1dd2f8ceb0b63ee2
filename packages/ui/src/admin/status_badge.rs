//! Status, severity, and hazard badge components.

use dioxus::prelude::*;
use hazard_core::{HazardType, ReportStatus, Severity};

use crate::primitives::{Icon, IconName};

/// Badge for displaying a report's moderation status.
#[component]
pub fn StatusBadge(status: ReportStatus) -> Element {
    let (bg_class, icon, text) = match status {
        ReportStatus::Pending => ("badge-pending", IconName::Clock, "Pending"),
        ReportStatus::Verified => ("badge-verified", IconName::CheckCircle, "Verified"),
        ReportStatus::Rejected => ("badge-rejected", IconName::XCircle, "Rejected"),
    };

    rsx! {
        span {
            class: "status-badge {bg_class}",
            Icon { name: icon }
            {text}
        }
    }
}

/// Color-coded badge for a report's severity.
#[component]
pub fn SeverityBadge(severity: Severity) -> Element {
    let bg_class = match severity {
        Severity::Low => "severity-low",
        Severity::Medium => "severity-medium",
        Severity::High => "severity-high",
        Severity::Critical => "severity-critical",
    };
    let text = severity.as_str();

    rsx! {
        span {
            class: "severity-badge capitalize {bg_class}",
            {text}
        }
    }
}

/// Icon plus label for a hazard type.
#[component]
pub fn HazardLabel(hazard: HazardType) -> Element {
    let icon = match hazard {
        HazardType::Tsunami => IconName::Waves,
        HazardType::Flooding => IconName::Droplets,
        HazardType::HighWaves => IconName::Wind,
        HazardType::StormSurge => IconName::CloudLightning,
        HazardType::Erosion => IconName::Mountain,
        HazardType::Other => IconName::AlertTriangle,
    };
    let label = hazard.label();

    rsx! {
        div { class: "hazard-label",
            Icon { name: icon, class: "hazard-icon" }
            span { class: "capitalize", "{label}" }
        }
    }
}
