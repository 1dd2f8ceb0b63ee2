use dioxus::prelude::*;

/// Closed set of glyphs the console renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    Eye,
    Check,
    X,
    Clock,
    CheckCircle,
    XCircle,
    Waves,
    Droplets,
    Wind,
    CloudLightning,
    Mountain,
    AlertTriangle,
    ChevronUp,
    ChevronDown,
    ChevronsUpDown,
}

impl IconName {
    /// Kebab-case name, used as the `icon-*` class.
    pub fn as_str(&self) -> &'static str {
        match self {
            IconName::Eye => "eye",
            IconName::Check => "check",
            IconName::X => "x",
            IconName::Clock => "clock",
            IconName::CheckCircle => "check-circle",
            IconName::XCircle => "x-circle",
            IconName::Waves => "waves",
            IconName::Droplets => "droplets",
            IconName::Wind => "wind",
            IconName::CloudLightning => "cloud-lightning",
            IconName::Mountain => "mountain",
            IconName::AlertTriangle => "alert-triangle",
            IconName::ChevronUp => "chevron-up",
            IconName::ChevronDown => "chevron-down",
            IconName::ChevronsUpDown => "chevrons-up-down",
        }
    }

    fn glyph(&self) -> &'static str {
        match self {
            IconName::Eye => "👁",
            IconName::Check => "✓",
            IconName::X => "✕",
            IconName::Clock => "◷",
            IconName::CheckCircle => "✔",
            IconName::XCircle => "✖",
            IconName::Waves => "🌊",
            IconName::Droplets => "💧",
            IconName::Wind => "🌬",
            IconName::CloudLightning => "⛈",
            IconName::Mountain => "⛰",
            IconName::AlertTriangle => "⚠",
            IconName::ChevronUp => "▲",
            IconName::ChevronDown => "▼",
            IconName::ChevronsUpDown => "⇅",
        }
    }
}

/// Inline glyph icon.
#[component]
pub fn Icon(name: IconName, #[props(default, into)] class: String) -> Element {
    let slug = name.as_str();
    let glyph = name.glyph();

    rsx! {
        span {
            class: "icon icon-{slug} {class}",
            aria_hidden: "true",
            {glyph}
        }
    }
}
