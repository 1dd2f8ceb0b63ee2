use dioxus::prelude::*;

/// Checkbox that reports its new checked state.
///
/// Clicks never bubble past the input, so a checkbox inside a clickable row
/// does not also trigger the row.
#[component]
pub fn Checkbox(
    checked: bool,
    #[props(into)] label: String,
    onchange: EventHandler<bool>,
) -> Element {
    rsx! {
        input {
            r#type: "checkbox",
            class: "checkbox",
            checked,
            aria_checked: "{checked}",
            aria_label: "{label}",
            onclick: move |e| e.stop_propagation(),
            onchange: move |e| onchange.call(e.checked()),
        }
    }
}
