use dioxus::prelude::*;

use super::{Icon, IconName};

/// Visual style of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Ghost,
    Primary,
    Success,
    Danger,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Success => "btn-success",
            ButtonVariant::Danger => "btn-danger",
        }
    }
}

/// Props for Button component.
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    /// Receives the raw click so callers can stop propagation.
    pub onclick: EventHandler<MouseEvent>,
    pub children: Element,
}

/// Text button.
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let variant = props.variant.class();

    rsx! {
        button {
            class: "btn btn-small {variant}",
            onclick: move |e| props.onclick.call(e),
            {props.children}
        }
    }
}

/// Props for IconButton component.
#[derive(Props, Clone, PartialEq)]
pub struct IconButtonProps {
    pub icon: IconName,
    /// Tooltip and accessible label.
    #[props(into)]
    pub title: String,
    #[props(default)]
    pub variant: ButtonVariant,
    pub onclick: EventHandler<MouseEvent>,
}

/// Square button holding a single icon.
#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let variant = props.variant.class();

    rsx! {
        button {
            class: "btn-icon {variant}",
            title: "{props.title}",
            aria_label: "{props.title}",
            onclick: move |e| props.onclick.call(e),
            Icon { name: props.icon }
        }
    }
}
