//! Reusable button component

use crate::theme::BRAND_GRADIENT;
use dioxus::prelude::*;

/// Chromeless button - accessibility and disabled handling without styling.
/// Used internally by Button and for tiles that bring their own layout.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] test_id: Option<&'static str>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            r#type: "button",
            disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_disabled: if disabled { Some("true") } else { None },
            "data-testid": test_id,
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Brand gradient - for the main action on a screen
    Primary,
    /// Thin translucent border
    Outline,
    /// No background - icon or text only with hover
    Ghost,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    /// Square, for a single icon
    Icon,
    Medium,
    /// Full-height call to action
    Large,
}

#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] test_id: Option<&'static str>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let base = "inline-flex items-center justify-center gap-2 font-semibold transition-all disabled:opacity-40 disabled:cursor-not-allowed";

    let size_class = match size {
        ButtonSize::Icon => "h-10 w-10 rounded-full",
        ButtonSize::Medium => "px-4 py-2 rounded-xl",
        ButtonSize::Large => "px-6 py-4 text-lg rounded-2xl",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => BRAND_GRADIENT,
        ButtonVariant::Outline => "border border-white/20 text-white hover:bg-white/10",
        ButtonVariant::Ghost => "text-white hover:bg-white/10",
    };

    let computed_class = match &class {
        Some(extra) => format!("{base} {size_class} {variant_class} {extra}"),
        None => format!("{base} {size_class} {variant_class}"),
    };

    rsx! {
        ChromelessButton {
            disabled,
            class: Some(computed_class),
            aria_label,
            test_id,
            onclick,
            {children}
        }
    }
}
