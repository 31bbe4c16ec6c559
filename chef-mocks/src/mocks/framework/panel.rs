//! Generated control panel UI

use super::registry::{ControlDef, ControlRegistry, ControlValue};
use crate::Route;
use dioxus::prelude::*;

/// Width of the phone viewport the screens render into
const PHONE_WIDTH: u32 = 390;

/// Control panel on top, the mocked screen in a phone-sized frame below
#[component]
pub fn MockPanel(title: String, registry: ControlRegistry, children: Element) -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white",
            div { class: "sticky top-0 z-50 bg-gray-800 border-b border-gray-700 p-4",
                div { class: "max-w-4xl mx-auto",
                    div { class: "flex items-center gap-3 mb-3",
                        Link {
                            to: Route::MockIndex {},
                            class: "text-sm text-gray-400 hover:text-white",
                            "← Mocks"
                        }
                        h1 { class: "text-lg font-semibold", "{title}" }
                    }

                    if !registry.presets.is_empty() {
                        PresetBar { registry: registry.clone() }
                    }

                    ControlsRow { registry: registry.clone() }
                }
            }

            div { class: "p-6 flex justify-center",
                div {
                    class: "rounded-[2rem] overflow-hidden border border-gray-700 shadow-2xl",
                    style: "width: {PHONE_WIDTH}px",
                    {children}
                }
            }
        }
    }
}

#[component]
fn PresetBar(registry: ControlRegistry) -> Element {
    rsx! {
        div { class: "flex flex-wrap gap-2 mb-3",
            span { class: "text-xs text-gray-500 self-center mr-2", "Presets:" }
            for preset in registry.presets.clone() {
                button {
                    key: "{preset.name}",
                    class: if preset.matches(&registry) { "px-2 py-1 text-xs rounded bg-orange-600 text-white" } else { "px-2 py-1 text-xs rounded bg-gray-700 text-gray-300 hover:bg-gray-600" },
                    onclick: {
                        let preset = preset.clone();
                        let registry = registry.clone();
                        move |_| registry.apply_preset(&preset)
                    },
                    "{preset.name}"
                }
            }
            for action in registry.actions.clone() {
                button {
                    key: "{action.label}",
                    class: "px-2 py-1 text-xs rounded border border-gray-600 text-gray-300 hover:bg-gray-700",
                    onclick: {
                        let callback = action.callback;
                        move |_| callback.call(())
                    },
                    "{action.label}"
                }
            }
        }
    }
}

/// Enum controls as button groups; bool and int controls inline below
#[component]
fn ControlsRow(registry: ControlRegistry) -> Element {
    let visible: Vec<ControlDef> = registry
        .controls
        .iter()
        .filter(|c| c.is_visible(&registry))
        .cloned()
        .collect();
    let (enum_controls, other_controls): (Vec<_>, Vec<_>) =
        visible.into_iter().partition(|c| c.enum_options.is_some());

    rsx! {
        for control in enum_controls {
            div { key: "{control.key}", class: "flex flex-wrap items-center gap-2 mb-3",
                span { class: "text-xs text-gray-500 w-16", "{control.label}" }
                for (value , label) in control.enum_options.clone().unwrap_or_default() {
                    EnumButton {
                        key: "{value}",
                        registry: registry.clone(),
                        control_key: control.key,
                        value: value.clone(),
                        label,
                        doc: control.doc,
                    }
                }
            }
        }

        if !other_controls.is_empty() {
            div { class: "flex flex-wrap gap-4 text-sm",
                for control in other_controls {
                    ControlInput {
                        key: "{control.key}",
                        registry: registry.clone(),
                        control: control.clone(),
                    }
                }
            }
        }
    }
}

/// Checkbox for bool controls, stepper for int controls
#[component]
fn ControlInput(registry: ControlRegistry, control: ControlDef) -> Element {
    match control.default {
        ControlValue::Bool(_) => rsx! {
            BoolCheckbox {
                registry,
                control_key: control.key,
                label: control.label,
                doc: control.doc,
            }
        },
        _ => rsx! {
            IntStepper {
                registry,
                control_key: control.key,
                label: control.label,
                doc: control.doc,
            }
        },
    }
}

/// Individual enum button - reads signal reactively
#[component]
fn EnumButton(
    registry: ControlRegistry,
    control_key: &'static str,
    value: String,
    label: String,
    doc: Option<&'static str>,
) -> Element {
    let is_selected = registry.get_string(control_key) == value;

    rsx! {
        button {
            class: if is_selected { "px-3 py-1.5 text-sm rounded bg-orange-600 text-white" } else { "px-3 py-1.5 text-sm rounded bg-gray-700 text-gray-300 hover:bg-gray-600" },
            onclick: move |_| registry.set_string(control_key, value.clone()),
            title: doc.unwrap_or(""),
            "{label}"
        }
    }
}

#[component]
fn BoolCheckbox(
    registry: ControlRegistry,
    control_key: &'static str,
    label: &'static str,
    doc: Option<&'static str>,
) -> Element {
    let current = registry.get_bool(control_key);

    rsx! {
        label {
            class: "flex items-center gap-2 text-gray-400",
            title: doc.unwrap_or(""),
            input {
                r#type: "checkbox",
                checked: current,
                onchange: move |e| registry.set_bool(control_key, e.checked()),
            }
            "{label}"
        }
    }
}

/// -/+ stepper for int controls; the registry clamps to the control's range
#[component]
fn IntStepper(
    registry: ControlRegistry,
    control_key: &'static str,
    label: &'static str,
    doc: Option<&'static str>,
) -> Element {
    let current = registry.get_int(control_key);
    let dec = registry.clone();
    let inc = registry.clone();

    rsx! {
        div {
            class: "flex items-center gap-2 text-gray-400",
            title: doc.unwrap_or(""),
            "{label}"
            button {
                class: "px-2 rounded bg-gray-700 hover:bg-gray-600",
                onclick: move |_| dec.set_int(control_key, current - 1),
                "−"
            }
            span { class: "w-6 text-center text-white", "{current}" }
            button {
                class: "px-2 rounded bg-gray-700 hover:bg-gray-600",
                onclick: move |_| inc.set_int(control_key, current + 1),
                "+"
            }
        }
    }
}
