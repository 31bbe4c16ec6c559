//! Recipe style pills - exactly one highlighted

use chef_common::DietStyle;
use dioxus::prelude::*;

#[component]
pub fn DietStylePicker(selected: DietStyle, on_select: EventHandler<DietStyle>) -> Element {
    rsx! {
        div { class: "flex gap-3 flex-wrap",
            for style in DietStyle::ALL {
                button {
                    key: "{style}",
                    r#type: "button",
                    class: if style == selected { "px-6 py-2.5 rounded-full text-sm font-medium bg-gradient-to-r from-[#FF8C42] to-[#FFD93D] text-[#1A1A2E] shadow-lg shadow-[#FF8C42]/30" } else { "px-6 py-2.5 rounded-full text-sm font-medium border border-white/20 text-white/70 hover:border-[#FF8C42] hover:text-white" },
                    aria_pressed: if style == selected { "true" } else { "false" },
                    onclick: move |_| on_select.call(style),
                    "{style.label()}"
                }
            }
        }
    }
}
