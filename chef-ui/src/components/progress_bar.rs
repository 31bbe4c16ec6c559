use dioxus::prelude::*;

/// Horizontal fill bar. `percent` is clamped to 0..=100.
#[component]
pub fn ProgressBar(
    percent: f64,
    #[props(default = "h-2")] height: &'static str,
    #[props(default)] class: Option<String>,
) -> Element {
    let width = percent.clamp(0.0, 100.0);
    let extra = class.unwrap_or_default();

    rsx! {
        div {
            class: "w-full {height} bg-white/10 rounded-full overflow-hidden {extra}",
            role: "progressbar",
            aria_valuenow: "{width:.0}",
            aria_valuemin: "0",
            aria_valuemax: "100",
            div {
                class: "h-full bg-gradient-to-r from-[#FF8C42] to-[#FFD93D] transition-all",
                style: "width: {width}%",
            }
        }
    }
}
