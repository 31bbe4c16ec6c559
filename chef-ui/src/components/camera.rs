//! Camera screen - static viewfinder placeholder with a shutter button

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::icons::{CameraIcon, UserIcon};
use crate::theme::BRAND_BADGE;
use chef_common::FlowEvent;
use dioxus::prelude::*;

#[component]
pub fn CameraView(app_name: String, on_event: EventHandler<FlowEvent>) -> Element {
    let initial = app_name.chars().next().unwrap_or('?');

    rsx! {
        div { class: "relative h-screen flex flex-col",
            div { class: "absolute top-0 left-0 right-0 z-10 p-6 flex items-center justify-between",
                div { class: "flex items-center gap-2",
                    div { class: "w-10 h-10 rounded-full flex items-center justify-center text-2xl font-bold {BRAND_BADGE}",
                        "{initial}"
                    }
                    h1 { class: "text-2xl font-bold text-[#FFD93D]", "{app_name}" }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Icon,
                    aria_label: "Profile".to_string(),
                    test_id: "open-profile",
                    onclick: move |_| on_event.call(FlowEvent::OpenProfile),
                    UserIcon { class: "w-6 h-6" }
                }
            }

            // Viewfinder placeholder; nothing is captured
            div { class: "flex-1 relative bg-gradient-to-b from-black/40 to-black/20 flex items-center justify-center",
                div { class: "w-full max-w-md mx-4",
                    div { class: "aspect-[4/3] rounded-3xl overflow-hidden border-4 border-white/20 relative bg-white/5",
                        div { class: "absolute inset-0 flex items-center justify-center",
                            CameraIcon { class: "w-24 h-24 text-white/30" }
                        }
                        div { class: "absolute inset-0 border-2 border-dashed border-white/30 m-8 rounded-2xl" }
                    }
                }
            }

            div { class: "p-8 space-y-4",
                p { class: "text-center text-white/70 text-sm mb-6",
                    "Take a photo of your fridge or the food on your table"
                }
                div { class: "flex justify-center",
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Icon,
                        class: "w-24 h-24 shadow-2xl shadow-[#FF8C42]/50 hover:scale-105".to_string(),
                        aria_label: "Take photo".to_string(),
                        test_id: "capture",
                        onclick: move |_| on_event.call(FlowEvent::Capture),
                        CameraIcon { class: "w-10 h-10" }
                    }
                }
            }
        }
    }
}
