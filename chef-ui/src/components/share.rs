//! Share screen - static "video" card for the selected recipe

use crate::components::button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
use crate::components::icons::{
    CameraIcon, ChevronLeftIcon, DownloadIcon, MusicIcon, PlayIcon, SendIcon,
};
use crate::theme::{BRAND_GRADIENT, GLASS_CARD};
use chef_common::{FlowEvent, FlowState};
use dioxus::prelude::*;

/// Destinations on the share panel. None of them do anything yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareTarget {
    Instagram,
    TikTok,
    Telegram,
    Save,
}

impl ShareTarget {
    pub const ALL: [ShareTarget; 4] = [
        ShareTarget::Instagram,
        ShareTarget::TikTok,
        ShareTarget::Telegram,
        ShareTarget::Save,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ShareTarget::Instagram => "Instagram",
            ShareTarget::TikTok => "TikTok",
            ShareTarget::Telegram => "Telegram",
            ShareTarget::Save => "Save",
        }
    }

    fn gradient(&self) -> &'static str {
        match self {
            ShareTarget::Instagram => "from-pink-500 to-orange-500",
            ShareTarget::TikTok => "from-cyan-400 to-pink-500",
            ShareTarget::Telegram => "from-blue-400 to-blue-600",
            ShareTarget::Save => "from-[#FF8C42] to-[#FFD93D] text-[#1A1A2E]",
        }
    }
}

/// Renders nothing until a recipe has been selected.
#[component]
pub fn ShareView(flow: ReadStore<FlowState>, on_event: EventHandler<FlowEvent>) -> Element {
    let Some(recipe) = flow.read().selected_recipe().cloned() else {
        return rsx! {};
    };

    rsx! {
        div { class: "min-h-screen p-6 pb-24 flex items-center justify-center",
            div { class: "max-w-md mx-auto w-full",
                div { class: "text-center mb-8",
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Icon,
                        class: "mb-4".to_string(),
                        aria_label: "Back to cooking".to_string(),
                        test_id: "back-button",
                        onclick: move |_| on_event.call(FlowEvent::Back),
                        ChevronLeftIcon { class: "w-6 h-6" }
                    }
                    h2 { class: "text-3xl font-bold mb-2", "Your video is ready!" }
                    p { class: "text-white/60 text-sm", "An AI clip made from your ingredients and recipe" }
                }

                div { class: "{GLASS_CARD} overflow-hidden mb-8",
                    div { class: "aspect-[9/16] relative flex items-center justify-center",
                        img {
                            class: "w-full h-full object-cover opacity-80",
                            src: "{recipe.image_url}",
                            alt: "{recipe.name}",
                        }
                        div { class: "absolute inset-0 bg-black/40 flex items-center justify-center",
                            div { class: "w-20 h-20 rounded-full flex items-center justify-center shadow-2xl {BRAND_GRADIENT}",
                                PlayIcon { class: "w-8 h-8" }
                            }
                        }
                        div { class: "absolute bottom-4 left-4 right-4 text-center",
                            h3 { class: "font-bold text-lg mb-1", "{recipe.name}" }
                            p { class: "text-sm text-white/80", "15 sec • InstaChef AI" }
                        }
                    }
                }

                SharePanel { on_redo: move |_| on_event.call(FlowEvent::Redo) }
            }
        }
    }
}

#[component]
pub fn SharePanel(on_redo: EventHandler<()>) -> Element {
    rsx! {
        div { class: "space-y-4",
            h3 { class: "text-lg font-semibold text-center mb-4", "Share to social" }
            div { class: "grid grid-cols-4 gap-4 mb-6",
                for target in ShareTarget::ALL {
                    ChromelessButton {
                        key: "{target.label()}",
                        class: "flex flex-col items-center gap-2 p-4 rounded-2xl border border-white/10 bg-white/5 hover:border-[#FF8C42] transition-all hover:scale-105"
                            .to_string(),
                        onclick: |_| {},
                        div { class: "w-14 h-14 rounded-full bg-gradient-to-br flex items-center justify-center {target.gradient()}",
                            ShareTargetIcon { target }
                        }
                        span { class: "text-xs", "{target.label()}" }
                    }
                }
            }
            Button {
                variant: ButtonVariant::Outline,
                size: ButtonSize::Large,
                class: "w-full".to_string(),
                test_id: "redo",
                onclick: move |_| on_redo.call(()),
                "🔁 Make another take"
            }
        }
    }
}

#[component]
fn ShareTargetIcon(target: ShareTarget) -> Element {
    match target {
        ShareTarget::Instagram => rsx! {
            CameraIcon { class: "w-7 h-7" }
        },
        ShareTarget::TikTok => rsx! {
            MusicIcon { class: "w-7 h-7" }
        },
        ShareTarget::Telegram => rsx! {
            SendIcon { class: "w-7 h-7" }
        },
        ShareTarget::Save => rsx! {
            DownloadIcon { class: "w-7 h-7" }
        },
    }
}
