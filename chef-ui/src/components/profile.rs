//! Profile screen - guest account card and settings rows

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::icons::{
    ChevronRightIcon, CrownIcon, HistoryIcon, LogInIcon, SmartphoneIcon, TrashIcon, VolumeIcon,
    XIcon,
};
use crate::stores::config::{ConfigState, ConfigStateStoreExt};
use crate::theme::{BRAND_BADGE, GLASS_CARD, SCREEN_COLUMN};
use chef_common::FlowEvent;
use dioxus::prelude::*;

#[component]
pub fn ProfileView(config: ReadStore<ConfigState>, on_event: EventHandler<FlowEvent>) -> Element {
    let app_name = config.app_name().read().clone();
    let app_version = config.app_version().read().clone();
    let narration_voice = config.narration_voice().read().clone();

    rsx! {
        div { class: "min-h-screen p-6 pb-24",
            div { class: SCREEN_COLUMN,
                div { class: "flex items-center justify-between mb-8 mt-4",
                    h2 { class: "text-3xl font-bold", "Profile" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Icon,
                        aria_label: "Close".to_string(),
                        test_id: "close-profile",
                        onclick: move |_| on_event.call(FlowEvent::CloseProfile),
                        XIcon { class: "w-6 h-6" }
                    }
                }

                div { class: "{GLASS_CARD} p-6 mb-6",
                    div { class: "flex items-center gap-4 mb-6",
                        div { class: "w-20 h-20 rounded-full flex items-center justify-center text-3xl font-bold {BRAND_BADGE}",
                            "G"
                        }
                        div { class: "flex-1",
                            h3 { class: "text-xl font-bold mb-1", "Guest" }
                            p { class: "text-white/60 text-sm", "Sign in to keep your history" }
                        }
                    }
                    div { class: "space-y-3",
                        Button {
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Large,
                            class: "w-full justify-start".to_string(),
                            onclick: |_| {},
                            LogInIcon {}
                            "Sign in with Google"
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Large,
                            class: "w-full justify-start".to_string(),
                            onclick: |_| {},
                            SmartphoneIcon {}
                            "Sign in with Apple ID"
                        }
                    }
                }

                div { class: "space-y-3",
                    ProfileRow {
                        title: "Premium subscription",
                        subtitle: "Unlimited recipes and videos".to_string(),
                        CrownIcon { class: "w-5 h-5 text-[#FFD93D]" }
                    }
                    ProfileRow {
                        title: "Dish history",
                        subtitle: "Your latest recipes".to_string(),
                        HistoryIcon { class: "w-5 h-5 text-[#FF8C42]" }
                    }
                    ProfileRow {
                        title: "Narration language and voice",
                        subtitle: narration_voice,
                        VolumeIcon { class: "w-5 h-5 text-[#FF8C42]" }
                    }
                    ProfileRow {
                        title: "Delete data",
                        subtitle: "Clear all saved recipes".to_string(),
                        TrashIcon { class: "w-5 h-5 text-red-400" }
                    }
                }

                div { class: "mt-8 text-center text-white/40 text-sm",
                    p { "{app_name} AI v{app_version}" }
                    p { class: "mt-1", "© 2025 {app_name}. All rights reserved" }
                }
            }
        }
    }
}

/// Settings row. The icon is passed as children.
#[component]
fn ProfileRow(title: &'static str, subtitle: String, children: Element) -> Element {
    rsx! {
        div { class: "{GLASS_CARD} p-4 flex items-center justify-between hover:border-[#FF8C42] transition-all cursor-pointer",
            div { class: "flex items-center gap-3",
                {children}
                div {
                    h4 { class: "font-semibold", "{title}" }
                    p { class: "text-sm text-white/60", "{subtitle}" }
                }
            }
            ChevronRightIcon { class: "w-5 h-5 text-white/40" }
        }
    }
}
