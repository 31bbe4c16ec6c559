use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::icons::{ClockIcon, FlameIcon, SaladIcon};
use crate::theme::GLASS_CARD;
use chef_common::Recipe;
use dioxus::prelude::*;

/// Recipe summary with a start-cooking action. The narrate and share
/// buttons are placeholders.
#[component]
pub fn RecipeCard(recipe: Recipe, on_start: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "{GLASS_CARD} overflow-hidden",
            "data-testid": "recipe-card",
            div { class: "aspect-video relative overflow-hidden",
                img {
                    class: "w-full h-full object-cover",
                    src: "{recipe.image_url}",
                    alt: "{recipe.name}",
                }
                div { class: "absolute inset-0 bg-gradient-to-t from-black/60 to-transparent" }
            }
            div { class: "p-5",
                h3 { class: "text-xl font-bold mb-3", "{recipe.name}" }
                div { class: "flex items-center gap-4 text-sm text-white/70 mb-4",
                    span { class: "flex items-center gap-1.5",
                        ClockIcon { class: "w-4 h-4" }
                        "{recipe.time}"
                    }
                    span { class: "flex items-center gap-1.5",
                        FlameIcon { class: "w-4 h-4 text-[#FF8C42]" }
                        "{recipe.calories} kcal"
                    }
                    span { class: "flex items-center gap-1.5",
                        SaladIcon { class: "w-4 h-4 text-[#FFD93D]" }
                        "{recipe.style_label()}"
                    }
                }
                div { class: "flex gap-3",
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Medium,
                        class: "flex-1".to_string(),
                        test_id: "start-cooking",
                        onclick: move |_| on_start.call(()),
                        "👨‍🍳 Step by step"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Medium,
                        aria_label: "Read aloud".to_string(),
                        onclick: |_| {},
                        "🔊"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Medium,
                        aria_label: "Share".to_string(),
                        onclick: |_| {},
                        "📤"
                    }
                }
            }
        }
    }
}
