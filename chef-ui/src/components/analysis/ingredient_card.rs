//! Detected ingredient with serving-size controls

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::icons::{MinusIcon, PlusIcon};
use crate::components::progress_bar::ProgressBar;
use crate::theme::GLASS_CARD;
use chef_common::catalog::GRAMS_STEP;
use chef_common::Ingredient;
use dioxus::prelude::*;

/// The kcal line is per 100g and does not follow the adjusted grams.
#[component]
pub fn IngredientCard(ingredient: Ingredient, on_adjust: EventHandler<i32>) -> Element {
    let meter = ingredient.calorie_meter_percent();
    let stepper_class =
        "h-8 w-8 border-[#FF8C42] text-[#FF8C42] hover:bg-[#FF8C42] hover:text-white".to_string();

    rsx! {
        div {
            class: "{GLASS_CARD} p-4",
            "data-testid": "ingredient-card",
            div { class: "flex items-center gap-4",
                img {
                    class: "w-20 h-20 rounded-xl object-cover",
                    src: "{ingredient.image_url}",
                    alt: "{ingredient.name}",
                }
                div { class: "flex-1",
                    h3 { class: "font-semibold text-lg mb-1", "{ingredient.name}" }
                    p { class: "text-sm text-white/60", "{ingredient.calories} kcal per 100g" }
                    div { class: "flex items-center gap-3 mt-3",
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Icon,
                            class: stepper_class.clone(),
                            aria_label: format!("Less {}", ingredient.name),
                            onclick: move |_| on_adjust.call(-GRAMS_STEP),
                            MinusIcon { class: "w-4 h-4" }
                        }
                        span { class: "font-semibold w-16 text-center", "{ingredient.grams}g" }
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Icon,
                            class: stepper_class,
                            aria_label: format!("More {}", ingredient.name),
                            onclick: move |_| on_adjust.call(GRAMS_STEP),
                            PlusIcon { class: "w-4 h-4" }
                        }
                    }
                    ProgressBar { percent: meter, height: "h-1.5", class: "mt-2".to_string() }
                }
            }
        }
    }
}
