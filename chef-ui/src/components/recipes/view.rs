//! Recipes screen - every seed recipe, whatever style is selected

use super::RecipeCard;
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::icons::ChevronLeftIcon;
use crate::theme::SCREEN_COLUMN;
use chef_common::{FlowEvent, FlowState};
use dioxus::prelude::*;

#[component]
pub fn RecipesView(flow: ReadStore<FlowState>, on_event: EventHandler<FlowEvent>) -> Element {
    let recipes = flow.read().recipes().to_vec();
    let count = recipes.len();

    rsx! {
        div { class: "min-h-screen p-6 pb-24",
            div { class: SCREEN_COLUMN,
                div { class: "flex items-center gap-4 mb-6 mt-4",
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Icon,
                        aria_label: "Back".to_string(),
                        test_id: "back-button",
                        onclick: move |_| on_event.call(FlowEvent::Back),
                        ChevronLeftIcon { class: "w-6 h-6" }
                    }
                    div {
                        h2 { class: "text-3xl font-bold", "Matching dishes" }
                        p { class: "text-white/60 text-sm mt-1",
                            "Found {count} recipes for your ingredients"
                        }
                    }
                }

                div { class: "space-y-6",
                    for recipe in recipes {
                        RecipeCard {
                            key: "{recipe.id}",
                            on_start: {
                                let recipe_id = recipe.id.clone();
                                move |_| {
                                    on_event
                                        .call(FlowEvent::StartCooking {
                                            recipe_id: recipe_id.clone(),
                                        })
                                }
                            },
                            recipe,
                        }
                    }
                }
            }
        }
    }
}
