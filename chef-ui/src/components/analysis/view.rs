//! Analysis screen - detected ingredients and recipe style

use super::{DietStylePicker, IngredientCard};
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::theme::SCREEN_COLUMN;
use chef_common::{FlowEvent, FlowState};
use dioxus::prelude::*;

#[component]
pub fn AnalysisView(flow: ReadStore<FlowState>, on_event: EventHandler<FlowEvent>) -> Element {
    let ingredients = flow.read().ingredients().to_vec();
    let selected_style = flow.read().selected_style();

    rsx! {
        div { class: "min-h-screen p-6 pb-24",
            div { class: SCREEN_COLUMN,
                h2 { class: "text-3xl font-bold mb-6 mt-4", "Detected ingredients" }

                div { class: "space-y-4 mb-8",
                    for ingredient in ingredients {
                        IngredientCard {
                            key: "{ingredient.id}",
                            on_adjust: {
                                let id = ingredient.id.clone();
                                move |delta| {
                                    on_event
                                        .call(FlowEvent::AdjustGrams {
                                            id: id.clone(),
                                            delta,
                                        })
                                }
                            },
                            ingredient,
                        }
                    }
                }

                div { class: "mb-8",
                    h3 { class: "text-lg font-semibold mb-4", "Pick a recipe style" }
                    DietStylePicker {
                        selected: selected_style,
                        on_select: move |style| on_event.call(FlowEvent::SelectStyle(style)),
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Large,
                    class: "w-full font-bold shadow-xl shadow-[#FF8C42]/30".to_string(),
                    test_id: "find-recipes",
                    onclick: move |_| on_event.call(FlowEvent::FindRecipes),
                    "🍳 Find recipes"
                }
            }
        }
    }
}
