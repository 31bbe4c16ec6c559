//! Cooking screen - guided steps for the selected recipe

use super::StepCard;
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, ClockIcon, FlameIcon};
use crate::components::progress_bar::ProgressBar;
use chef_common::{FlowEvent, FlowState};
use dioxus::prelude::*;

/// Renders nothing until a recipe has been selected.
#[component]
pub fn CookingView(flow: ReadStore<FlowState>, on_event: EventHandler<FlowEvent>) -> Element {
    let snapshot = flow.read().clone();
    let Some(recipe) = snapshot.selected_recipe().cloned() else {
        return rsx! {};
    };

    let current = snapshot.current_step();
    let step_count = snapshot.step_count();
    let progress = snapshot.progress_percent();
    let can_go_back = snapshot.can_go_back();
    let is_last_step = snapshot.is_last_step();
    let narration_playing = snapshot.narration_playing();
    let steps: Vec<_> = snapshot
        .steps()
        .iter()
        .enumerate()
        .map(|(index, step)| (step.clone(), snapshot.step_status(index)))
        .collect();
    let step_label = current + 1;

    rsx! {
        div { class: "min-h-screen pb-24",
            div { class: "relative h-64 overflow-hidden",
                img {
                    class: "w-full h-full object-cover",
                    src: "{recipe.image_url}",
                    alt: "{recipe.name}",
                }
                div { class: "absolute inset-0 bg-gradient-to-b from-black/50 via-black/30 to-[#1A1A2E]" }
                div { class: "absolute top-6 left-6",
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Icon,
                        aria_label: "Back to recipes".to_string(),
                        test_id: "back-button",
                        onclick: move |_| on_event.call(FlowEvent::Back),
                        ChevronLeftIcon { class: "w-6 h-6" }
                    }
                }
                div { class: "absolute bottom-6 left-6 right-6",
                    h2 { class: "text-2xl font-bold mb-2", "{recipe.name}" }
                    div { class: "flex items-center gap-4 text-sm text-white/80",
                        span { class: "flex items-center gap-1",
                            ClockIcon { class: "w-4 h-4" }
                            "{recipe.time}"
                        }
                        span { class: "flex items-center gap-1",
                            FlameIcon { class: "w-4 h-4" }
                            "{recipe.calories} kcal"
                        }
                    }
                }
            }

            div { class: "max-w-2xl mx-auto px-6 py-8",
                div { class: "flex items-center justify-between mb-6",
                    h3 { class: "text-xl font-semibold", "Cooking steps" }
                    span { class: "text-white/60 text-sm", "Step {step_label} of {step_count}" }
                }

                ProgressBar { percent: progress, class: "mb-8".to_string() }

                div { class: "space-y-4 mb-8",
                    for (step , status) in steps {
                        StepCard {
                            key: "{step.id}",
                            step,
                            status,
                            narration_playing,
                            on_toggle_narration: move |_| on_event.call(FlowEvent::ToggleNarration),
                        }
                    }
                }

                div { class: "flex gap-3 sticky bottom-6",
                    // Disabled rather than hidden on the first step
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Large,
                        class: "flex-1".to_string(),
                        disabled: !can_go_back,
                        test_id: "prev-step",
                        onclick: move |_| on_event.call(FlowEvent::PrevStep),
                        ChevronLeftIcon {}
                        "Back"
                    }
                    if is_last_step {
                        Button {
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Large,
                            class: "flex-1".to_string(),
                            test_id: "generate-video",
                            onclick: move |_| on_event.call(FlowEvent::GenerateVideo),
                            "🎬 Make video"
                        }
                    } else {
                        Button {
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Large,
                            class: "flex-1".to_string(),
                            test_id: "next-step",
                            onclick: move |_| on_event.call(FlowEvent::NextStep),
                            "Next"
                            ChevronRightIcon {}
                        }
                    }
                }
            }
        }
    }
}
