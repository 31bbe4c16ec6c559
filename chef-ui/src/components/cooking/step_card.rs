use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::icons::{CheckIcon, PauseIcon, TimerIcon, VolumeIcon};
use crate::theme::{BRAND_BADGE, GLASS_CARD};
use chef_common::{CookingStep, StepStatus};
use dioxus::prelude::*;

/// One cooking instruction. Only the current step gets the narration toggle.
#[component]
pub fn StepCard(
    step: CookingStep,
    status: StepStatus,
    narration_playing: bool,
    on_toggle_narration: EventHandler<()>,
) -> Element {
    let emphasis = match status {
        StepStatus::Current => "border-[#FF8C42] shadow-lg shadow-[#FF8C42]/20 scale-105",
        StepStatus::Done => "opacity-50",
        StepStatus::Upcoming => "opacity-30",
    };
    let badge = match status {
        StepStatus::Upcoming => "bg-white/10 text-white/50",
        StepStatus::Done | StepStatus::Current => BRAND_BADGE,
    };
    let status_attr = match status {
        StepStatus::Done => "done",
        StepStatus::Current => "current",
        StepStatus::Upcoming => "upcoming",
    };

    rsx! {
        div {
            class: "{GLASS_CARD} p-5 transition-all {emphasis}",
            "data-testid": "step-card",
            "data-status": status_attr,
            div { class: "flex items-start gap-4",
                div { class: "w-10 h-10 rounded-full flex items-center justify-center flex-shrink-0 font-bold {badge}",
                    if status == StepStatus::Done {
                        CheckIcon {}
                    } else {
                        "{step.number}"
                    }
                }
                div { class: "flex-1",
                    p { class: "text-base mb-2", "{step.text}" }
                    if let Some(duration) = &step.duration {
                        div { class: "flex items-center gap-2 text-sm text-white/60",
                            TimerIcon { class: "w-3.5 h-3.5" }
                            span { "{duration}" }
                        }
                    }
                }
                if status == StepStatus::Current {
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Icon,
                        aria_label: if narration_playing { "Pause narration".to_string() } else { "Play narration".to_string() },
                        test_id: "narration-toggle",
                        onclick: move |_| on_toggle_narration.call(()),
                        if narration_playing {
                            PauseIcon {}
                        } else {
                            VolumeIcon {}
                        }
                    }
                }
            }
        }
    }
}
