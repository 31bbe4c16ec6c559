//! Mock index and screen mock page

use crate::mocks::{screen_presets, ScreenMock};
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn MockIndex() -> Element {
    let presets = screen_presets();

    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white p-8",
            h1 { class: "text-2xl font-bold mb-6", "InstaChef mocks" }

            h2 { class: "text-lg font-semibold text-gray-400 mb-3", "Prototype" }
            div { class: "space-y-2 mb-8",
                LinkCard {
                    to: Route::Prototype {},
                    title: "Full flow",
                    description: "Camera to share, every button wired",
                }
            }

            h2 { class: "text-lg font-semibold text-gray-400 mb-3", "Screens" }
            div { class: "grid grid-cols-3 gap-4",
                for preset in presets {
                    LinkCard {
                        key: "{preset.name}",
                        to: Route::MockScreen {
                            state: preset.to_state(),
                        },
                        title: preset.name,
                        description: "Screen mock with controls",
                    }
                }
            }
        }
    }
}

#[component]
fn LinkCard(to: Route, title: &'static str, description: &'static str) -> Element {
    rsx! {
        Link {
            to,
            class: "block p-4 bg-gray-800 rounded-lg hover:bg-gray-700 transition-colors",
            div { class: "font-medium", "{title}" }
            div { class: "text-sm text-gray-400", "{description}" }
        }
    }
}

#[component]
pub fn MockScreen(state: Option<String>) -> Element {
    rsx! {
        ScreenMock { initial_state: state }
    }
}
