//! Full interactive flow, starting on the camera screen

use chef_ui::ChefApp;
use dioxus::prelude::*;

#[component]
pub fn Prototype() -> Element {
    rsx! {
        div { class: "max-w-md mx-auto min-h-screen shadow-2xl", ChefApp {} }
    }
}
