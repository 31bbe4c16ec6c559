//! chef-mocks - Web prototype and screen mocks for InstaChef
//!
//! `/` runs the full interactive flow. `/mocks` lists per-screen mock pages
//! with controls, used for design review and screenshots.

pub mod mocks;
pub mod pages;

use dioxus::prelude::*;
use pages::{MockIndex, MockScreen, Prototype};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    // Interactive prototype at root
    #[route("/")]
    Prototype {},
    #[route("/mocks")]
    MockIndex {},
    // Screen mock with controls
    #[route("/screen?:state")]
    MockScreen { state: Option<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "InstaChef" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
