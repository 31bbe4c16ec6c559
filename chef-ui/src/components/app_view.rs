//! Root view - renders exactly one screen for the current `Screen`

use crate::components::analysis::AnalysisView;
use crate::components::camera::CameraView;
use crate::components::cooking::CookingView;
use crate::components::profile::ProfileView;
use crate::components::recipes::RecipesView;
use crate::components::share::ShareView;
use crate::stores::config::{ConfigState, ConfigStateStoreExt};
use crate::theme::APP_BACKGROUND;
use chef_common::{FlowEvent, FlowState, Screen};
use dioxus::prelude::*;

/// Pure dispatch over the current screen. Events go back out through `on_event`.
#[component]
pub fn ChefAppView(
    flow: ReadStore<FlowState>,
    config: ReadStore<ConfigState>,
    on_event: EventHandler<FlowEvent>,
) -> Element {
    let screen = flow.read().screen();

    let content = match screen {
        Screen::Camera => rsx! {
            CameraView { app_name: config.app_name().read().clone(), on_event }
        },
        Screen::Analysis => rsx! {
            AnalysisView { flow, on_event }
        },
        Screen::Recipes => rsx! {
            RecipesView { flow, on_event }
        },
        Screen::Cooking => rsx! {
            CookingView { flow, on_event }
        },
        Screen::Share => rsx! {
            ShareView { flow, on_event }
        },
        Screen::Profile => rsx! {
            ProfileView { config, on_event }
        },
    };

    rsx! {
        div {
            class: "min-h-screen {APP_BACKGROUND}",
            "data-screen": screen.as_str(),
            {content}
        }
    }
}
