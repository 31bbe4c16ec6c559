//! Store-owning root shared by the web prototype and the desktop shell

use crate::components::app_view::ChefAppView;
use crate::stores::app::{AppState, AppStateStoreExt};
use crate::stores::config::ConfigState;
use chef_common::{FlowEvent, FlowState};
use dioxus::prelude::*;
use tracing::debug;

/// Interactive prototype. Owns the only writable copy of the flow state and
/// applies every event the views emit.
#[component]
pub fn ChefApp(#[props(default)] config: ConfigState) -> Element {
    let app = use_store(move || AppState {
        flow: FlowState::new(),
        config,
    });

    let on_event = use_callback(move |event: FlowEvent| {
        debug!("Dispatching {:?}", event);
        app.flow().write().apply(event);
    });

    rsx! {
        ChefAppView { flow: app.flow(), config: app.config(), on_event }
    }
}
