//! Top-level application state store
//!
//! Components access state via lensing: `app.flow()`, `app.config()`.

use super::config::ConfigState;
use chef_common::FlowState;
use dioxus::prelude::*;

/// Top-level application state
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// Screen flow controller (screen, recipe, step, ingredients)
    pub flow: FlowState,
    /// Display configuration
    pub config: ConfigState,
}
