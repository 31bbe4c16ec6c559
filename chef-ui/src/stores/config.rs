//! Display configuration store

use dioxus::prelude::*;

/// Values shown in the profile panel. Supplied by whoever launches the app.
#[derive(Clone, Debug, PartialEq, Store)]
pub struct ConfigState {
    pub app_name: String,
    pub app_version: String,
    /// Narration language and voice label, e.g. "English • Female voice"
    pub narration_voice: String,
}

impl Default for ConfigState {
    fn default() -> Self {
        Self {
            app_name: "InstaChef".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            narration_voice: "English • Female voice".to_string(),
        }
    }
}
