//! Mock framework for Storybook-like screen review
//!
//! Provides:
//! - ControlRegistry: typed control bag with automatic URL sync
//! - Presets: named state configurations for quick switching
//! - MockPanel: generated control panel UI around a phone-sized viewport

mod panel;
mod preset;
mod registry;

pub use panel::MockPanel;
pub use preset::Preset;
pub use registry::{ControlRegistry, ControlRegistryBuilder, ControlValue};
