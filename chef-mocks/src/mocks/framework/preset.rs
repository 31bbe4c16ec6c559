//! State presets for quick configuration switching

use super::registry::{ControlRegistry, ControlValue};
use crate::mocks::url_state::StateBuilder;
use dioxus::prelude::*;
use std::collections::HashMap;

/// A named preset with predefined control values
#[derive(Clone, Debug, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub values: HashMap<String, ControlValue>,
}

impl Preset {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            values: HashMap::new(),
        }
    }

    pub fn set_bool(mut self, key: &'static str, value: bool) -> Self {
        self.values
            .insert(key.to_string(), ControlValue::Bool(value));
        self
    }

    pub fn set_string(mut self, key: &'static str, value: &'static str) -> Self {
        self.values
            .insert(key.to_string(), ControlValue::String(value.to_string()));
        self
    }

    pub fn set_int(mut self, key: &'static str, value: i32) -> Self {
        self.values.insert(key.to_string(), ControlValue::Int(value));
        self
    }

    /// Whether the registry currently shows this preset: listed controls hold
    /// the preset's value and every other control is at its default.
    pub fn matches(&self, registry: &ControlRegistry) -> bool {
        registry.controls.iter().all(|control| {
            let current = registry.values.get(control.key).map(|s| s.read().clone());
            let expected = self.values.get(control.key).unwrap_or(&control.default);
            current.as_ref() == Some(expected)
        })
    }

    /// Encoded URL state that opens a mock page on this preset
    pub fn to_state(&self) -> Option<String> {
        let mut entries: Vec<_> = self.values.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        let mut builder = StateBuilder::new();
        for (key, value) in entries {
            match value {
                ControlValue::Bool(b) => builder.set_string(key, if *b { "1" } else { "0" }),
                ControlValue::String(s) => builder.set_string(key, s),
                ControlValue::Int(i) => builder.set_string(key, &i.to_string()),
            }
        }
        builder.build_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::url_state::parse_state;

    #[test]
    fn test_to_state_encodes_all_values() {
        let preset = Preset::new("Last step")
            .set_string("screen", "cooking")
            .set_int("step", 4)
            .set_bool("narration", true);
        let encoded = preset.to_state().unwrap();
        assert_eq!(
            parse_state(&encoded),
            vec![
                ("narration".to_string(), "1".to_string()),
                ("screen".to_string(), "cooking".to_string()),
                ("step".to_string(), "4".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_preset_has_no_state() {
        assert_eq!(Preset::new("Default").to_state(), None);
    }
}
