//! Control registry for typed control management with URL sync

use super::preset::Preset;
use crate::mocks::url_state::{parse_state, StateBuilder};
use crate::Route;
use dioxus::prelude::*;
use std::collections::HashMap;
use tracing::warn;

/// Value stored in the control registry
#[derive(Clone, Debug, PartialEq)]
pub enum ControlValue {
    Bool(bool),
    String(String),
    Int(i32),
}

/// Definition of a control with metadata
#[derive(Clone, Debug, PartialEq)]
pub struct ControlDef {
    pub key: &'static str,
    pub label: &'static str,
    pub default: ControlValue,
    pub doc: Option<&'static str>,
    /// (value, label) pairs for enum controls
    pub enum_options: Option<Vec<(String, String)>>,
    /// Inclusive (min, max) for int controls
    pub int_range: Option<(i32, i32)>,
    /// (control_key, allowed_values) pairs that must all hold for the control to show
    pub visible_when: Vec<(&'static str, Vec<&'static str>)>,
}

impl ControlDef {
    fn new(key: &'static str, label: &'static str, default: ControlValue) -> Self {
        Self {
            key,
            label,
            default,
            doc: None,
            enum_options: None,
            int_range: None,
            visible_when: Vec::new(),
        }
    }

    pub fn is_visible(&self, registry: &ControlRegistry) -> bool {
        self.visible_when
            .iter()
            .all(|(key, values)| values.contains(&registry.get_string(key).as_str()))
    }

    /// Parse a raw URL value for this control, falling back to the default
    fn parse(&self, raw: Option<&str>) -> ControlValue {
        let Some(raw) = raw else {
            return self.default.clone();
        };
        match &self.default {
            ControlValue::Bool(_) => ControlValue::Bool(raw == "1" || raw == "true"),
            ControlValue::String(default) => match &self.enum_options {
                Some(options) if !options.iter().any(|(v, _)| *v == raw) => {
                    warn!("Ignoring unknown value '{}' for control '{}'", raw, self.key);
                    ControlValue::String(default.clone())
                }
                _ => ControlValue::String(raw.to_string()),
            },
            ControlValue::Int(default) => {
                let parsed = raw.parse().unwrap_or(*default);
                ControlValue::Int(self.clamp(parsed))
            }
        }
    }

    fn clamp(&self, value: i32) -> i32 {
        match self.int_range {
            Some((min, max)) => value.clamp(min, max),
            None => value,
        }
    }
}

/// Action button that isn't stored in URL params
#[derive(Clone)]
pub struct ActionDef {
    pub label: &'static str,
    pub callback: Callback<()>,
}

/// Builder for creating a ControlRegistry
#[derive(Default)]
pub struct ControlRegistryBuilder {
    controls: Vec<ControlDef>,
    actions: Vec<ActionDef>,
    presets: Vec<Preset>,
}

impl ControlRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bool_control(mut self, key: &'static str, label: &'static str, default: bool) -> Self {
        self.controls
            .push(ControlDef::new(key, label, ControlValue::Bool(default)));
        self
    }

    /// Enum control, stored as its string value
    pub fn enum_control(
        mut self,
        key: &'static str,
        label: &'static str,
        default: &'static str,
        options: Vec<(String, String)>,
    ) -> Self {
        let mut def = ControlDef::new(key, label, ControlValue::String(default.to_string()));
        def.enum_options = Some(options);
        self.controls.push(def);
        self
    }

    pub fn int_control(
        mut self,
        key: &'static str,
        label: &'static str,
        default: i32,
        min: i32,
        max: i32,
    ) -> Self {
        let mut def = ControlDef::new(key, label, ControlValue::Int(default));
        def.int_range = Some((min, max));
        self.controls.push(def);
        self
    }

    /// Add documentation to the last control
    pub fn doc(mut self, doc: &'static str) -> Self {
        if let Some(last) = self.controls.last_mut() {
            last.doc = Some(doc);
        }
        self
    }

    /// Show the last control only while `key` holds `value`.
    /// Multiple calls AND together.
    pub fn visible_when(self, key: &'static str, value: &'static str) -> Self {
        self.visible_when_any(key, &[value])
    }

    /// Show the last control while `key` holds any of `values`
    pub fn visible_when_any(mut self, key: &'static str, values: &[&'static str]) -> Self {
        if let Some(last) = self.controls.last_mut() {
            last.visible_when.push((key, values.to_vec()));
        }
        self
    }

    pub fn action(mut self, label: &'static str, callback: Callback<()>) -> Self {
        self.actions.push(ActionDef { label, callback });
        self
    }

    pub fn with_presets(mut self, presets: Vec<Preset>) -> Self {
        self.presets = presets;
        self
    }

    /// Build the registry - must be called inside a component (uses hooks)
    pub fn build(self, initial_state: Option<String>) -> ControlRegistry {
        for control in &self.controls {
            for (ref_key, _) in &control.visible_when {
                if !self.controls.iter().any(|c| c.key == *ref_key) {
                    panic!(
                        "visible_when on '{}' references unknown control '{}'",
                        control.key, ref_key
                    );
                }
            }
        }

        let state_pairs = initial_state
            .as_deref()
            .map(parse_state)
            .unwrap_or_default();

        let mut values: HashMap<&'static str, Signal<ControlValue>> = HashMap::new();
        for def in &self.controls {
            let raw = state_pairs
                .iter()
                .find(|(k, _)| k == def.key)
                .map(|(_, v)| v.as_str());
            let initial = def.parse(raw);
            values.insert(def.key, use_signal(|| initial));
        }

        ControlRegistry {
            controls: self.controls,
            actions: self.actions,
            values,
            presets: self.presets,
        }
    }
}

/// Registry holding all controls and their current values
#[derive(Clone)]
pub struct ControlRegistry {
    pub controls: Vec<ControlDef>,
    pub actions: Vec<ActionDef>,
    pub values: HashMap<&'static str, Signal<ControlValue>>,
    pub presets: Vec<Preset>,
}

impl PartialEq for ControlRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.controls == other.controls
            && self.values == other.values
            && self.presets == other.presets
            && self.actions.len() == other.actions.len()
    }
}

impl ControlRegistry {
    /// Get a boolean value (reads signal, creating subscription)
    pub fn get_bool(&self, key: &str) -> bool {
        match self.values.get(key).map(|s| s.read().clone()) {
            Some(ControlValue::Bool(b)) => b,
            _ => false,
        }
    }

    /// Get a string value (reads signal, creating subscription)
    pub fn get_string(&self, key: &str) -> String {
        match self.values.get(key).map(|s| s.read().clone()) {
            Some(ControlValue::String(s)) => s,
            _ => String::new(),
        }
    }

    /// Get an integer value (reads signal, creating subscription)
    pub fn get_int(&self, key: &str) -> i32 {
        match self.values.get(key).map(|s| s.read().clone()) {
            Some(ControlValue::Int(i)) => i,
            _ => 0,
        }
    }

    pub fn set_bool(&self, key: &str, value: bool) {
        if let Some(mut signal) = self.values.get(key).copied() {
            signal.set(ControlValue::Bool(value));
        }
    }

    pub fn set_string(&self, key: &str, value: String) {
        if let Some(mut signal) = self.values.get(key).copied() {
            signal.set(ControlValue::String(value));
        }
    }

    /// Set an integer value, clamped to the control's range
    pub fn set_int(&self, key: &str, value: i32) {
        let Some(def) = self.controls.iter().find(|c| c.key == key) else {
            return;
        };
        if let Some(mut signal) = self.values.get(key).copied() {
            signal.set(ControlValue::Int(def.clamp(value)));
        }
    }

    /// Reset every control to its default, then apply the preset's values
    pub fn apply_preset(&self, preset: &Preset) {
        for control in &self.controls {
            if let Some(mut signal) = self.values.get(control.key).copied() {
                signal.set(control.default.clone());
            }
        }
        for (key, value) in &preset.values {
            if let Some(mut signal) = self.values.get(key.as_str()).copied() {
                signal.set(value.clone());
            }
        }
    }

    /// Build URL state string from current non-default values
    pub fn build_state(&self) -> Option<String> {
        let mut builder = StateBuilder::new();

        for def in &self.controls {
            let Some(signal) = self.values.get(def.key) else {
                continue;
            };
            match (&*signal.read(), &def.default) {
                (ControlValue::Bool(v), ControlValue::Bool(default)) => {
                    builder.set_bool(def.key, *v, *default);
                }
                (ControlValue::String(v), ControlValue::String(default)) if v != default => {
                    builder.set_string(def.key, v);
                }
                (ControlValue::Int(v), ControlValue::Int(default)) if v != default => {
                    builder.set_string(def.key, &v.to_string());
                }
                _ => {}
            }
        }

        builder.build_option()
    }

    /// Keep the URL's `state` param in step with the controls. `to_route`
    /// wraps the encoded state in the mock page's route.
    pub fn use_url_sync(&self, to_route: fn(Option<String>) -> Route) {
        let registry = self.clone();
        let mut is_mounted = use_signal(|| false);

        use_effect(move || {
            // Read all values to subscribe to changes
            for signal in registry.values.values() {
                let _ = signal.read();
            }

            if !*is_mounted.peek() {
                is_mounted.set(true);
                return;
            }

            navigator().replace(to_route(registry.build_state()));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style_control() -> ControlDef {
        let mut def = ControlDef::new("style", "Style", ControlValue::String("normal".into()));
        def.enum_options = Some(vec![
            ("normal".to_string(), "Regular".to_string()),
            ("vegan".to_string(), "Vegan".to_string()),
        ]);
        def
    }

    fn step_control() -> ControlDef {
        let mut def = ControlDef::new("step", "Step", ControlValue::Int(0));
        def.int_range = Some((0, 4));
        def
    }

    #[test]
    fn test_parse_missing_value_uses_default() {
        assert_eq!(
            style_control().parse(None),
            ControlValue::String("normal".into())
        );
        assert_eq!(step_control().parse(None), ControlValue::Int(0));
    }

    #[test]
    fn test_parse_known_enum_value() {
        assert_eq!(
            style_control().parse(Some("vegan")),
            ControlValue::String("vegan".into())
        );
    }

    #[test]
    fn test_parse_unknown_enum_value_falls_back_to_default() {
        assert_eq!(
            style_control().parse(Some("keto")),
            ControlValue::String("normal".into())
        );
    }

    #[test]
    fn test_parse_free_string_without_options() {
        let def = ControlDef::new("recipe", "Recipe", ControlValue::String("1".into()));
        assert_eq!(def.parse(Some("7")), ControlValue::String("7".into()));
    }

    #[test]
    fn test_parse_int_clamps_to_range() {
        let def = step_control();
        assert_eq!(def.parse(Some("2")), ControlValue::Int(2));
        assert_eq!(def.parse(Some("99")), ControlValue::Int(4));
        assert_eq!(def.parse(Some("-3")), ControlValue::Int(0));
        assert_eq!(def.parse(Some("abc")), ControlValue::Int(0));
    }

    #[test]
    fn test_clamp_without_range_is_identity() {
        let def = ControlDef::new("count", "Count", ControlValue::Int(0));
        assert_eq!(def.clamp(-50), -50);
        assert_eq!(def.clamp(1_000), 1_000);
    }

    #[test]
    fn test_parse_bool_accepts_one_and_true() {
        let def = ControlDef::new("narration", "Narration", ControlValue::Bool(false));
        assert_eq!(def.parse(Some("1")), ControlValue::Bool(true));
        assert_eq!(def.parse(Some("true")), ControlValue::Bool(true));
        assert_eq!(def.parse(Some("0")), ControlValue::Bool(false));
    }
}
