//! URL state persistence for mock pages
//!
//! Control values travel as base64url-encoded JSON in a single `state` query
//! parameter, so control keys never collide with router parameters.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use std::collections::BTreeMap;

/// Decode a `state` query value into key-value pairs. Malformed input decodes
/// to no pairs, which leaves every control at its default.
pub fn parse_state(encoded: &str) -> Vec<(String, String)> {
    if encoded.is_empty() {
        return Vec::new();
    }

    let Ok(json_bytes) = URL_SAFE_NO_PAD.decode(encoded) else {
        return Vec::new();
    };

    let map: BTreeMap<String, String> = match serde_json::from_slice(&json_bytes) {
        Ok(m) => m,
        Err(_) => return Vec::new(),
    };

    map.into_iter().collect()
}

/// Encode key-value pairs into a `state` query value. Later duplicates win.
pub fn build_state(pairs: &[(String, String)]) -> String {
    let map: BTreeMap<&str, &str> = pairs
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    let json = serde_json::to_string(&map).unwrap_or_else(|_| "{}".to_string());
    URL_SAFE_NO_PAD.encode(json.as_bytes())
}

/// Collects non-default control values into an encoded state string
#[derive(Default)]
pub struct StateBuilder {
    pairs: Vec<(String, String)>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bool(&mut self, key: &str, value: bool, default: bool) {
        if value != default {
            self.pairs
                .push((key.to_string(), if value { "1" } else { "0" }.to_string()));
        }
    }

    pub fn set_string(&mut self, key: &str, value: &str) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    pub fn build_option(self) -> Option<String> {
        if self.pairs.is_empty() {
            None
        } else {
            Some(build_state(&self.pairs))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_roundtrip_sorted_by_key() {
        let encoded = build_state(&pairs(&[("step", "4"), ("screen", "cooking")]));
        assert_eq!(
            parse_state(&encoded),
            pairs(&[("screen", "cooking"), ("step", "4")])
        );
    }

    #[test]
    fn test_encoded_is_url_safe() {
        let encoded = build_state(&pairs(&[("screen", "share?&=/")]));
        assert!(encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_garbage_decodes_to_empty() {
        assert!(parse_state("").is_empty());
        assert!(parse_state("not base64!!").is_empty());
        // Valid base64, but not a JSON object of strings
        let not_a_map = URL_SAFE_NO_PAD.encode(b"[1,2,3]");
        assert!(parse_state(&not_a_map).is_empty());
    }

    #[test]
    fn test_builder_skips_defaults() {
        let mut builder = StateBuilder::new();
        builder.set_bool("narration", false, false);
        assert_eq!(builder.build_option(), None);

        let mut builder = StateBuilder::new();
        builder.set_bool("narration", true, false);
        let encoded = builder.build_option().unwrap();
        assert_eq!(parse_state(&encoded), pairs(&[("narration", "1")]));
    }
}
