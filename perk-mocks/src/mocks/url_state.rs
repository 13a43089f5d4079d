//! URL state persistence for mock pages
//!
//! Serializes control state as base64-encoded JSON in the query string,
//! keeping URLs opaque and avoiding conflicts with query parameter names.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use std::collections::BTreeMap;

/// Decode a state string from a URL query parameter into key-value pairs.
///
/// Anything that does not decode yields an empty state.
pub fn parse_state(encoded: &str) -> BTreeMap<String, String> {
    if encoded.is_empty() {
        return BTreeMap::new();
    }

    let Ok(json_bytes) = URL_SAFE_NO_PAD.decode(encoded) else {
        return BTreeMap::new();
    };

    serde_json::from_slice(&json_bytes).unwrap_or_default()
}

/// Encode key-value pairs into a base64 state string for the URL.
pub fn build_state(pairs: &BTreeMap<String, String>) -> String {
    // A map of strings always serializes
    let json = serde_json::to_string(pairs).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json.as_bytes())
}

/// Typed reads over a decoded state, with per-key defaults
pub struct StateReader {
    pairs: BTreeMap<String, String>,
}

impl StateReader {
    pub fn new(encoded: Option<&str>) -> Self {
        Self {
            pairs: encoded.map(parse_state).unwrap_or_default(),
        }
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.pairs.get(key).map(String::as_str) {
            Some("1") => true,
            Some("0") => false,
            _ => default,
        }
    }

    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.pairs
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    pub fn get_parsed<T: std::str::FromStr>(&self, key: &str, default: T) -> T {
        self.pairs
            .get(key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}

/// Builder to collect state changes and produce an encoded state string.
///
/// Values equal to their default are left out so untouched controls keep the
/// URL short.
#[derive(Default)]
pub struct StateBuilder {
    pairs: BTreeMap<String, String>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bool(&mut self, key: &str, value: bool, default: bool) {
        if value != default {
            self.pairs
                .insert(key.to_string(), if value { "1" } else { "0" }.to_string());
        }
    }

    pub fn set_string(&mut self, key: &str, value: &str, default: &str) {
        if value != default {
            self.pairs.insert(key.to_string(), value.to_string());
        }
    }

    pub fn build(self) -> String {
        build_state(&self.pairs)
    }

    pub fn build_option(self) -> Option<String> {
        if self.pairs.is_empty() {
            None
        } else {
            Some(self.build())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_output_reads_back() {
        let mut builder = StateBuilder::new();
        builder.set_bool("narrow", true, false);
        builder.set_string("title", "Save Time & Money", "Save Time");
        let encoded = builder.build();

        let reader = StateReader::new(Some(&encoded));
        assert!(reader.get_bool("narrow", false));
        assert_eq!(reader.get_string("title", "Save Time"), "Save Time & Money");
        assert_eq!(reader.get_string("description", "fallback"), "fallback");
    }

    #[test]
    fn test_defaults_are_omitted() {
        let mut builder = StateBuilder::new();
        builder.set_bool("narrow", false, false);
        builder.set_string("title", "Save Time", "Save Time");
        assert_eq!(builder.build_option(), None);
    }

    #[test]
    fn test_garbage_state_is_empty() {
        assert!(parse_state("not base64!!").is_empty());
        let not_json = URL_SAFE_NO_PAD.encode(b"[1, 2, 3]");
        assert!(parse_state(&not_json).is_empty());
        assert!(parse_state("").is_empty());
    }

    #[test]
    fn test_get_parsed_falls_back() {
        let mut pairs = BTreeMap::new();
        pairs.insert("width".to_string(), "375".to_string());
        pairs.insert("bad".to_string(), "wide".to_string());
        let encoded = build_state(&pairs);

        let reader = StateReader::new(Some(&encoded));
        assert_eq!(reader.get_parsed("width", 0u32), 375);
        assert_eq!(reader.get_parsed("bad", 0u32), 0);
        assert_eq!(reader.get_parsed("missing", 1280u32), 1280);
    }
}
