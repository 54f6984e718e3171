//! Generic attribute store backing the typed settings surface
//!
//! Attributes are the string-keyed values ultimately applied to the
//! `<rapi-doc>` element in the browser. Typed accessors on
//! [`RapiDocSettings`](crate::settings::RapiDocSettings) read and write
//! entries here; at render time the whole map is serialized to JSON once.

use crate::error::{Error, Result};
use crate::settings::enums::AttributeEnum;
use serde_json::{Map, Value};

/// String-keyed store for viewer attributes
#[derive(Debug, Clone, Default)]
pub struct AttributeMap {
    entries: Map<String, Value>,
}

impl AttributeMap {
    /// Create an empty attribute map
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a boolean attribute
    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.entries.insert(key.to_string(), Value::Bool(value));
    }

    /// Store a string attribute verbatim
    pub fn set_string(&mut self, key: &str, value: impl Into<String>) {
        self.entries.insert(key.to_string(), Value::String(value.into()));
    }

    /// Store an enumeration member as its lower-case attribute value
    pub fn set_enum<E: AttributeEnum>(&mut self, key: &str, value: E) {
        self.set_string(key, value.as_str());
    }

    /// Store a raw JSON value under an arbitrary key
    ///
    /// Escape hatch for viewer attributes the typed surface does not cover.
    pub fn insert_raw(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    /// Read a boolean attribute, falling back to `default` when absent
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.entries.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    /// Read a string attribute, `None` when absent
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    /// Read a string attribute, falling back to `default` when absent
    pub fn get_string_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get_string(key).unwrap_or(default)
    }

    /// Read an enumeration attribute, falling back to `default` when absent
    ///
    /// A stored value that matches no member fails with
    /// [`Error::EnumParse`]; it indicates a programming error upstream and
    /// must not be silently defaulted.
    pub fn get_enum<E: AttributeEnum>(&self, key: &str, default: E) -> Result<E> {
        let Some(stored) = self.entries.get(key) else {
            return Ok(default);
        };
        let text = stored.as_str().unwrap_or_default();
        E::from_attribute(text).ok_or_else(|| {
            let raw = stored.as_str().map(str::to_owned).unwrap_or_else(|| stored.to_string());
            Error::enum_parse(key, raw, E::NAME)
        })
    }

    /// Whether an attribute is present
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove an attribute, returning the stored value if present
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Number of stored attributes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no attributes
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over stored attributes
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Serialize the full map to a JSON object string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::enums::{SortEndpointsBy, Theme};
    use serde_json::json;

    #[test]
    fn test_empty_map() {
        let map = AttributeMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.to_json().unwrap(), "{}");
    }

    #[test]
    fn test_bool_round_trip() {
        let mut map = AttributeMap::new();
        map.set_bool("allow-try", false);
        assert!(!map.get_bool("allow-try", true));
        // Absent key falls back to the supplied default
        assert!(map.get_bool("allow-search", true));
    }

    #[test]
    fn test_string_round_trip() {
        let mut map = AttributeMap::new();
        map.set_string("heading-text", "Pet Store");
        assert_eq!(map.get_string("heading-text"), Some("Pet Store"));
        assert_eq!(map.get_string("goto-path"), None);
        assert_eq!(map.get_string_or("response-area-height", "300px"), "300px");
    }

    #[test]
    fn test_enum_stored_as_lowercase_member_name() {
        let mut map = AttributeMap::new();
        map.set_enum("sort-endpoints-by", SortEndpointsBy::Method);
        assert_eq!(map.get_string("sort-endpoints-by"), Some("method"));
        assert_eq!(
            map.get_enum("sort-endpoints-by", SortEndpointsBy::Path).unwrap(),
            SortEndpointsBy::Method
        );
    }

    #[test]
    fn test_enum_default_when_absent() {
        let map = AttributeMap::new();
        assert_eq!(map.get_enum("theme", Theme::Dark).unwrap(), Theme::Dark);
    }

    #[test]
    fn test_enum_parse_failure_on_injected_value() {
        let mut map = AttributeMap::new();
        map.insert_raw("sort-endpoints-by", json!("bogus"));

        let err = map
            .get_enum("sort-endpoints-by", SortEndpointsBy::Path)
            .unwrap_err();
        assert!(matches!(err, Error::EnumParse { .. }));
        assert!(err.to_string().contains("sort-endpoints-by"));
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_enum_parse_failure_on_wrong_type() {
        let mut map = AttributeMap::new();
        map.insert_raw("theme", json!(true));

        let err = map.get_enum("theme", Theme::Dark).unwrap_err();
        assert!(matches!(err, Error::EnumParse { .. }));
    }

    #[test]
    fn test_to_json_contains_entries() {
        let mut map = AttributeMap::new();
        map.set_enum("theme", Theme::Dark);
        map.set_bool("allow-search", true);

        let json = map.to_json().unwrap();
        assert!(json.contains("\"theme\":\"dark\""));
        assert!(json.contains("\"allow-search\":true"));
    }

    #[test]
    fn test_remove() {
        let mut map = AttributeMap::new();
        map.set_string("server-url", "https://api.example.com");
        assert!(map.contains("server-url"));
        assert_eq!(map.remove("server-url"), Some(json!("https://api.example.com")));
        assert!(!map.contains("server-url"));
    }
}
