//! Custom attributes attached to log records.
//!
//! # Design Decisions
//! - Values are scalars only; nested data is flattened by the caller
//! - Keys are kept sorted so emitted payloads are deterministic
//! - Merging is right-biased: the later source wins on key collision

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A scalar attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl AttributeValue {
    /// Convert to a JSON value for vendor surfaces that take arbitrary JSON.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            AttributeValue::Null => serde_json::Value::Null,
            AttributeValue::Bool(b) => serde_json::Value::Bool(*b),
            AttributeValue::Int(i) => serde_json::Value::from(*i),
            AttributeValue::Float(f) => serde_json::Value::from(*f),
            AttributeValue::String(s) => serde_json::Value::String(s.clone()),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Null => write!(f, "null"),
            AttributeValue::Bool(b) => write!(f, "{}", b),
            AttributeValue::Int(i) => write!(f, "{}", i),
            AttributeValue::Float(v) => write!(f, "{}", v),
            AttributeValue::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Int(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Int(value.into())
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        AttributeValue::Int(value.into())
    }
}

impl From<u16> for AttributeValue {
    fn from(value: u16) -> Self {
        AttributeValue::Int(value.into())
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Float(value)
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(AttributeValue::Null)
    }
}

/// A mapping from attribute name to scalar value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomAttributes(BTreeMap<String, AttributeValue>);

impl CustomAttributes {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or overwrite an attribute.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttributeValue)> {
        self.0.iter()
    }

    /// Merge `overrides` on top of `self`; keys in `overrides` win.
    pub fn merged(&self, overrides: &CustomAttributes) -> CustomAttributes {
        let mut merged = self.clone();
        for (key, value) in overrides.iter() {
            merged.0.insert(key.clone(), value.clone());
        }
        merged
    }

    /// `None` when empty, so sinks never receive an empty map.
    pub fn into_non_empty(self) -> Option<CustomAttributes> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

impl<K, V> FromIterator<(K, V)> for CustomAttributes
where
    K: Into<String>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_overrides() {
        let base = CustomAttributes::new().with("a", 1).with("shared", "base");
        let overrides = CustomAttributes::new().with("b", 2).with("shared", "param");

        let merged = base.merged(&overrides);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.get("a"), Some(&AttributeValue::Int(1)));
        assert_eq!(merged.get("b"), Some(&AttributeValue::Int(2)));
        assert_eq!(merged.get("shared"), Some(&AttributeValue::from("param")));
    }

    #[test]
    fn test_into_non_empty() {
        assert!(CustomAttributes::new().into_non_empty().is_none());
        assert!(CustomAttributes::new().with("a", true).into_non_empty().is_some());
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let attrs: CustomAttributes = [("x", AttributeValue::from(99)), ("y", "blue".into())]
            .into_iter()
            .collect();
        let json = serde_json::to_value(&attrs).unwrap();
        assert_eq!(json, serde_json::json!({"x": 99, "y": "blue"}));
    }

    #[test]
    fn test_option_value_maps_to_null() {
        assert_eq!(AttributeValue::from(None::<i64>), AttributeValue::Null);
        assert_eq!(AttributeValue::Null.to_json(), serde_json::Value::Null);
    }
}
