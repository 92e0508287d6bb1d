//! Loosely-typed attribute bag
//!
//! Attribute values arrive as arbitrary JSON. Accessors return `None` both
//! when a key is missing and when its value has another JSON type, so callers
//! pick their default in one place and a malformed attribute can never abort
//! a render.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attrs(Map<String, Value>);

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String value of `key`.
    pub fn str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Numeric value of `key`, read as a float whatever its JSON spelling.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// Numeric value of `key` truncated toward zero.
    ///
    /// Out-of-range values saturate; clamping to a meaningful range is left
    /// to the caller.
    pub fn integer(&self, key: &str) -> Option<i64> {
        self.number(key).map(|n| n.trunc() as i64)
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Map<String, Value>> for Attrs {
    fn from(map: Map<String, Value>) -> Self {
        Attrs(map)
    }
}
