// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::s3::utils::{UtcTime, to_iso8601utc};
use std::fmt;

/// A normalized XML value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// An element without content, e.g. `<Prefix/>`.
    Null,
    Bool(bool),
    String(String),
    Timestamp(UtcTime),
    Array(Vec<Value>),
    Object(ObjectMap),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<&UtcTime> {
        match self {
            Value::Timestamp(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectMap> {
        match self {
            Value::Object(m) => Some(m),
            _ => None,
        }
    }

    /// Looks up a field of an object value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|m| m.get(key))
    }

    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::String(_) => "string",
            Value::Timestamp(_) => "timestamp",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<ObjectMap> for Value {
    fn from(m: ObjectMap) -> Self {
        Value::Object(m)
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    write!(f, "{}", serde_json::Value::String(s.to_string()))
}

/// JSON-like rendering; timestamps are printed as quoted ISO-8601 strings.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::String(s) => write_quoted(f, s),
            Value::Timestamp(t) => write_quoted(f, &to_iso8601utc(*t)),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_quoted(f, key)?;
                    write!(f, ":{value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

/// Field name to value mapping that keeps document order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectMap {
    entries: Vec<(String, Value)>,
}

impl ObjectMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field. An existing field with the same name has its value replaced and keeps its
    /// original position.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl FromIterator<(String, Value)> for ObjectMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut map = ObjectMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl IntoIterator for ObjectMap {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::utils::from_iso8601utc;

    #[test]
    fn test_object_map_keeps_first_position_last_value() {
        let mut map = ObjectMap::new();
        map.insert("Name", Value::from("a"));
        map.insert("Prefix", Value::Null);
        map.insert("Name", Value::from("b"));

        assert_eq!(map.keys().collect::<Vec<_>>(), ["Name", "Prefix"]);
        assert_eq!(map.get("Name"), Some(&Value::from("b")));
        assert_eq!(map.remove("Prefix"), Some(Value::Null));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_display_is_json_like() {
        let mut owner = ObjectMap::new();
        owner.insert("ID", Value::from("o\"1"));
        let mut map = ObjectMap::new();
        map.insert("Owner", Value::Object(owner));
        map.insert("IsTruncated", Value::Bool(false));
        map.insert("Prefix", Value::Null);
        map.insert(
            "LastModified",
            Value::Timestamp(from_iso8601utc("2024-01-01T00:00:00.000Z").unwrap()),
        );
        map.insert("Buckets", Value::Array(vec![Value::from("x"), Value::Null]));

        assert_eq!(
            Value::Object(map).to_string(),
            r#"{"Owner":{"ID":"o\"1"},"IsTruncated":false,"Prefix":null,"LastModified":"2024-01-01T00:00:00.000Z","Buckets":["x",null]}"#
        );
    }

    #[test]
    fn test_accessors() {
        let mut map = ObjectMap::new();
        map.insert("Key", Value::from("a.txt"));
        let value = Value::Object(map);
        assert_eq!(value.get("Key").and_then(Value::as_str), Some("a.txt"));
        assert!(value.get("Missing").is_none());
        assert_eq!(value.kind(), "object");
        assert!(Value::Null.is_null());
    }
}
