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

//! Binding of normalized [`Value`] trees to typed records through serde.

use crate::s3::error::BindingErr;
use crate::s3::utils::to_iso8601utc;
use crate::s3::xml::value::{ObjectMap, Value};
use serde::de::{
    self, DeserializeOwned, DeserializeSeed, Error as _, IntoDeserializer, MapAccess, SeqAccess,
    Unexpected, Visitor,
};
use serde::forward_to_deserialize_any;
use std::str::FromStr;

/// Binds `value` to the record type `T`.
///
/// Field names are matched exactly. Unknown fields are ignored and `null` fields count as absent.
/// Apart from parsing integer fields out of their text, no coercion happens here.
pub fn bind<T: DeserializeOwned>(value: &Value) -> Result<T, BindingErr> {
    T::deserialize(ValueDeserializer::new(value))
        .map_err(|e| e.with_record(std::any::type_name::<T>()))
}

/// A [`serde::Deserializer`] reading from a borrowed [`Value`].
#[derive(Clone, Copy, Debug)]
pub struct ValueDeserializer<'a> {
    value: &'a Value,
}

impl<'a> ValueDeserializer<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    fn unexpected(&self) -> Unexpected<'a> {
        match self.value {
            Value::Null => Unexpected::Unit,
            Value::Bool(b) => Unexpected::Bool(*b),
            Value::String(s) => Unexpected::Str(s),
            Value::Timestamp(_) => Unexpected::Other("timestamp"),
            Value::Array(_) => Unexpected::Seq,
            Value::Object(_) => Unexpected::Map,
        }
    }

    fn parse_number<T: FromStr>(&self, exp: &'static str) -> Result<T, BindingErr> {
        match self.value {
            Value::String(s) => s.trim().parse().map_err(|_| {
                BindingErr::invalid_value(Unexpected::Str(s), &exp)
            }),
            _ => Err(BindingErr::invalid_type(self.unexpected(), &exp)),
        }
    }
}

macro_rules! deserialize_number {
    ($($method:ident => $visit:ident: $ty:ty,)*) => {
        $(
            fn $method<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, BindingErr> {
                visitor.$visit(self.parse_number::<$ty>(stringify!($ty))?)
            }
        )*
    };
}

impl<'de, 'a> de::Deserializer<'de> for ValueDeserializer<'a> {
    type Error = BindingErr;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, BindingErr> {
        match self.value {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(*b),
            Value::String(s) => visitor.visit_str(s),
            Value::Timestamp(t) => visitor.visit_string(to_iso8601utc(*t)),
            Value::Array(items) => visitor.visit_seq(SeqDeserializer {
                iter: items.iter(),
            }),
            Value::Object(map) => visitor.visit_map(MapDeserializer::new(map)),
        }
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, BindingErr> {
        match self.value {
            Value::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, BindingErr> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_str<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, BindingErr> {
        self.deserialize_string(visitor)
    }

    // a key or name spelled `true` is still text to a string field
    fn deserialize_string<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, BindingErr> {
        match self.value {
            Value::Bool(b) => visitor.visit_string(b.to_string()),
            _ => self.deserialize_any(visitor),
        }
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, BindingErr> {
        match self.value {
            // an element without children, e.g. <Owner/>
            Value::Null => visitor.visit_map(MapDeserializer::empty()),
            _ => self.deserialize_any(visitor),
        }
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, BindingErr> {
        match self.value {
            Value::String(s) => visitor.visit_enum(s.as_str().into_deserializer()),
            _ => Err(BindingErr::invalid_type(self.unexpected(), &"string variant")),
        }
    }

    deserialize_number! {
        deserialize_i8 => visit_i8: i8,
        deserialize_i16 => visit_i16: i16,
        deserialize_i32 => visit_i32: i32,
        deserialize_i64 => visit_i64: i64,
        deserialize_u8 => visit_u8: u8,
        deserialize_u16 => visit_u16: u16,
        deserialize_u32 => visit_u32: u32,
        deserialize_u64 => visit_u64: u64,
    }

    forward_to_deserialize_any! {
        bool i128 u128 f32 f64 char bytes byte_buf unit unit_struct seq tuple
        tuple_struct map identifier ignored_any
    }
}

struct SeqDeserializer<'a> {
    iter: std::slice::Iter<'a, Value>,
}

impl<'de, 'a> SeqAccess<'de> for SeqDeserializer<'a> {
    type Error = BindingErr;

    fn next_element_seed<T: DeserializeSeed<'de>>(
        &mut self,
        seed: T,
    ) -> Result<Option<T::Value>, BindingErr> {
        match self.iter.next() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct MapDeserializer<'a> {
    iter: Box<dyn Iterator<Item = (&'a str, &'a Value)> + 'a>,
    value: Option<&'a Value>,
}

impl<'a> MapDeserializer<'a> {
    fn new(map: &'a ObjectMap) -> Self {
        Self {
            iter: Box::new(map.iter().filter(|(_, v)| !v.is_null())),
            value: None,
        }
    }

    fn empty() -> Self {
        Self {
            iter: Box::new(std::iter::empty()),
            value: None,
        }
    }
}

impl<'de, 'a> MapAccess<'de> for MapDeserializer<'a> {
    type Error = BindingErr;

    fn next_key_seed<K: DeserializeSeed<'de>>(
        &mut self,
        seed: K,
    ) -> Result<Option<K::Value>, BindingErr> {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(key.into_deserializer()).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V: DeserializeSeed<'de>>(
        &mut self,
        seed: V,
    ) -> Result<V::Value, BindingErr> {
        match self.value.take() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(BindingErr::custom("value requested before key")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::utils::{UtcTime, from_iso8601utc};
    use crate::s3::xml::XmlNormalizer;
    use serde::Deserialize;
    use xmltree::Element;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "PascalCase")]
    struct Entry {
        key: String,
        last_modified: UtcTime,
        #[serde(default)]
        size: String,
        #[serde(default)]
        is_latest: bool,
        #[serde(default)]
        max_keys: u32,
        tags: Option<Vec<String>>,
    }

    fn value(xml: &str) -> Value {
        XmlNormalizer::default()
            .normalize(&Element::parse(xml.as_bytes()).unwrap())
            .unwrap()
    }

    #[test]
    fn test_bind_record() {
        let entry: Entry = bind(&value(
            "<Entry><Key>a.txt</Key><LastModified>2024-01-01T00:00:00.000Z</LastModified>\
             <Size>10</Size><IsLatest>true</IsLatest><MaxKeys>50</MaxKeys><Unknown>x</Unknown></Entry>",
        ))
        .unwrap();

        assert_eq!(
            entry,
            Entry {
                key: "a.txt".into(),
                last_modified: from_iso8601utc("2024-01-01T00:00:00.000Z").unwrap(),
                size: "10".into(),
                is_latest: true,
                max_keys: 50,
                tags: None,
            }
        );
    }

    #[test]
    fn test_null_fields_take_defaults() {
        let entry: Entry = bind(&value(
            "<Entry><Key>a.txt</Key><LastModified>2024-01-01T00:00:00Z</LastModified>\
             <Size/><Tags/></Entry>",
        ))
        .unwrap();
        assert_eq!(entry.size, "");
        assert_eq!(entry.tags, None);
    }

    #[test]
    fn test_missing_required_field() {
        let err = bind::<Entry>(&value("<Entry><Key>a.txt</Key></Entry>")).unwrap_err();
        assert!(err.record.ends_with("Entry"));
        assert!(err.message.contains("LastModified"), "{}", err.message);
    }

    #[test]
    fn test_shape_mismatch() {
        let err = bind::<Entry>(&value(
            "<Entry><Key><Nested>x</Nested></Key>\
             <LastModified>2024-01-01T00:00:00Z</LastModified></Entry>",
        ))
        .unwrap_err();
        assert!(err.message.contains("invalid type"), "{}", err.message);

        let err = bind::<Entry>(&value(
            "<Entry><Key>a</Key><LastModified>2024-01-01T00:00:00Z</LastModified>\
             <MaxKeys>many</MaxKeys></Entry>",
        ))
        .unwrap_err();
        assert!(err.message.contains("many"), "{}", err.message);
    }

    #[test]
    fn test_empty_element_binds_struct() {
        #[derive(Debug, Default, Deserialize, PartialEq)]
        #[serde(rename_all = "PascalCase", default)]
        struct Listing {
            name: String,
            max_keys: u32,
        }
        let listing: Listing = bind(&value("<Listing/>")).unwrap();
        assert_eq!(listing, Listing::default());

        // required fields are still enforced
        assert!(bind::<Entry>(&Value::Null).is_err());
    }

    #[test]
    fn test_bool_text_binds_to_string_fields() {
        let entry: Entry = bind(&value(
            "<Entry><Key>true</Key><LastModified>2024-01-01T00:00:00Z</LastModified>\
             <Size>false</Size><IsLatest>true</IsLatest></Entry>",
        ))
        .unwrap();
        assert_eq!(entry.key, "true");
        assert_eq!(entry.size, "false");
        assert!(entry.is_latest);

        let keys: Vec<String> = bind(&Value::Array(vec![Value::Bool(false)])).unwrap();
        assert_eq!(keys, ["false"]);
    }

    #[test]
    fn test_bool_is_not_coerced_from_text() {
        #[derive(Debug, Deserialize)]
        struct Flag {
            #[serde(rename = "IsTruncated")]
            _is_truncated: bool,
        }
        let mut map = ObjectMap::new();
        map.insert("IsTruncated", Value::from("yes"));
        assert!(bind::<Flag>(&Value::Object(map)).is_err());
    }

    #[test]
    fn test_bind_sequence_and_enum() {
        #[derive(Debug, Deserialize, PartialEq)]
        enum Class {
            #[serde(rename = "STANDARD")]
            Standard,
        }
        let items = Value::Array(vec![Value::from("STANDARD")]);
        let bound: Vec<Class> = bind(&items).unwrap();
        assert_eq!(bound, [Class::Standard]);
        assert!(bind::<Vec<Class>>(&Value::Array(vec![Value::from("GLACIER")])).is_err());
    }
}
