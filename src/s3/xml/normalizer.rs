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

//! Conversion of S3 XML response trees into [`Value`] trees.
//!
//! S3 documents carry no type information. Leaf text is coerced by tag name (timestamps) or by
//! content (`true` / `false`), and the only way to tell a collection wrapper from a nested record
//! is the tag name. Both lookups go through a [`FieldTable`].

use crate::s3::error::NormalizationErr;
use crate::s3::utils::from_iso8601utc;
use crate::s3::xml::value::{ObjectMap, Value};
use std::collections::HashMap;
use xmltree::{Element, XMLNode};

/// How the normalizer treats an element with a given tag name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Leaf text is an ISO-8601 timestamp.
    Timestamp,
    /// Each child element is one item of an array.
    Collection,
}

/// Tag name to [`FieldKind`] lookup table.
///
/// The default table knows `CreationDate` and `LastModified` as timestamps and `Buckets` as the
/// only collection. `CommonPrefixes` is deliberately absent; add it with
/// [`with`](FieldTable::with) when listing with a delimiter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldTable {
    kinds: HashMap<String, FieldKind>,
}

impl Default for FieldTable {
    fn default() -> Self {
        Self::empty()
            .with("CreationDate", FieldKind::Timestamp)
            .with("LastModified", FieldKind::Timestamp)
            .with("Buckets", FieldKind::Collection)
    }
}

impl FieldTable {
    /// A table without entries: every leaf is a string or boolean, nothing is a collection.
    pub fn empty() -> Self {
        Self {
            kinds: HashMap::new(),
        }
    }

    /// Adds or replaces the kind of `name`.
    pub fn with(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.kinds.insert(name.into(), kind);
        self
    }

    pub fn kind(&self, name: &str) -> Option<FieldKind> {
        self.kinds.get(name).copied()
    }

    fn is_collection(&self, name: &str) -> bool {
        self.kind(name) == Some(FieldKind::Collection)
    }
}

/// Walks [`Element`] trees depth-first, in document order.
#[derive(Clone, Debug, Default)]
pub struct XmlNormalizer {
    fields: FieldTable,
}

fn has_child_elements(element: &Element) -> bool {
    element
        .children
        .iter()
        .any(|n| matches!(n, XMLNode::Element(_)))
}

/// Concatenated text and CDATA content, or `None` when it is blank.
fn significant_text(element: &Element) -> Option<String> {
    let mut text = String::new();
    for node in &element.children {
        if let XMLNode::Text(t) | XMLNode::CData(t) = node {
            text.push_str(t);
        }
    }
    (!text.trim().is_empty()).then_some(text)
}

impl XmlNormalizer {
    pub fn new(fields: FieldTable) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &FieldTable {
        &self.fields
    }

    /// Normalizes `element` into a [`Value`].
    ///
    /// An element without child elements or text becomes [`Value::Null`], an element holding
    /// only text becomes a scalar, anything else becomes an object keyed by child tag name.
    /// Repeated child tags outside a collection overwrite each other; the last one wins.
    pub fn normalize(&self, element: &Element) -> Result<Value, NormalizationErr> {
        if has_child_elements(element) {
            return self.normalize_object(element);
        }
        match significant_text(element) {
            Some(text) => self.coerce(&element.name, text),
            None => Ok(Value::Null),
        }
    }

    fn normalize_child(&self, child: &Element) -> Result<Value, NormalizationErr> {
        if !has_child_elements(child)
            && let Some(text) = significant_text(child)
        {
            return self.coerce(&child.name, text);
        }
        if self.fields.is_collection(&child.name) {
            return self.normalize_collection(child);
        }
        self.normalize(child)
    }

    fn normalize_object(&self, element: &Element) -> Result<Value, NormalizationErr> {
        let mut object = ObjectMap::new();

        for node in &element.children {
            match node {
                XMLNode::Element(child) => {
                    if child.name.trim().is_empty() && significant_text(child).is_none() {
                        continue;
                    }
                    match self.normalize_child(child) {
                        Ok(value) => object.insert(child.name.as_str(), value),
                        Err(e) => {
                            object.insert(child.name.as_str(), e.partial.clone());
                            return Err(e.within(&element.name, Value::Object(object)));
                        }
                    }
                }
                XMLNode::Text(t) | XMLNode::CData(t) => {
                    if t.trim().is_empty() {
                        continue;
                    }
                    return Err(NormalizationErr::new(
                        element.name.as_str(),
                        format!("text {:?} mixed with child elements", t.trim()),
                        Value::Object(object),
                    ));
                }
                XMLNode::Comment(_) | XMLNode::ProcessingInstruction(..) => {
                    log::trace!("skipping non-element node under <{}>", element.name);
                }
            }
        }

        Ok(Value::Object(object))
    }

    fn normalize_collection(&self, element: &Element) -> Result<Value, NormalizationErr> {
        let mut items = Vec::new();

        for node in &element.children {
            match node {
                XMLNode::Element(item) => match self.normalize(item) {
                    Ok(value) => items.push(value),
                    Err(e) => {
                        items.push(e.partial.clone());
                        return Err(e.within(&element.name, Value::Array(items)));
                    }
                },
                XMLNode::Text(t) | XMLNode::CData(t) => {
                    if t.trim().is_empty() {
                        continue;
                    }
                    return Err(NormalizationErr::new(
                        element.name.as_str(),
                        format!("text {:?} mixed with collection items", t.trim()),
                        Value::Array(items),
                    ));
                }
                XMLNode::Comment(_) | XMLNode::ProcessingInstruction(..) => {
                    log::trace!("skipping non-element node under <{}>", element.name);
                }
            }
        }

        Ok(Value::Array(items))
    }

    fn coerce(&self, name: &str, text: String) -> Result<Value, NormalizationErr> {
        if self.fields.kind(name) == Some(FieldKind::Timestamp) {
            return match from_iso8601utc(text.trim()) {
                Ok(t) => Ok(Value::Timestamp(t)),
                Err(e) => Err(NormalizationErr::new(
                    name,
                    format!("invalid timestamp {text:?}: {e}"),
                    Value::String(text),
                )),
            };
        }
        Ok(match text.as_str() {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => Value::String(text),
        })
    }
}
