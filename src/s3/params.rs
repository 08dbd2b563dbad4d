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

//! Encoding of typed request objects into query parameters

use crate::s3::error::ValidationErr;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Rewrites a camelCase field name into its wire form: a hyphen before every uppercase letter,
/// everything lower-cased (`maxKeys` becomes `max-keys`).
pub fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_uppercase() {
            out.push('-');
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Encodes a request object into wire parameter names and string values.
///
/// Fields serialized as `null` are omitted; `None` encodes to an empty mapping. The request must
/// serialize to a flat object (camelCase field names, scalar values).
///
/// # Examples
///
/// ```
/// use objstore::s3::params::encode_params;
/// use objstore::s3::types::ListContentsRequest;
///
/// let req = ListContentsRequest::builder().prefix("logs/").max_keys(50).build();
/// let params = encode_params(Some(&req)).unwrap();
/// assert_eq!(params.get("max-keys").map(String::as_str), Some("50"));
/// assert!(!params.contains_key("delimiter"));
/// ```
pub fn encode_params<T: Serialize>(
    request: Option<&T>,
) -> Result<BTreeMap<String, String>, ValidationErr> {
    let mut params = BTreeMap::new();
    let Some(request) = request else {
        return Ok(params);
    };

    let fields = match serde_json::to_value(request)? {
        JsonValue::Null => return Ok(params),
        JsonValue::Object(fields) => fields,
        other => {
            return Err(ValidationErr::UnsupportedParameter {
                name: String::new(),
                reason: format!("request must be an object, found {other}"),
            });
        }
    };

    for (name, value) in fields {
        let value = match value {
            JsonValue::Null => continue,
            JsonValue::String(s) => s,
            JsonValue::Bool(b) => b.to_string(),
            JsonValue::Number(n) => n.to_string(),
            JsonValue::Array(_) | JsonValue::Object(_) => {
                return Err(ValidationErr::UnsupportedParameter {
                    name,
                    reason: "nested values cannot be encoded as query parameters".into(),
                });
            }
        };
        params.insert(to_kebab_case(&name), value);
    }

    Ok(params)
}
