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

use crate::s3::utils::url_encode;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Multimap for string key and string value, used for headers and query parameters.
pub type Multimap = multimap::MultiMap<String, String>;

#[inline]
fn collapse_spaces(s: &str) -> Cow<'_, str> {
    let trimmed = s.trim();
    if !trimmed.contains("  ") {
        return Cow::Borrowed(trimmed);
    }
    let mut result = String::with_capacity(trimmed.len());
    let mut prev_space = false;
    for c in trimmed.chars() {
        if c == ' ' {
            if !prev_space {
                result.push(' ');
                prev_space = true;
            }
        } else {
            result.push(c);
            prev_space = false;
        }
    }
    Cow::Owned(result)
}

pub trait MultimapExt {
    /// Adds a key-value pair to the multimap
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Adds a multimap to the current multimap
    fn add_multimap(&mut self, other: Multimap);

    /// Adds every pair of an encoded parameter mapping
    fn add_params(&mut self, params: BTreeMap<String, String>);

    /// Converts multimap to HTTP query string, keys in sorted order
    fn to_query_string(&self) -> String;

    /// Converts multimap to canonical query string
    fn get_canonical_query_string(&self) -> String;

    /// Converts multimap to signed headers and canonical headers
    fn get_canonical_headers(&self) -> (String, String);
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn add_multimap(&mut self, other: Multimap) {
        for (key, values) in other.into_iter() {
            self.insert_many(key, values);
        }
    }

    fn add_params(&mut self, params: BTreeMap<String, String>) {
        for (key, value) in params {
            self.insert(key, value);
        }
    }

    fn to_query_string(&self) -> String {
        self.get_canonical_query_string()
    }

    fn get_canonical_query_string(&self) -> String {
        let mut sorted: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (key, values) in self.iter_all() {
            let entry = sorted.entry(key.as_str()).or_default();
            entry.extend(values.iter().map(|s| s.as_str()));
            entry.sort_unstable();
        }

        let mut query = String::new();
        for (key, values) in sorted {
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&url_encode(key));
                query.push('=');
                query.push_str(&url_encode(value));
            }
        }
        query
    }

    fn get_canonical_headers(&self) -> (String, String) {
        let mut btmap: BTreeMap<String, String> = BTreeMap::new();

        for (k, values) in self.iter_all() {
            let key = k.to_lowercase();
            if key == "authorization" || key == "user-agent" {
                continue;
            }

            let mut vs: Vec<&String> = values.iter().collect();
            vs.sort();

            let mut value = String::new();
            for v in vs {
                if !value.is_empty() {
                    value.push(',');
                }
                value.push_str(&collapse_spaces(v));
            }
            btmap.insert(key, value);
        }

        let mut signed_headers = String::new();
        let mut canonical_headers = String::new();
        let mut add_delim = false;
        for (key, value) in &btmap {
            if add_delim {
                signed_headers.push(';');
                canonical_headers.push('\n');
            }

            signed_headers.push_str(key);

            canonical_headers.push_str(key);
            canonical_headers.push(':');
            canonical_headers.push_str(value);

            add_delim = true;
        }

        (signed_headers, canonical_headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_spaces() {
        assert_eq!(collapse_spaces("  hello world  "), "hello world");
        assert!(matches!(collapse_spaces("application/xml"), Cow::Borrowed(_)));

        let result = collapse_spaces("hello  world  foo   bar");
        assert_eq!(result, "hello world foo bar");
        assert!(matches!(result, Cow::Owned(_)));
    }

    #[test]
    fn test_query_string_is_sorted_and_encoded() {
        let mut query = Multimap::new();
        query.add("prefix", "logs/");
        query.add("max-keys", "50");
        query.add("delimiter", "/");
        assert_eq!(
            query.to_query_string(),
            "delimiter=%2F&max-keys=50&prefix=logs%2F"
        );
    }

    #[test]
    fn test_add_params_and_multimap() {
        let mut params = BTreeMap::new();
        params.insert("marker".to_string(), "a.txt".to_string());
        let mut query = Multimap::new();
        query.add_params(params);

        let mut extra = Multimap::new();
        extra.add("marker", "b.txt");
        query.add_multimap(extra);

        assert_eq!(query.get_vec("marker").unwrap().len(), 2);
        assert_eq!(query.to_query_string(), "marker=a.txt&marker=b.txt");
    }

    #[test]
    fn test_canonical_headers_skip_authorization() {
        let mut headers = Multimap::new();
        headers.add("Host", "play.min.io");
        headers.add("X-Amz-Date", "20130524T000000Z");
        headers.add("Authorization", "secret");
        let (signed, canonical) = headers.get_canonical_headers();
        assert_eq!(signed, "host;x-amz-date");
        assert_eq!(canonical, "host:play.min.io\nx-amz-date:20130524T000000Z");
    }
}
