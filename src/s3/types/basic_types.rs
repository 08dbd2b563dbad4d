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

//! Records exchanged with the service

use crate::s3::types::BucketName;
use crate::s3::utils::UtcTime;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Owner of a bucket or an object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Owner {
    #[serde(rename = "ID")]
    pub id: String,
    pub display_name: String,
}

/// Bucket information as returned by `ListBuckets`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Bucket {
    pub name: String,
    #[serde(default)]
    pub creation_date: Option<UtcTime>,
}

impl Bucket {
    /// Handle identifying this bucket in follow-on requests.
    pub fn handle(&self) -> BucketName {
        BucketName::from_service(&self.name)
    }
}

/// Object metadata as returned by `ListObjects`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Content {
    /// Bucket the object was listed from.
    #[serde(skip)]
    pub(crate) bucket: BucketName,

    pub key: String,
    pub last_modified: UtcTime,
    #[serde(rename = "ETag", default)]
    pub e_tag: String,
    /// Object size exactly as the service printed it.
    #[serde(default)]
    pub size: String,
    /// Storage class, kept verbatim so unknown classes pass through.
    #[serde(default)]
    pub storage_class: String,
    #[serde(default)]
    pub owner: Option<Owner>,
}

impl Content {
    pub fn bucket(&self) -> &BucketName {
        &self.bucket
    }

    pub(crate) fn with_bucket(mut self, bucket: BucketName) -> Self {
        self.bucket = bucket;
        self
    }
}

/// Filters of a `ListObjects` request. Unset fields are left out of the query string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ListContentsRequest {
    #[builder(default, setter(into, strip_option))]
    pub delimiter: Option<String>,
    #[builder(default, setter(into, strip_option))]
    pub encoding_type: Option<String>,
    #[builder(default, setter(into, strip_option))]
    pub marker: Option<String>,
    #[builder(default, setter(strip_option))]
    pub max_keys: Option<u32>,
    #[builder(default, setter(into, strip_option))]
    pub prefix: Option<String>,
}

/// Root of a `ListObjects` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListBucketResult {
    /// Empty when the service omits `<Name>`.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub marker: String,
    #[serde(default)]
    pub next_marker: Option<String>,
    #[serde(default)]
    pub delimiter: Option<String>,
    #[serde(default)]
    pub encoding_type: Option<String>,
    #[serde(default)]
    pub max_keys: u32,
    #[serde(default)]
    pub is_truncated: bool,
    /// Listed objects in document order.
    #[serde(skip)]
    pub contents: Vec<Content>,
}

/// Root of a `ListBuckets` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListAllMyBucketsResult {
    pub owner: Owner,
    pub buckets: Vec<Bucket>,
}
