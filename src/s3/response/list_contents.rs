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

use crate::impl_has_s3fields;
use crate::s3::error::{Error, ValidationErr};
use crate::s3::response::a_response_traits::HasBucket;
use crate::s3::transport::TransportResponse;
use crate::s3::types::{BucketName, Content, FromS3Response, ListBucketResult, S3Request};
use crate::s3::xml::{ObjectMap, Value, XmlNormalizer, bind};
use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;
use xmltree::{Element, XMLNode};

const CONTENTS: &str = "Contents";

/// Response of [list_contents()](crate::s3::client::Client::list_contents) API
#[derive(Clone, Debug)]
pub struct ListContentsResponse {
    request: S3Request,
    headers: HeaderMap,
    body: Bytes,
    result: ListBucketResult,
}

impl_has_s3fields!(ListContentsResponse);

impl HasBucket for ListContentsResponse {}

impl ListContentsResponse {
    /// Listed objects in document order, each carrying the handle of the listed bucket.
    pub fn contents(&self) -> &[Content] {
        &self.result.contents
    }

    /// The listing page summary (name, prefix, truncation, markers).
    pub fn result(&self) -> &ListBucketResult {
        &self.result
    }

    pub fn into_contents(self) -> Vec<Content> {
        self.result.contents
    }
}

fn is_contents(node: &XMLNode) -> bool {
    matches!(node, XMLNode::Element(e) if e.name == CONTENTS)
}

/// Normalizes and binds every `<Contents>` child of the listing, in document order.
fn parse_contents(
    normalizer: &XmlNormalizer,
    root: &Element,
    bucket: &BucketName,
) -> Result<Vec<Content>, Error> {
    let mut values: Vec<Value> = Vec::new();
    for element in root.children.iter().filter_map(XMLNode::as_element) {
        if element.name != CONTENTS {
            continue;
        }
        match normalizer.normalize(element) {
            Ok(v) => values.push(v),
            Err(e) => {
                values.push(e.partial.clone());
                let mut partial = ObjectMap::new();
                partial.insert(CONTENTS, Value::Array(values));
                return Err(e.within(&root.name, Value::Object(partial)).into());
            }
        }
    }

    let mut contents = Vec::with_capacity(values.len());
    for value in &values {
        let content: Content = bind(value)?;
        contents.push(content.with_bucket(bucket.clone()));
    }
    Ok(contents)
}

fn parse_summary(normalizer: &XmlNormalizer, root: &Element) -> Result<ListBucketResult, Error> {
    let mut summary = root.clone();
    summary.children.retain(|node| !is_contents(node));
    let value = normalizer.normalize(&summary)?;
    Ok(bind(&value)?)
}

#[async_trait]
impl FromS3Response for ListContentsResponse {
    async fn from_s3response(
        request: S3Request,
        response: Result<TransportResponse, Error>,
    ) -> Result<Self, Error> {
        let resp = response?;
        let root = resp.xml.as_ref().ok_or(ValidationErr::MissingXmlBody)?;
        let normalizer = request.client.normalizer();
        let bucket = request.bucket.clone().unwrap_or_default();

        let contents = parse_contents(normalizer, root, &bucket)?;
        let mut result = parse_summary(normalizer, root)?;
        log::debug!(
            "listed {} objects in bucket {bucket} (truncated: {})",
            contents.len(),
            result.is_truncated
        );
        result.contents = contents;

        Ok(Self {
            request,
            headers: resp.headers,
            body: resp.body,
            result,
        })
    }
}
