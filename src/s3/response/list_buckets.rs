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
use crate::s3::transport::TransportResponse;
use crate::s3::types::{Bucket, FromS3Response, ListAllMyBucketsResult, Owner, S3Request};
use crate::s3::xml::bind;
use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;

/// Response of [list_buckets()](crate::s3::client::Client::list_buckets) API
#[derive(Clone, Debug)]
pub struct ListBucketsResponse {
    request: S3Request,
    headers: HeaderMap,
    body: Bytes,
    result: ListAllMyBucketsResult,
}

impl_has_s3fields!(ListBucketsResponse);

impl ListBucketsResponse {
    /// Buckets in the order the service listed them.
    pub fn buckets(&self) -> &[Bucket] {
        &self.result.buckets
    }

    pub fn owner(&self) -> &Owner {
        &self.result.owner
    }

    pub fn into_buckets(self) -> Vec<Bucket> {
        self.result.buckets
    }
}

#[async_trait]
impl FromS3Response for ListBucketsResponse {
    async fn from_s3response(
        request: S3Request,
        response: Result<TransportResponse, Error>,
    ) -> Result<Self, Error> {
        let resp = response?;
        let root = resp.xml.as_ref().ok_or(ValidationErr::MissingXmlBody)?;
        let value = request.client.normalizer().normalize(root)?;
        let result: ListAllMyBucketsResult = bind(&value)?;
        log::debug!("listed {} buckets", result.buckets.len());

        Ok(Self {
            request,
            headers: resp.headers,
            body: resp.body,
            result,
        })
    }
}
