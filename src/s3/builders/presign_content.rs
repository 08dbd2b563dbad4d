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

use crate::s3::client::Client;
use crate::s3::error::Error;
use crate::s3::header_constants::X_AMZ_EXPIRES;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::response::PresignContentResponse;
use crate::s3::types::BucketName;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for a presigned `GetObject` URL.
///
/// Nothing is sent: the signer embeds time-limited credentials in the URL query string and the
/// resulting request is handed back to the caller.
#[derive(Clone, Debug, TypedBuilder)]
pub struct PresignContent {
    #[builder(!default)] // force required
    client: Client,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required
    bucket: BucketName,
    #[builder(setter(into))] // force required + accept Into<String>
    key: String,
    /// Validity of the URL; the signer's default (7 days) when unset.
    #[builder(default, setter(strip_option))]
    expiry_seconds: Option<u32>,
}

/// Builder type for [`PresignContent`] that is returned by [`Client::presign`](crate::s3::client::Client::presign).
pub type PresignContentBldr =
    PresignContentBuilder<((Client,), (), (BucketName,), (String,), ())>;

impl PresignContent {
    /// Signs the URL locally; the transport is never called.
    pub async fn send(self) -> Result<PresignContentResponse, Error> {
        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        if let Some(expiry) = self.expiry_seconds {
            query_params.add(X_AMZ_EXPIRES, expiry.to_string());
        }

        let request = self.client.presign_request(
            &Method::GET,
            &query_params,
            Some(self.bucket.as_str()),
            Some(&self.key),
        )?;

        Ok(PresignContentResponse {
            bucket: self.bucket,
            object: self.key,
            request,
        })
    }
}
