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
use crate::s3::error::{Error, ValidationErr};
use crate::s3::multimap_ext::Multimap;
use crate::s3::response::CreateContentResponse;
use crate::s3::types::{BucketName, S3Api, S3Request, ToS3Request};
use crate::s3::utils::check_object_key;
use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http::{Method, StatusCode};
use typed_builder::TypedBuilder;

/// Argument builder for the `PutObject` S3 API operation (`PUT /{bucket}/{key}`).
///
/// The payload is sent in a single request body.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateContent {
    #[builder(!default)] // force required
    client: Client,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    /// Request headers such as `Content-Type` or `x-amz-meta-*`.
    #[builder(default, setter(into))]
    headers: Option<Multimap>,
    #[builder(setter(into))] // force required
    bucket: BucketName,
    #[builder(setter(into))] // force required + accept Into<String>
    key: String,
    #[builder(default, setter(into, strip_option))]
    payload: Option<Bytes>,
}

/// Builder type for [`CreateContent`] that is returned by [`Client::create_content`](crate::s3::client::Client::create_content).
pub type CreateContentBldr =
    CreateContentBuilder<((Client,), (), (), (BucketName,), (String,), ())>;

impl S3Api for CreateContent {
    type S3Response = CreateContentResponse;
}

/// Rejects headers the HTTP layer would not be able to send.
pub(crate) fn check_headers(headers: &Multimap) -> Result<(), ValidationErr> {
    for (name, values) in headers.iter_all() {
        HeaderName::from_bytes(name.as_bytes()).map_err(|e| ValidationErr::InvalidHeader {
            name: name.clone(),
            reason: e.to_string(),
        })?;
        for value in values {
            HeaderValue::from_str(value).map_err(|e| ValidationErr::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;
        }
    }
    Ok(())
}

impl ToS3Request for CreateContent {
    fn to_s3request(self) -> Result<S3Request, Error> {
        check_object_key(&self.key)?;
        let headers = self.headers.unwrap_or_default();
        check_headers(&headers)?;

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::PUT)
            .expected_status(StatusCode::OK)
            .bucket(self.bucket)
            .object(self.key)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers)
            .body(self.payload)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::multimap_ext::MultimapExt;

    #[test]
    fn test_check_headers() {
        let mut headers = Multimap::new();
        headers.add("Content-Type", "text/plain");
        headers.add("x-amz-meta-owner", "me");
        assert!(check_headers(&headers).is_ok());

        headers.add("bad header", "x");
        assert!(matches!(
            check_headers(&headers),
            Err(ValidationErr::InvalidHeader { name, .. }) if name == "bad header"
        ));

        let mut headers = Multimap::new();
        headers.add("x-amz-meta-note", "line\nbreak");
        assert!(check_headers(&headers).is_err());
    }
}
