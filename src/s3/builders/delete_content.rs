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
use crate::s3::multimap_ext::Multimap;
use crate::s3::response::DeleteContentResponse;
use crate::s3::types::{BucketName, S3Api, S3Request, ToS3Request};
use crate::s3::utils::check_object_key;
use http::{Method, StatusCode};
use typed_builder::TypedBuilder;

/// Argument builder for the `DeleteObject` S3 API operation (`DELETE /{bucket}/{key}`).
#[derive(Clone, Debug, TypedBuilder)]
pub struct DeleteContent {
    #[builder(!default)] // force required
    client: Client,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required
    bucket: BucketName,
    #[builder(setter(into))] // force required + accept Into<String>
    key: String,
}

/// Builder type for [`DeleteContent`] that is returned by [`Client::delete_content`](crate::s3::client::Client::delete_content).
pub type DeleteContentBldr = DeleteContentBuilder<((Client,), (), (), (BucketName,), (String,))>;

impl S3Api for DeleteContent {
    type S3Response = DeleteContentResponse;
}

impl ToS3Request for DeleteContent {
    fn to_s3request(self) -> Result<S3Request, Error> {
        check_object_key(&self.key)?;

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::DELETE)
            .expected_status(StatusCode::NO_CONTENT)
            .bucket(self.bucket)
            .object(self.key)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
