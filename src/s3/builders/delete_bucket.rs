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
use crate::s3::response::DeleteBucketResponse;
use crate::s3::types::{BucketName, S3Api, S3Request, ToS3Request};
use http::{Method, StatusCode};
use typed_builder::TypedBuilder;

/// Argument builder for the `DeleteBucket` S3 API operation (`DELETE /{bucket}`).
#[derive(Clone, Debug, TypedBuilder)]
pub struct DeleteBucket {
    #[builder(!default)] // force required
    client: Client,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
}

/// Builder type for [`DeleteBucket`] that is returned by [`Client::delete_bucket`](crate::s3::client::Client::delete_bucket).
pub type DeleteBucketBldr = DeleteBucketBuilder<((Client,), (), (), (String,))>;

impl S3Api for DeleteBucket {
    type S3Response = DeleteBucketResponse;
}

impl ToS3Request for DeleteBucket {
    fn to_s3request(self) -> Result<S3Request, Error> {
        let bucket = BucketName::new(self.bucket)?;

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::DELETE)
            .expected_status(StatusCode::NO_CONTENT)
            .bucket(bucket)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
