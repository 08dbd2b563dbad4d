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
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::params::encode_params;
use crate::s3::response::ListContentsResponse;
use crate::s3::types::{BucketName, ListContentsRequest, S3Api, S3Request, ToS3Request};
use http::{Method, StatusCode};
use typed_builder::TypedBuilder;

/// Argument builder for the `ListObjects` S3 API operation (`GET /{bucket}`), one page only.
///
/// The optional [`ListContentsRequest`] is encoded into the query string; its unset fields are
/// left out.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListContents {
    #[builder(!default)] // force required
    client: Client,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required
    bucket: BucketName,
    #[builder(default, setter(strip_option))]
    request: Option<ListContentsRequest>,
}

/// Builder type for [`ListContents`] that is returned by [`Client::list_contents`](crate::s3::client::Client::list_contents).
pub type ListContentsBldr = ListContentsBuilder<((Client,), (), (), (BucketName,), ())>;

impl S3Api for ListContents {
    type S3Response = ListContentsResponse;
}

impl ToS3Request for ListContents {
    fn to_s3request(self) -> Result<S3Request, Error> {
        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        query_params.add_params(encode_params(self.request.as_ref())?);

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::GET)
            .expected_status(StatusCode::OK)
            .bucket(self.bucket)
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
