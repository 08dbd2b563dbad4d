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

use super::s3_request::S3Request;
use crate::s3::error::Error;
use crate::s3::transport::TransportResponse;
use async_trait::async_trait;

pub trait ToS3Request: Sized {
    /// Consumes this request builder and returns a [`S3Request`].
    ///
    /// Local validation (bucket names, object keys, query parameter encoding) happens here, so a
    /// request that fails it never reaches the signer or the transport.
    fn to_s3request(self) -> Result<S3Request, Error>;
}

#[async_trait]
pub trait FromS3Response: Sized {
    /// Converts the transport response of an executed request into a typed response.
    ///
    /// `response` has already been checked against the expected status of the request.
    async fn from_s3response(
        s3req: S3Request,
        response: Result<TransportResponse, Error>,
    ) -> Result<Self, Error>;
}

#[async_trait]
pub trait S3Api: ToS3Request {
    /// The response type associated with this request builder.
    type S3Response: FromS3Response;

    /// Builds, signs and sends the request, then converts the response.
    ///
    /// Exactly one round trip is made; nothing is retried.
    async fn send(self) -> Result<Self::S3Response, Error> {
        let mut req: S3Request = self.to_s3request()?;
        let resp: Result<TransportResponse, Error> = req.execute().await;
        Self::S3Response::from_s3response(req, resp).await
    }
}
