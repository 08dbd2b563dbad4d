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

use crate::s3::signer::PreparedRequest;
use crate::s3::types::BucketName;

/// Response of [presign()](crate::s3::client::Client::presign) API
#[derive(Clone, Debug)]
pub struct PresignContentResponse {
    /// Bucket holding the object.
    pub bucket: BucketName,

    /// Key identifying the object within the bucket.
    pub object: String,

    pub(crate) request: PreparedRequest,
}

impl PresignContentResponse {
    /// The signed request, ready to be sent by any HTTP client.
    pub fn request(&self) -> &PreparedRequest {
        &self.request
    }

    /// The presigned URL for the object.
    pub fn url(&self) -> String {
        self.request.url.to_string()
    }

    pub fn into_request(self) -> PreparedRequest {
        self.request
    }
}
