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

use super::Client;
use crate::s3::builders::{DeleteBucket, DeleteBucketBldr};

impl Client {
    /// Creates a [`DeleteBucket`] request builder.
    ///
    /// To execute the request, call [`DeleteBucket::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`DeleteBucketResponse`](crate::s3::response::DeleteBucketResponse).
    /// Succeeds only when the service answers `204 No Content`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use objstore::s3::Client;
    /// use objstore::s3::creds::StaticProvider;
    /// use objstore::s3::http::BaseUrl;
    /// use objstore::s3::response::DeleteBucketResponse;
    /// use objstore::s3::response::a_response_traits::HasBucket;
    /// use objstore::s3::types::S3Api;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url: BaseUrl = "http://localhost:9000".parse().unwrap();
    ///     let provider = StaticProvider::new("minioadmin", "minioadmin", None);
    ///     let client = Client::new(base_url, Some(provider)).unwrap();
    ///     let resp: DeleteBucketResponse =
    ///         client.delete_bucket("bucket-name").build().send().await.unwrap();
    ///     println!("bucket '{}' is removed", resp.bucket());
    /// }
    /// ```
    pub fn delete_bucket<S: Into<String>>(&self, bucket: S) -> DeleteBucketBldr {
        DeleteBucket::builder().client(self.clone()).bucket(bucket)
    }
}
