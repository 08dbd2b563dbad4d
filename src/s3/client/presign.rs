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
use crate::s3::builders::{PresignContent, PresignContentBldr};
use crate::s3::types::Content;

impl Client {
    /// Creates a [`PresignContent`] request builder for a time-limited download URL of `content`.
    ///
    /// Calling [`PresignContent::send()`] signs locally and returns a
    /// [`PresignContentResponse`](crate::s3::response::PresignContentResponse); nothing is sent
    /// to the service.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use objstore::s3::Client;
    /// use objstore::s3::creds::StaticProvider;
    /// use objstore::s3::http::BaseUrl;
    /// use objstore::s3::types::{BucketName, S3Api};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url: BaseUrl = "http://localhost:9000".parse().unwrap();
    ///     let provider = StaticProvider::new("minioadmin", "minioadmin", None);
    ///     let client = Client::new(base_url, Some(provider)).unwrap();
    ///     let listing = client
    ///         .list_contents(BucketName::new("bucket-name").unwrap())
    ///         .build().send().await.unwrap();
    ///     for content in listing.contents() {
    ///         let resp = client.presign(content).expiry_seconds(3600).build().send().await.unwrap();
    ///         println!("{}: {}", content.key, resp.url());
    ///     }
    /// }
    /// ```
    pub fn presign(&self, content: &Content) -> PresignContentBldr {
        PresignContent::builder()
            .client(self.clone())
            .bucket(content.bucket())
            .key(content.key.clone())
    }
}
