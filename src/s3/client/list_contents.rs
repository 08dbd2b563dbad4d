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
use crate::s3::builders::{ListContents, ListContentsBldr};
use crate::s3::types::BucketName;

impl Client {
    /// Creates a [`ListContents`] request builder for one page of the objects in `bucket`.
    ///
    /// To execute the request, call [`ListContents::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`ListContentsResponse`](crate::s3::response::ListContentsResponse).
    /// Every listed [`Content`](crate::s3::types::Content) carries the handle of `bucket`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use objstore::s3::Client;
    /// use objstore::s3::creds::StaticProvider;
    /// use objstore::s3::http::BaseUrl;
    /// use objstore::s3::response::ListContentsResponse;
    /// use objstore::s3::types::{BucketName, ListContentsRequest, S3Api};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url: BaseUrl = "http://localhost:9000".parse().unwrap();
    ///     let provider = StaticProvider::new("minioadmin", "minioadmin", None);
    ///     let client = Client::new(base_url, Some(provider)).unwrap();
    ///     let bucket = BucketName::new("bucket-name").unwrap();
    ///     let resp: ListContentsResponse = client
    ///         .list_contents(bucket)
    ///         .request(ListContentsRequest::builder().prefix("logs/").max_keys(50).build())
    ///         .build().send().await.unwrap();
    ///     for content in resp.contents() {
    ///         println!("{} ({} bytes)", content.key, content.size);
    ///     }
    /// }
    /// ```
    pub fn list_contents<B: Into<BucketName>>(&self, bucket: B) -> ListContentsBldr {
        ListContents::builder().client(self.clone()).bucket(bucket)
    }
}
