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

//! Response types for [`Client`](crate::s3::client::Client) APIs

pub mod a_response_traits;

mod create_bucket;
mod create_content;
mod delete_bucket;
mod delete_content;
mod list_buckets;
mod list_contents;
mod presign_content;

pub use create_bucket::CreateBucketResponse;
pub use create_content::CreateContentResponse;
pub use delete_bucket::DeleteBucketResponse;
pub use delete_content::DeleteContentResponse;
pub use list_buckets::ListBucketsResponse;
pub use list_contents::ListContentsResponse;
pub use presign_content::PresignContentResponse;
