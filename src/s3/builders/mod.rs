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

//! Argument builders for [`Client`](crate::s3::client::Client) APIs

mod create_bucket;
mod create_content;
mod delete_bucket;
mod delete_content;
mod list_buckets;
mod list_contents;
mod presign_content;

pub use create_bucket::*;
pub use create_content::*;
pub use delete_bucket::*;
pub use delete_content::*;
pub use list_buckets::*;
pub use list_contents::*;
pub use presign_content::*;
