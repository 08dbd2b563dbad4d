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

//! # objstore
//!
//! Client-side bucket and object operations against an S3 compatible REST API.
//!
//! The interesting part of this crate is the marshalling layer:
//!
//! - [`s3::params`] turns typed request objects into kebab-case query parameters.
//! - [`s3::xml`] normalizes the service's XML responses into a typed value tree
//!   ([`s3::xml::Value`]) and binds that tree to records such as [`s3::types::Content`].
//!
//! Request signing and the HTTP transport sit behind the [`s3::signer::Signer`] and
//! [`s3::transport::Transport`] traits. A SigV4 signer and a `reqwest` transport are bundled.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use objstore::s3::ClientBuilder;
//! use objstore::s3::creds::StaticProvider;
//! use objstore::s3::http::BaseUrl;
//! use objstore::s3::types::{ListContentsRequest, S3Api};
//!
//! #[tokio::main]
//! async fn main() {
//!     let base_url: BaseUrl = "https://play.min.io".parse().unwrap();
//!     let client = ClientBuilder::new(base_url)
//!         .provider(Some(StaticProvider::new("minioadmin", "minioadmin", None)))
//!         .build()
//!         .unwrap();
//!
//!     let buckets = client.list_buckets().build().send().await.unwrap();
//!     for bucket in buckets.buckets() {
//!         let listing = client
//!             .list_contents(bucket)
//!             .request(ListContentsRequest::builder().prefix("logs/").build())
//!             .build()
//!             .send()
//!             .await
//!             .unwrap();
//!         for content in listing.contents() {
//!             println!("{}/{} ({} bytes)", bucket.name, content.key, content.size);
//!         }
//!     }
//! }
//! ```
//!
//! ## Design
//! - Each API method on [`s3::Client`] returns a builder
//! - Builders implement [`s3::types::ToS3Request`] and [`s3::types::S3Api`]
//! - Responses implement [`s3::types::FromS3Response`]

#![allow(clippy::result_large_err)]
pub mod s3;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
