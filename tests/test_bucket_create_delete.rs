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

mod common;

use common::{MockTransport, create_client};
use http::{Method, StatusCode};
use objstore::s3::error::{ClientErr, Error};
use objstore::s3::response::a_response_traits::HasBucket;
use objstore::s3::response::{CreateBucketResponse, DeleteBucketResponse};
use objstore::s3::types::S3Api;

#[tokio::test]
async fn create_bucket() {
    let transport = MockTransport::new().reply(StatusCode::OK, "");
    let client = create_client(&transport);

    let resp: CreateBucketResponse = client.create_bucket("photos").build().send().await.unwrap();
    assert_eq!(resp.bucket(), "photos");

    let req = transport.last_request();
    assert_eq!(req.method, Method::PUT);
    assert_eq!(req.url.to_string(), "http://localhost:9000/photos");
}

#[tokio::test]
async fn delete_bucket() {
    let transport = MockTransport::new().reply(StatusCode::NO_CONTENT, "");
    let client = create_client(&transport);

    let resp: DeleteBucketResponse = client.delete_bucket("photos").build().send().await.unwrap();
    assert_eq!(resp.bucket(), "photos");
    assert_eq!(transport.last_request().method, Method::DELETE);
}

#[tokio::test]
async fn delete_bucket_requires_no_content() {
    // a plain 200 is not the expected answer to a bucket delete
    let transport = MockTransport::new().reply(StatusCode::OK, "");
    let client = create_client(&transport);

    let err = client.delete_bucket("photos").build().send().await.unwrap_err();
    match err {
        Error::Client(ClientErr::UnexpectedStatus {
            expected, status, ..
        }) => {
            assert_eq!(expected, StatusCode::NO_CONTENT);
            assert_eq!(status, StatusCode::OK);
        }
        e => panic!("expected a client error, got {e:?}"),
    }
}

#[tokio::test]
async fn create_bucket_requires_ok() {
    let transport = MockTransport::new().reply(StatusCode::NO_CONTENT, "");
    let client = create_client(&transport);

    let err = client.create_bucket("photos").build().send().await.unwrap_err();
    assert!(matches!(err, Error::Client(_)), "{err:?}");
}

#[tokio::test]
async fn invalid_bucket_name_is_not_sent() {
    let transport = MockTransport::new();
    let client = create_client(&transport);

    let err = client.create_bucket("").build().send().await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)), "{err:?}");
    assert!(transport.requests().is_empty());
}
