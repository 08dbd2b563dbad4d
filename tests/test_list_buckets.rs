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
use objstore::s3::response::ListBucketsResponse;
use objstore::s3::types::{BucketName, S3Api};

#[tokio::test]
async fn list_buckets() {
    let transport = MockTransport::new().reply(
        StatusCode::OK,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <ListAllMyBucketsResult xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">\
         <Owner><ID>02d6176db174dc93cb1b899f7c6078f08654445fe8cf1b6ce98d8855f66bdbf4</ID>\
         <DisplayName>minio</DisplayName></Owner>\
         <Buckets>\
         <Bucket><Name>logs</Name><CreationDate>2024-01-01T00:00:00.000Z</CreationDate></Bucket>\
         <Bucket><Name>photos</Name><CreationDate>2024-02-01T00:00:00.000Z</CreationDate></Bucket>\
         </Buckets></ListAllMyBucketsResult>",
    );
    let client = create_client(&transport);

    let resp: ListBucketsResponse = client.list_buckets().build().send().await.unwrap();

    let names: Vec<&str> = resp.buckets().iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["logs", "photos"]);
    assert!(resp.buckets().iter().all(|b| b.creation_date.is_some()));
    assert_eq!(resp.owner().display_name, "minio");

    let handle: BucketName = (&resp.buckets()[1]).into();
    assert_eq!(handle.as_str(), "photos");

    let req = transport.last_request();
    assert_eq!(req.method, Method::GET);
    assert_eq!(req.url.to_string(), "http://localhost:9000/");
}

#[tokio::test]
async fn list_buckets_none_owned() {
    let transport = MockTransport::new().reply(
        StatusCode::OK,
        "<ListAllMyBucketsResult><Owner><ID>o</ID></Owner><Buckets></Buckets></ListAllMyBucketsResult>",
    );
    let client = create_client(&transport);

    let resp: ListBucketsResponse = client.list_buckets().build().send().await.unwrap();
    assert!(resp.buckets().is_empty());
    assert!(resp.into_buckets().is_empty());
}

#[tokio::test]
async fn list_buckets_single_bucket() {
    let transport = MockTransport::new().reply(
        StatusCode::OK,
        "<ListAllMyBucketsResult><Buckets><Bucket><Name>only</Name></Bucket></Buckets>\
         </ListAllMyBucketsResult>",
    );
    let client = create_client(&transport);

    let resp: ListBucketsResponse = client.list_buckets().build().send().await.unwrap();
    assert_eq!(resp.buckets().len(), 1);
    assert_eq!(resp.buckets()[0].name, "only");
    assert_eq!(resp.buckets()[0].creation_date, None);
}

#[tokio::test]
async fn list_buckets_names_spelled_as_booleans() {
    let transport = MockTransport::new().reply(
        StatusCode::OK,
        "<ListAllMyBucketsResult><Owner><DisplayName>true</DisplayName></Owner>\
         <Buckets><Bucket><Name>false</Name></Bucket><Bucket><Name>true</Name></Bucket>\
         </Buckets></ListAllMyBucketsResult>",
    );
    let client = create_client(&transport);

    let resp: ListBucketsResponse = client.list_buckets().build().send().await.unwrap();
    let names: Vec<&str> = resp.buckets().iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["false", "true"]);
    assert_eq!(resp.owner().display_name, "true");
}
