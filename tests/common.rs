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

#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, HeaderValue, StatusCode};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use objstore::s3::client::{Client, ClientBuilder};
use objstore::s3::creds::StaticProvider;
use objstore::s3::error::{Error, NetworkError};
use objstore::s3::http::BaseUrl;
use objstore::s3::signer::PreparedRequest;
use objstore::s3::transport::{Transport, TransportResponse};

pub const ETAG: &str = "\"9b2cf535f27731c974343645a3985328\"";

pub const ACCESS_DENIED: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
<Error><Code>AccessDenied</Code><Message>Access Denied.</Message>\
<Resource>/photos</Resource><RequestId>17C4C2A3F1C5B3A1</RequestId></Error>";

#[derive(Debug, Default)]
struct State {
    requests: Vec<PreparedRequest>,
    responses: VecDeque<TransportResponse>,
}

/// In-memory transport that records every request and answers with canned responses in order.
#[derive(Clone, Debug, Default)]
pub struct MockTransport {
    state: Arc<Mutex<State>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response for the next request.
    pub fn reply(self, status: StatusCode, body: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(http::header::ETAG, HeaderValue::from_static(ETAG));
        let response =
            TransportResponse::new(status, headers, Bytes::copy_from_slice(body.as_bytes()));
        self.state.lock().unwrap().responses.push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<PreparedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> PreparedRequest {
        self.requests().pop().expect("no request was sent")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: PreparedRequest) -> Result<TransportResponse, Error> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request);
        state
            .responses
            .pop_front()
            .ok_or_else(|| NetworkError::Transport("no canned response left".into()).into())
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Client signing with static test credentials and sending through `transport`.
pub fn create_client(transport: &MockTransport) -> Client {
    init_logger();
    let base_url: BaseUrl = "http://localhost:9000".parse().unwrap();
    ClientBuilder::new(base_url)
        .provider(Some(StaticProvider::new("minioadmin", "minioadmin", None)))
        .transport(transport.clone())
        .build()
        .unwrap()
}
