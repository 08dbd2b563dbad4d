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

//! HTTP transport abstraction and the bundled `reqwest` implementation

use crate::s3::error::{Error, NetworkError};
use crate::s3::signer::PreparedRequest;
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use std::fmt;
use xmltree::Element;

/// What came back from the service for one request.
#[derive(Clone, Debug)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
    /// The body parsed as XML; `None` when the body is empty or not an XML document.
    pub xml: Option<Element>,
}

impl TransportResponse {
    /// Creates a response, parsing `body` as XML when it is non-empty.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        let xml = if body.iter().all(u8::is_ascii_whitespace) {
            None
        } else {
            match Element::parse(body.as_ref()) {
                Ok(root) => Some(root),
                Err(e) => {
                    log::trace!("response body is not XML: {e}");
                    None
                }
            }
        };
        Self {
            status,
            headers,
            body,
            xml,
        }
    }
}

/// Sends a signed request and returns the raw response.
///
/// Implementations must not retry or reinterpret error statuses; any status is a successful
/// round trip at this level.
#[async_trait]
pub trait Transport: fmt::Debug + Send + Sync {
    async fn send(&self, request: PreparedRequest) -> Result<TransportResponse, Error>;
}

/// [`Transport`] backed by a pooled [`reqwest::Client`].
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(ignore_cert_check: Option<bool>) -> Result<Self, Error> {
        let user_agent = String::from("objstore (")
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ") objstore-rs/"
            + env!("CARGO_PKG_VERSION");

        #[allow(unused_mut)]
        let mut builder = reqwest::Client::builder()
            .no_gzip()
            .user_agent(user_agent);

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = ignore_cert_check {
            builder = builder.danger_accept_invalid_certs(v);
        }
        #[cfg(not(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        )))]
        let _ = ignore_cert_check;

        Ok(Self {
            http_client: builder.build().map_err(NetworkError::from)?,
        })
    }

    pub fn from_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: PreparedRequest) -> Result<TransportResponse, Error> {
        let mut req = self
            .http_client
            .request(request.method.clone(), request.url.to_string());

        for (key, values) in request.headers.iter_all() {
            for value in values {
                req = req.header(key, value);
            }
        }

        if let Some(body) = request.body {
            req = req.body(body);
        }

        let mut resp = req.send().await.map_err(NetworkError::from)?;
        let status = resp.status();
        let headers = std::mem::take(resp.headers_mut());
        let body = resp.bytes().await.map_err(NetworkError::from)?;

        Ok(TransportResponse::new(status, headers, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_parses_xml_body() {
        let resp = TransportResponse::new(
            StatusCode::OK,
            HeaderMap::new(),
            Bytes::from_static(b"<ListAllMyBucketsResult><Owner/></ListAllMyBucketsResult>"),
        );
        assert_eq!(resp.xml.unwrap().name, "ListAllMyBucketsResult");
    }

    #[test]
    fn test_response_without_xml() {
        let empty = TransportResponse::new(StatusCode::NO_CONTENT, HeaderMap::new(), Bytes::new());
        assert!(empty.xml.is_none());

        let text = TransportResponse::new(
            StatusCode::FORBIDDEN,
            HeaderMap::new(),
            Bytes::from_static(b"access denied"),
        );
        assert!(text.xml.is_none());
        assert_eq!(text.body, Bytes::from_static(b"access denied"));
    }
}
