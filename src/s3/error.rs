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

//! Error types surfaced by every operation of this crate.
//!
//! Nothing in this layer retries or recovers: each error is returned to the caller unmodified,
//! carrying either the raw wire body ([`ClientErr`]) or the partial parse state
//! ([`NormalizationErr`]).

use crate::s3::error_response::ErrorResponse;
use crate::s3::xml::Value;
use http::StatusCode;
use std::fmt;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures reported by the service or caught before contacting it.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ClientErr {
    #[error(
        "unexpected response status {status}; expected {expected}{}; body: {body}",
        .response.as_ref().map(|r| format!(" ({}: {})", r.code, r.message)).unwrap_or_default()
    )]
    UnexpectedStatus {
        expected: StatusCode,
        status: StatusCode,
        /// Raw response body, lossily decoded as UTF-8.
        body: String,
        /// The S3 `<Error>` document, when the body contains one.
        response: Option<ErrorResponse>,
    },

    #[error("object key '{0}' must not start with '/'")]
    InvalidObjectKey(String),
}

impl ClientErr {
    /// Raw response body of an unexpected status, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            ClientErr::UnexpectedStatus { body, .. } => Some(body),
            ClientErr::InvalidObjectKey(_) => None,
        }
    }

    /// HTTP status of an unexpected status, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientErr::UnexpectedStatus { status, .. } => Some(*status),
            ClientErr::InvalidObjectKey(_) => None,
        }
    }
}

/// The XML tree could not be walked to completion.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizationErr {
    /// Element names from the document root down to the failing element.
    pub path: Vec<String>,
    pub reason: String,
    /// Everything normalized before the failure, including partially built branches.
    pub partial: Value,
}

impl NormalizationErr {
    pub fn new(element: impl Into<String>, reason: impl Into<String>, partial: Value) -> Self {
        Self {
            path: vec![element.into()],
            reason: reason.into(),
            partial,
        }
    }

    /// Re-roots the error under a parent element whose value so far is `partial`.
    pub(crate) fn within(mut self, element: &str, partial: Value) -> Self {
        self.path.insert(0, element.to_string());
        self.partial = partial;
        self
    }
}

impl fmt::Display for NormalizationErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to normalize <{}>: {}; partial: {}",
            self.path.join("/"),
            self.reason,
            self.partial
        )
    }
}

impl std::error::Error for NormalizationErr {}

/// A normalized value does not fit the requested record shape.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("failed to bind {record}: {message}")]
pub struct BindingErr {
    /// Type name of the target record.
    pub record: String,
    pub message: String,
}

impl BindingErr {
    pub(crate) fn with_record(mut self, record: &str) -> Self {
        if self.record.is_empty() {
            self.record = record.to_string();
        }
        self
    }
}

impl serde::de::Error for BindingErr {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        BindingErr {
            record: String::new(),
            message: msg.to_string(),
        }
    }
}

/// Local input problems detected while building a request.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationErr {
    #[error("invalid bucket name: {0}")]
    InvalidBucketName(String),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("unsupported value for parameter '{name}': {reason}")]
    UnsupportedParameter { name: String, reason: String },

    #[error("invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("response body is not an XML document")]
    MissingXmlBody,

    #[error("failed to serialize request parameters: {0}")]
    Serialization(String),
}

/// Failures raised by the transport collaborator.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("transport error: {0}")]
    Transport(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("client error: {0}")]
    Client(#[from] ClientErr),

    #[error("normalization error: {0}")]
    Normalization(#[from] NormalizationErr),

    #[error("binding error: {0}")]
    Binding(#[from] BindingErr),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationErr),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(NetworkError::Http(err))
    }
}

impl From<serde_json::Error> for ValidationErr {
    fn from(err: serde_json::Error) -> Self {
        ValidationErr::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_status_display_includes_body_and_code() {
        let err = ClientErr::UnexpectedStatus {
            expected: StatusCode::OK,
            status: StatusCode::FORBIDDEN,
            body: "<Error><Code>AccessDenied</Code></Error>".to_string(),
            response: Some(ErrorResponse {
                code: "AccessDenied".to_string(),
                message: "Access Denied.".to_string(),
                ..Default::default()
            }),
        };
        let msg = err.to_string();
        assert!(msg.contains("403"));
        assert!(msg.contains("AccessDenied: Access Denied."));
        assert!(msg.contains("<Error>"));
        assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
    }

    #[test]
    fn test_normalization_err_within_prepends_path() {
        let err = NormalizationErr::new("LastModified", "bad timestamp", Value::Null)
            .within("Contents", Value::String("partial".into()));
        assert_eq!(err.path, vec!["Contents", "LastModified"]);
        assert_eq!(err.partial, Value::String("partial".into()));
        assert!(err.to_string().contains("Contents/LastModified"));
    }

    #[test]
    fn test_binding_err_keeps_first_record_name() {
        let err = <BindingErr as serde::de::Error>::custom("missing field `Key`")
            .with_record("Content")
            .with_record("Other");
        assert_eq!(err.record, "Content");
        assert_eq!(err.to_string(), "failed to bind Content: missing field `Key`");
    }
}
