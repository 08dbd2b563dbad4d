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

//! Static credentials for the bundled [`SigV4Signer`](crate::s3::signer::SigV4Signer)
//!
//! The signer asks its [`Provider`] for [`Credentials`] once per signed request, so a provider may
//! hand out rotated keys between calls.

use std::fmt;

/// Access key pair plus the session token of temporary (STS) credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
    /// Sent as `x-amz-security-token`, or `X-Amz-Security-Token` in presigned URLs.
    pub session_token: Option<String>,
}

impl Credentials {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            session_token: None,
        }
    }

    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }
}

// secrets never end up in logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("session_token", &self.session_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Source of the credentials a signer signs with.
pub trait Provider: fmt::Debug {
    fn fetch(&self) -> Credentials;
}

impl Provider for Credentials {
    fn fetch(&self) -> Credentials {
        self.clone()
    }
}

/// Provider that always returns the same credentials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticProvider(Credentials);

impl StaticProvider {
    /// Returns a static provider with given access key, secret key and optional session token
    ///
    /// # Examples
    ///
    /// ```
    /// use objstore::s3::creds::{Provider, StaticProvider};
    ///
    /// let provider = StaticProvider::new("minioadmin", "minio123", Some("token"));
    /// assert_eq!(provider.fetch().session_token.as_deref(), Some("token"));
    /// ```
    pub fn new(access_key: &str, secret_key: &str, session_token: Option<&str>) -> Self {
        let creds = Credentials::new(access_key, secret_key);
        Self(match session_token {
            Some(token) => creds.with_session_token(token),
            None => creds,
        })
    }
}

impl From<Credentials> for StaticProvider {
    fn from(creds: Credentials) -> Self {
        Self(creds)
    }
}

impl Provider for StaticProvider {
    fn fetch(&self) -> Credentials {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secrets() {
        let creds = Credentials::new("AKIDEXAMPLE", "wJalrXUtnFEMI").with_session_token("FwoGZX");
        let printed = format!("{:?}", StaticProvider::from(creds));
        assert!(printed.contains("AKIDEXAMPLE"), "{printed}");
        assert!(!printed.contains("wJalrXUtnFEMI"), "{printed}");
        assert!(!printed.contains("FwoGZX"), "{printed}");
    }

    #[test]
    fn test_static_provider_fetch() {
        let provider = StaticProvider::new("minioadmin", "minioadmin", None);
        assert_eq!(provider.fetch(), Credentials::new("minioadmin", "minioadmin"));
        assert_eq!(provider.fetch().session_token, None);

        let creds = Credentials::new("a", "b").with_session_token("t");
        assert_eq!(creds.fetch(), creds);
    }
}
