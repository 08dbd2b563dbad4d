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

//! Request signing.
//!
//! Operations never sign requests themselves; they hand method, URL, headers and payload to a
//! [`Signer`] and receive a [`PreparedRequest`] back. [`SigV4Signer`] implements AWS Signature
//! Version 4 for both the `Authorization` header and presigned URLs.

use crate::s3::client::DEFAULT_REGION;
use crate::s3::creds::Provider;
use crate::s3::error::Error;
use crate::s3::header_constants::*;
use crate::s3::http::Url;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::utils::{EMPTY_SHA256, UtcTime, sha256_hash, to_amz_date, to_signer_date, utc_now};
use bytes::Bytes;
use hmac::{Hmac, Mac};
use http::Method;
use sha2::Sha256;
use std::fmt;
use std::sync::Arc;

/// Default lifetime of a presigned URL: 7 days.
pub const DEFAULT_EXPIRY_SECONDS: u32 = 604_800;

/// A request ready to be handed to a [`Transport`](crate::s3::transport::Transport), or, in
/// presign mode, to a third party.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Multimap,
    pub body: Option<Bytes>,
}

/// Produces authenticated requests for the target service.
pub trait Signer: fmt::Debug + Send + Sync {
    /// Signs a request.
    ///
    /// With `presign` set, the credentials must be embedded in the URL query string rather than
    /// in headers; such requests are never sent by this crate. A pre-existing `X-Amz-Expires`
    /// query parameter selects the validity period of a presigned URL.
    fn sign(
        &self,
        method: &Method,
        url: Url,
        headers: Multimap,
        payload: Option<Bytes>,
        presign: bool,
    ) -> Result<PreparedRequest, Error>;
}

/// Returns HMAC hash for given key and data
pub fn hmac_hash(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut hasher =
        <Hmac<Sha256> as Mac>::new_from_slice(key).expect("HMAC can take key of any size");
    hasher.update(data);
    hasher.finalize().into_bytes().to_vec()
}

/// Returns hex encoded HMAC hash for given key and data
pub fn hmac_hash_hex(key: &[u8], data: &[u8]) -> String {
    hmac_hash(key, data)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// Returns scope value of given date, region and service name
pub fn get_scope(date: UtcTime, region: &str, service_name: &str) -> String {
    format!(
        "{}/{}/{}/aws4_request",
        to_signer_date(date),
        region,
        service_name
    )
}

/// Returns hex encoded SHA256 hash of canonical request
pub fn get_canonical_request_hash(
    method: &Method,
    uri: &str,
    query_string: &str,
    headers: &str,
    signed_headers: &str,
    content_sha256: &str,
) -> String {
    // CanonicalRequest =
    //   HTTPRequestMethod + '\n' +
    //   CanonicalURI + '\n' +
    //   CanonicalQueryString + '\n' +
    //   CanonicalHeaders + '\n\n' +
    //   SignedHeaders + '\n' +
    //   HexEncode(Hash(RequestPayload))
    let canonical_request = format!(
        "{method}\n{uri}\n{query_string}\n{headers}\n\n{signed_headers}\n{content_sha256}"
    );
    sha256_hash(canonical_request.as_bytes())
}

/// Returns string-to-sign value of given date, scope and canonical request hash
pub fn get_string_to_sign(date: UtcTime, scope: &str, canonical_request_hash: &str) -> String {
    format!(
        "AWS4-HMAC-SHA256\n{}\n{}\n{}",
        to_amz_date(date),
        scope,
        canonical_request_hash
    )
}

/// Returns signing key of given secret key, date, region and service name
pub fn get_signing_key(
    secret_key: &str,
    date: UtcTime,
    region: &str,
    service_name: &str,
) -> Vec<u8> {
    let mut key: Vec<u8> = b"AWS4".to_vec();
    key.extend(secret_key.as_bytes());

    let date_key = hmac_hash(key.as_slice(), to_signer_date(date).as_bytes());
    let date_region_key = hmac_hash(date_key.as_slice(), region.as_bytes());
    let date_region_service_key = hmac_hash(date_region_key.as_slice(), service_name.as_bytes());
    hmac_hash(date_region_service_key.as_slice(), b"aws4_request")
}

/// Returns signature value for given signing key and string-to-sign
pub fn get_signature(signing_key: &[u8], string_to_sign: &[u8]) -> String {
    hmac_hash_hex(signing_key, string_to_sign)
}

/// Returns authorization value for given access key, scope, signed headers and signature
pub fn get_authorization(
    access_key: &str,
    scope: &str,
    signed_headers: &str,
    signature: &str,
) -> String {
    format!(
        "AWS4-HMAC-SHA256 Credential={access_key}/{scope}, SignedHeaders={signed_headers}, Signature={signature}"
    )
}

/// Signs and updates headers for given parameters for S3 request
pub fn sign_v4_s3(
    method: &Method,
    uri: &str,
    region: &str,
    headers: &mut Multimap,
    query_params: &Multimap,
    access_key: &str,
    secret_key: &str,
    content_sha256: &str,
    date: UtcTime,
) {
    let scope = get_scope(date, region, "s3");
    let (signed_headers, canonical_headers) = headers.get_canonical_headers();
    let canonical_query_string = query_params.get_canonical_query_string();
    let canonical_request_hash = get_canonical_request_hash(
        method,
        uri,
        &canonical_query_string,
        &canonical_headers,
        &signed_headers,
        content_sha256,
    );
    let string_to_sign = get_string_to_sign(date, &scope, &canonical_request_hash);
    let signing_key = get_signing_key(secret_key, date, region, "s3");
    let signature = get_signature(signing_key.as_slice(), string_to_sign.as_bytes());
    let authorization = get_authorization(access_key, &scope, &signed_headers, &signature);

    headers.add(AUTHORIZATION, authorization);
}

/// Signs and updates query parameters for given parameters for presigned request
pub fn presign_v4(
    method: &Method,
    host: &str,
    uri: &str,
    region: &str,
    query_params: &mut Multimap,
    access_key: &str,
    secret_key: &str,
    date: UtcTime,
    expires: u32,
) {
    let scope = get_scope(date, region, "s3");
    let canonical_headers = "host:".to_string() + host;
    let signed_headers = "host";

    query_params.add(X_AMZ_ALGORITHM, "AWS4-HMAC-SHA256");
    query_params.add(X_AMZ_CREDENTIAL, access_key.to_string() + "/" + &scope);
    query_params.add(X_AMZ_DATE_QUERY, to_amz_date(date));
    query_params.add(X_AMZ_EXPIRES, expires.to_string());
    query_params.add(X_AMZ_SIGNED_HEADERS, signed_headers);

    let canonical_query_string = query_params.get_canonical_query_string();
    let canonical_request_hash = get_canonical_request_hash(
        method,
        uri,
        &canonical_query_string,
        &canonical_headers,
        signed_headers,
        UNSIGNED_PAYLOAD,
    );
    let string_to_sign = get_string_to_sign(date, &scope, &canonical_request_hash);
    let signing_key = get_signing_key(secret_key, date, region, "s3");
    let signature = get_signature(signing_key.as_slice(), string_to_sign.as_bytes());

    query_params.add(X_AMZ_SIGNATURE, signature);
}

/// AWS Signature Version 4 signer.
///
/// Without a credential provider requests are passed through unsigned (anonymous access).
#[derive(Clone)]
pub struct SigV4Signer {
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    region: String,
    request_time: Option<UtcTime>,
}

impl fmt::Debug for SigV4Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigV4Signer")
            .field("anonymous", &self.provider.is_none())
            .field("region", &self.region)
            .finish()
    }
}

impl Default for SigV4Signer {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl SigV4Signer {
    pub fn new<P: Provider + Send + Sync + 'static>(
        provider: P,
        region: impl Into<String>,
    ) -> Self {
        Self {
            provider: Some(Arc::new(provider)),
            region: region.into(),
            request_time: None,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            provider: None,
            region: String::from(DEFAULT_REGION),
            request_time: None,
        }
    }

    pub(crate) fn from_provider(
        provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            region: region.into(),
            request_time: None,
        }
    }

    /// Pins the signing time instead of using the current clock.
    pub fn request_time(mut self, time: UtcTime) -> Self {
        self.request_time = Some(time);
        self
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    fn sign_headers(
        &self,
        method: &Method,
        url: Url,
        mut headers: Multimap,
        payload: Option<Bytes>,
    ) -> PreparedRequest {
        headers.add(HOST, url.host_header_value());

        let sha256 = match *method {
            Method::PUT | Method::POST => {
                if !headers.contains_key(CONTENT_TYPE) {
                    headers.add(CONTENT_TYPE, "application/octet-stream");
                }
                let len = payload.as_ref().map_or(0, |b| b.len());
                headers.add(CONTENT_LENGTH, len.to_string());
                match payload {
                    Some(ref b) => sha256_hash(b),
                    None => EMPTY_SHA256.to_string(),
                }
            }
            _ => EMPTY_SHA256.to_string(),
        };
        headers.add(X_AMZ_CONTENT_SHA256, sha256.clone());

        let date = self.request_time.unwrap_or_else(utc_now);
        headers.add(X_AMZ_DATE, to_amz_date(date));

        if let Some(p) = &self.provider {
            let creds = p.fetch();
            if let Some(token) = creds.session_token {
                headers.add(X_AMZ_SECURITY_TOKEN, token);
            }
            sign_v4_s3(
                method,
                &url.path,
                &self.region,
                &mut headers,
                &url.query,
                &creds.access_key,
                &creds.secret_key,
                &sha256,
                date,
            );
        }

        PreparedRequest {
            method: method.clone(),
            url,
            headers,
            body: payload,
        }
    }

    fn presign_url(&self, method: &Method, mut url: Url) -> PreparedRequest {
        let expires: u32 = url
            .query
            .remove(X_AMZ_EXPIRES)
            .and_then(|mut v| v.pop())
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_EXPIRY_SECONDS);

        if let Some(p) = &self.provider {
            let creds = p.fetch();
            if let Some(token) = creds.session_token {
                url.query.add(X_AMZ_SECURITY_TOKEN_QUERY, token);
            }

            let date = self.request_time.unwrap_or_else(utc_now);
            let host = url.host_header_value();
            presign_v4(
                method,
                &host,
                &url.path,
                &self.region,
                &mut url.query,
                &creds.access_key,
                &creds.secret_key,
                date,
                expires,
            );
        }

        PreparedRequest {
            method: method.clone(),
            url,
            headers: Multimap::new(),
            body: None,
        }
    }
}

impl Signer for SigV4Signer {
    fn sign(
        &self,
        method: &Method,
        url: Url,
        headers: Multimap,
        payload: Option<Bytes>,
        presign: bool,
    ) -> Result<PreparedRequest, Error> {
        if presign {
            Ok(self.presign_url(method, url))
        } else {
            Ok(self.sign_headers(method, url, headers, payload))
        }
    }
}
