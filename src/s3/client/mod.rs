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

//! S3 client to perform bucket and object operations.
//!
//! Every operation makes at most one round trip: the request is built, handed to the
//! [`Signer`], sent through the [`Transport`], and the response status is compared against the
//! single status code the operation expects.

use bytes::Bytes;
use http::{Method, StatusCode};
use std::sync::Arc;

use crate::s3::creds::Provider;
use crate::s3::error::{ClientErr, Error};
use crate::s3::error_response::ErrorResponse;
use crate::s3::http::BaseUrl;
use crate::s3::multimap_ext::Multimap;
use crate::s3::signer::{PreparedRequest, SigV4Signer, Signer};
use crate::s3::transport::{ReqwestTransport, Transport, TransportResponse};
use crate::s3::xml::{FieldTable, XmlNormalizer};

mod create_bucket;
mod create_content;
mod delete_bucket;
mod delete_content;
mod list_buckets;
mod list_contents;
mod presign;

/// The default AWS region to be used if no other region is specified.
pub const DEFAULT_REGION: &str = "us-east-1";

pub use crate::s3::signer::DEFAULT_EXPIRY_SECONDS;

/// Client Builder manufactures a Client using given parameters.
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: BaseUrl,
    /// Credential provider of the default signer. If not set, anonymous access is used.
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    signer: Option<Arc<dyn Signer>>,
    transport: Option<Arc<dyn Transport>>,
    field_table: FieldTable,
    /// Set flag to ignore certificate check of the default transport. This is insecure and
    /// should only be used for testing.
    ignore_cert_check: Option<bool>,
}

impl ClientBuilder {
    /// Creates a builder given a base URL for the S3 compatible object storage service.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            provider: None,
            signer: None,
            transport: None,
            field_table: FieldTable::default(),
            ignore_cert_check: None,
        }
    }

    /// Set the credential provider used by the default [`SigV4Signer`].
    pub fn provider<P: Provider + Send + Sync + 'static>(mut self, provider: Option<P>) -> Self {
        self.provider = provider.map(|p| Arc::new(p) as Arc<dyn Provider + Send + Sync + 'static>);
        self
    }

    /// Replace the default signer. Takes precedence over [`provider`](Self::provider).
    pub fn signer<S: Signer + 'static>(mut self, signer: S) -> Self {
        self.signer = Some(Arc::new(signer) as Arc<dyn Signer>);
        self
    }

    /// Replace the default [`ReqwestTransport`].
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Arc::new(transport) as Arc<dyn Transport>);
        self
    }

    /// Set the tag name table used when normalizing XML responses.
    pub fn field_table(mut self, field_table: FieldTable) -> Self {
        self.field_table = field_table;
        self
    }

    /// Set flag to ignore certificate check. This is insecure and should only
    /// be used for testing.
    pub fn ignore_cert_check(mut self, ignore_cert_check: Option<bool>) -> Self {
        self.ignore_cert_check = ignore_cert_check;
        self
    }

    /// Build the Client.
    pub fn build(self) -> Result<Client, Error> {
        let signer: Arc<dyn Signer> = match self.signer {
            Some(s) => s,
            None => Arc::new(SigV4Signer::from_provider(
                self.provider,
                self.base_url.region.clone(),
            )),
        };
        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => Arc::new(ReqwestTransport::new(self.ignore_cert_check)?),
        };

        Ok(Client {
            shared: Arc::new(SharedClientItems {
                base_url: self.base_url,
                signer,
                transport,
                normalizer: XmlNormalizer::new(self.field_table),
            }),
        })
    }
}

/// Simple Storage Service (aka S3) client to perform bucket and object operations.
///
/// Cloning is cheap; clones share the signer, transport and field table, all of which are only
/// ever read.
#[derive(Clone, Debug)]
pub struct Client {
    pub(crate) shared: Arc<SharedClientItems>,
}

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    pub(crate) base_url: BaseUrl,
    signer: Arc<dyn Signer>,
    transport: Arc<dyn Transport>,
    normalizer: XmlNormalizer,
}

impl Client {
    /// Returns a S3 client with given base URL, signing with the given provider.
    ///
    /// # Examples
    ///
    /// ```
    /// use objstore::s3::Client;
    /// use objstore::s3::creds::StaticProvider;
    /// use objstore::s3::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "play.min.io".parse().unwrap();
    /// let static_provider = StaticProvider::new(
    ///     "Q3AM3UQ867SPQQA43P2F",
    ///     "zuf+tfteSlswRu7BJ86wekitnifILbZam1KYY3TG",
    ///     None,
    /// );
    /// let client = Client::new(base_url, Some(static_provider)).unwrap();
    /// ```
    pub fn new<P: Provider + Send + Sync + 'static>(
        base_url: BaseUrl,
        provider: Option<P>,
    ) -> Result<Self, Error> {
        ClientBuilder::new(base_url).provider(provider).build()
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.shared.base_url
    }

    /// Returns whether this client is configured to use HTTPS.
    pub fn is_secure(&self) -> bool {
        self.shared.base_url.https
    }

    pub fn normalizer(&self) -> &XmlNormalizer {
        &self.shared.normalizer
    }

    /// Signs and sends one request, failing unless the service answers with `expected`.
    #[allow(clippy::too_many_arguments)]
    pub(crate) async fn execute(
        &self,
        method: &Method,
        expected: StatusCode,
        headers: &Multimap,
        query_params: &Multimap,
        bucket_name: Option<&str>,
        object_name: Option<&str>,
        body: Option<Bytes>,
    ) -> Result<TransportResponse, Error> {
        let url = self
            .shared
            .base_url
            .build_url(query_params, bucket_name, object_name);
        log::debug!("{method} {url}");

        let request = self
            .shared
            .signer
            .sign(method, url, headers.clone(), body, false)?;
        let resp = self.shared.transport.send(request).await?;
        log::debug!(
            "{method} bucket={bucket_name:?} object={object_name:?} status={}",
            resp.status
        );

        if resp.status != expected {
            let body = String::from_utf8_lossy(&resp.body).into_owned();
            log::warn!(
                "{method} bucket={bucket_name:?} object={object_name:?}: expected status {expected}, got {}",
                resp.status
            );
            return Err(ClientErr::UnexpectedStatus {
                expected,
                status: resp.status,
                body,
                response: resp.xml.as_ref().and_then(ErrorResponse::from_element),
            }
            .into());
        }

        Ok(resp)
    }

    /// Signs a request in presign mode without sending it.
    pub(crate) fn presign_request(
        &self,
        method: &Method,
        query_params: &Multimap,
        bucket_name: Option<&str>,
        object_name: Option<&str>,
    ) -> Result<PreparedRequest, Error> {
        let url = self
            .shared
            .base_url
            .build_url(query_params, bucket_name, object_name);
        log::debug!("presigning {method} {url}");

        self.shared
            .signer
            .sign(method, url, Multimap::new(), None, true)
    }
}
