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
//! Every operation is a single blocking round trip signed with the legacy
//! `AWS access_key:signature` scheme. A fresh timestamp is generated per call
//! and used unchanged for both the `Date` header and the signature.

use crate::s3::creds::{EnvProvider, Provider, StaticProvider};
use crate::s3::error::Error;
use crate::s3::http::{BaseUrl, DEFAULT_TIMEOUT_SECONDS, HttpRequest};
use crate::s3::response::HttpResponse;
use crate::s3::signer::sign_request;
use crate::s3::utils::{to_signer_date, utc_now};
use http::Method;
use std::sync::Arc;

mod download_object;
mod list_buckets;
mod make_bucket;
mod upload_object;

pub const ENV_SERVER_ENDPOINT: &str = "SERVER_ENDPOINT";
pub const ENV_ACCESS_KEY: &str = "ACCESS_KEY";
pub const ENV_SECRET_KEY: &str = "SECRET_KEY";
pub const ENV_IGNORE_CERT_CHECK: &str = "IGNORE_CERT_CHECK";

/// Client Builder manufactures a Client using given parameters.
#[derive(Clone, Debug)]
pub struct ClientBuilder {
    base_url: BaseUrl,
    /// Set the credential provider. If not set, credentials are read from
    /// `MINIO_ACCESS_KEY` and `MINIO_SECRET_KEY` at build time.
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    /// Set flag to ignore certificate check. This is insecure and should only be used for testing.
    ignore_cert_check: bool,
    timeout_seconds: u64,
    verbose: bool,
}

impl ClientBuilder {
    /// Creates a builder given a base URL for the MinIO service or other AWS S3
    /// compatible object storage service.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            provider: None,
            ignore_cert_check: false,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            verbose: false,
        }
    }

    /// Creates a builder from `SERVER_ENDPOINT`, `ACCESS_KEY` and `SECRET_KEY`.
    /// Certificate checks are disabled when `IGNORE_CERT_CHECK` is set.
    pub fn from_env() -> Result<Self, Error> {
        let base_url: BaseUrl = env_var(ENV_SERVER_ENDPOINT)?.parse()?;
        let access_key = env_var(ENV_ACCESS_KEY)?;
        let secret_key = env_var(ENV_SECRET_KEY)?;
        let ignore_cert_check = std::env::var_os(ENV_IGNORE_CERT_CHECK).is_some();

        Ok(Self::new(base_url)
            .provider(StaticProvider::new(&access_key, &secret_key))
            .ignore_cert_check(ignore_cert_check))
    }

    /// Set the credential provider.
    pub fn provider<P: Provider + Send + Sync + 'static>(mut self, provider: P) -> Self {
        self.provider = Some(Arc::new(provider));
        self
    }

    /// Set flag to ignore certificate check for `https://` endpoints.
    pub fn ignore_cert_check(mut self, ignore_cert_check: bool) -> Self {
        self.ignore_cert_check = ignore_cert_check;
        self
    }

    /// Per request timeout in seconds; 0 disables it.
    pub fn timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Build the Client.
    pub fn build(self) -> Result<Client, Error> {
        let provider: Arc<dyn Provider + Send + Sync + 'static> = match self.provider {
            Some(v) => v,
            None => Arc::new(EnvProvider::new()?),
        };

        Ok(Client {
            shared: Arc::new(SharedClientItems {
                base_url: self.base_url,
                provider,
                ignore_cert_check: self.ignore_cert_check,
                timeout_seconds: self.timeout_seconds,
                verbose: self.verbose,
            }),
        })
    }
}

/// Simple Storage Service (aka S3) client to perform bucket and object operations.
///
/// Cloning is cheap; clones share the same immutable configuration and may be
/// used from several threads at once.
///
/// # Example
///
/// ```no_run
/// use minio_lite::s3::Client;
/// use minio_lite::s3::creds::StaticProvider;
/// use minio_lite::s3::http::BaseUrl;
///
/// let base_url: BaseUrl = "http://127.0.0.1:9000".parse().unwrap();
/// let client = Client::new(base_url, StaticProvider::new("minioadmin", "minioadmin")).unwrap();
/// for name in client.list_buckets().unwrap() {
///     println!("{name}");
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    pub(crate) shared: Arc<SharedClientItems>,
}

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    pub(crate) base_url: BaseUrl,
    pub(crate) provider: Arc<dyn Provider + Send + Sync + 'static>,
    ignore_cert_check: bool,
    timeout_seconds: u64,
    verbose: bool,
}

impl Client {
    /// Returns a S3 client with given base URL and credential provider.
    pub fn new<P: Provider + Send + Sync + 'static>(
        base_url: BaseUrl,
        provider: P,
    ) -> Result<Self, Error> {
        ClientBuilder::new(base_url).provider(provider).build()
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.shared.base_url
    }

    /// Prepares a signed request for `resource`. The request carries `Accept`,
    /// `Charset`, `Date`, `Content-Type` and `Authorization` in that order.
    pub(crate) fn signed_request(
        &self,
        method: &Method,
        content_type: &str,
        resource: &str,
    ) -> HttpRequest {
        let creds = self.shared.provider.fetch();
        let date = to_signer_date(utc_now());

        let mut headers = Vec::with_capacity(3);
        sign_request(&mut headers, &creds, method, content_type, &date, resource);

        log::debug!("{method} {resource} date='{date}'");
        HttpRequest::new(self.shared.base_url.build_url(resource))
            .headers(headers)
            .timeout(self.shared.timeout_seconds)
            .verbose(self.shared.verbose)
            .ignore_cert_check(self.shared.ignore_cert_check)
    }
}

/// Logs a failed operation together with whatever body the server sent.
pub(crate) fn check_response(op: &str, resp: HttpResponse) -> Result<HttpResponse, Error> {
    if let Some(e) = resp.error() {
        log::error!("{op} failed: {e}\n{}", String::from_utf8_lossy(resp.body()));
    }
    resp.into_result()
}

fn env_var(name: &str) -> Result<String, Error> {
    std::env::var(name).map_err(|_| Error::MissingEnv(name.to_string()))
}
