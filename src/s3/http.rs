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

//! Blocking HTTP request engine
//!
//! An [`HttpRequest`] collects the URL, raw header lines, form parameters,
//! timeout and verbosity, then one terminal verb ([`get`](HttpRequest::get),
//! [`put`](HttpRequest::put), [`put_body`](HttpRequest::put_body),
//! [`put_file`](HttpRequest::put_file), [`post_form`](HttpRequest::post_form),
//! [`post_body`](HttpRequest::post_body)) consumes it and performs exactly one
//! round trip. Every call uses its own transport handle which is released
//! before the verb returns.

use crate::s3::error::Error;
use crate::s3::header_constants::{ACCEPT, CHARSET};
use crate::s3::response::{HttpResponse, parse_header_line};
use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http::{Method, Uri};
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Duration;

/// Timeout applied to a request unless configured otherwise.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Represents Base URL of S3 endpoint
pub struct BaseUrl {
    pub https: bool,
    host: String,
    port: u16,
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            https: true,
            host: "127.0.0.1".to_string(),
            port: 9000,
        }
    }
}

impl FromStr for BaseUrl {
    type Err = Error;

    /// Convert a string to a BaseUrl.
    ///
    /// # Examples
    ///
    /// ```
    /// use minio_lite::s3::http::BaseUrl;
    ///
    /// // Get base URL from host name
    /// let base_url: BaseUrl = "play.min.io".parse().unwrap();
    /// // Get base URL from host:port
    /// let base_url: BaseUrl = "play.min.io:9000".parse().unwrap();
    /// // Get base URL from IPv4 address
    /// let base_url: BaseUrl = "http://192.168.16.109:9000".parse().unwrap();
    /// // Get base URL from IPv6 address
    /// let base_url: BaseUrl = "[0:0:0:0:0:ffff:c0a8:7c3f]:9000".parse().unwrap();
    /// ```
    fn from_str(s: &str) -> Result<Self, Error> {
        let url = s
            .parse::<Uri>()
            .map_err(|e| Error::InvalidBaseUrl(format!("{s}: {e}")))?;

        let https = match url.scheme_str() {
            None | Some("https") => true,
            Some("http") => false,
            Some(_) => {
                return Err(Error::InvalidBaseUrl(
                    "scheme must be http or https".into(),
                ));
            }
        };

        let host = match url.host() {
            Some(h) if !h.is_empty() => h,
            _ => {
                return Err(Error::InvalidBaseUrl(
                    "valid host must be provided".into(),
                ));
            }
        };

        let host = match host.parse::<std::net::Ipv6Addr>() {
            Ok(_) => format!("[{host}]"),
            Err(_) => host.to_string(),
        };

        let mut port = url.port_u16().unwrap_or(0);
        if (https && port == 443) || (!https && port == 80) {
            port = 0;
        }

        if url.path() != "/" && !url.path().is_empty() {
            return Err(Error::InvalidBaseUrl(
                "path must be empty for base URL".into(),
            ));
        }

        if url.query().is_some() {
            return Err(Error::InvalidBaseUrl(
                "query must be none for base URL".into(),
            ));
        }

        Ok(BaseUrl { https, host, port })
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.https {
            f.write_str("https://")?;
        } else {
            f.write_str("http://")?;
        }
        f.write_str(&self.host_with_port())
    }
}

impl BaseUrl {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn host_with_port(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }

    /// Builds the request URL for a resource path. The path is appended
    /// verbatim, it is the same string that gets signed.
    pub fn build_url(&self, resource: &str) -> String {
        format!("{self}{resource}")
    }
}

/// Process wide transport settings, computed once.
#[derive(Debug)]
pub struct TransportDefaults {
    pub user_agent: String,
}

static TRANSPORT_DEFAULTS: OnceLock<TransportDefaults> = OnceLock::new();

/// Performs the one-time transport initialization. Safe to call any number
/// of times from any thread; only the first call does the work.
pub fn global_init() -> &'static TransportDefaults {
    TRANSPORT_DEFAULTS.get_or_init(|| {
        let user_agent = String::from("MinIO (")
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ") minio-lite/"
            + env!("CARGO_PKG_VERSION");
        log::debug!("transport initialized, user agent '{user_agent}'");
        TransportDefaults { user_agent }
    })
}

enum RequestBody<'a> {
    None,
    Bytes(&'a [u8]),
    File(&'a Path),
    Form,
}

enum Payload {
    None,
    Body(reqwest::blocking::Body),
    Form,
}

/// Single-use HTTP request.
///
/// # Example
///
/// ```no_run
/// use minio_lite::s3::http::HttpRequest;
///
/// let resp = HttpRequest::new("http://127.0.0.1:9000/test-bucket/echo.txt")
///     .header("Date: Tue, 27 Mar 2007 19:36:42 +0000")
///     .timeout(10)
///     .get();
/// if !resp.is_success() {
///     eprintln!("request failed: {}", resp.error_message());
/// }
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    url: String,
    headers: Vec<String>,
    params: BTreeMap<String, String>,
    timeout_seconds: u64,
    verbose: bool,
    ignore_cert_check: bool,
}

impl HttpRequest {
    /// Creates a request for given URL with `Accept: */*` and
    /// `Charset: utf-8` already set.
    pub fn new(url: impl Into<String>) -> Self {
        global_init();
        Self {
            url: url.into(),
            headers: vec![format!("{ACCEPT}: */*"), format!("{CHARSET}: utf-8")],
            params: BTreeMap::new(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            verbose: false,
            ignore_cert_check: false,
        }
    }

    /// Appends a raw `Name: value` header line. Lines are sent in the order
    /// they were added; repeated names are sent as separate lines.
    pub fn header(mut self, line: impl Into<String>) -> Self {
        self.headers.push(line.into());
        self
    }

    pub fn header_pair(self, name: &str, value: &str) -> Self {
        self.header(format!("{name}: {value}"))
    }

    /// Appends several raw header lines.
    pub fn headers<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Sets a form parameter, replacing an earlier value of the same name.
    /// Form parameters are only sent by [`post_form`](Self::post_form).
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Enables connection level tracing through the `log` facade.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets the whole-request timeout in seconds; 0 disables it.
    pub fn timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set flag to ignore certificate check for `https://` URLs. This is
    /// insecure and should only be used with self-signed test servers.
    pub fn ignore_cert_check(mut self, ignore_cert_check: bool) -> Self {
        self.ignore_cert_check = ignore_cert_check;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn header_lines(&self) -> &[String] {
        &self.headers
    }

    pub fn get(self) -> HttpResponse {
        self.execute(Method::GET, RequestBody::None)
    }

    /// PUT with an empty body.
    pub fn put(self) -> HttpResponse {
        self.execute(Method::PUT, RequestBody::Bytes(&[]))
    }

    /// PUT with given body. The slice is only borrowed for this call.
    pub fn put_body(self, body: &[u8]) -> HttpResponse {
        self.execute(Method::PUT, RequestBody::Bytes(body))
    }

    /// PUT streaming the content of a local file. The file is opened before
    /// any network I/O; failing to open it fails the call without a request.
    pub fn put_file(self, path: impl AsRef<Path>) -> HttpResponse {
        self.execute(Method::PUT, RequestBody::File(path.as_ref()))
    }

    /// POST with the form parameters as an `application/x-www-form-urlencoded`
    /// body. Parameters are sent sorted by name, last value wins; this is not
    /// a `multipart/form-data` upload.
    pub fn post_form(self) -> HttpResponse {
        self.execute(Method::POST, RequestBody::Form)
    }

    /// POST with given body. The slice is only borrowed for this call.
    pub fn post_body(self, body: &[u8]) -> HttpResponse {
        self.execute(Method::POST, RequestBody::Bytes(body))
    }

    fn execute(self, method: Method, body: RequestBody<'_>) -> HttpResponse {
        match self.send(&method, body) {
            Ok(resp) => {
                log::debug!("{method} {} -> {}", self.url, resp.status_code());
                resp
            }
            Err(e) => {
                log::debug!("{method} {} failed: {e}", self.url);
                HttpResponse::failed(e)
            }
        }
    }

    fn send(&self, method: &Method, body: RequestBody<'_>) -> Result<HttpResponse, Error> {
        let headers = self.parse_headers()?;
        let payload = self.prepare_payload(body)?;
        let client = self.build_transport()?;

        let mut req = client.request(method.clone(), &self.url);
        for (name, value) in headers {
            req = req.header(name, value);
        }
        req = match payload {
            Payload::None => req,
            Payload::Body(b) => req.body(b),
            Payload::Form => req.form(&self.params),
        };

        if self.verbose {
            log::debug!("> {method} {}", self.url);
            for line in &self.headers {
                log::debug!("> {}", redact(line));
            }
        }

        let resp = req.send()?;
        let status = resp.status().as_u16();
        let raw = to_raw_response(resp)?;
        Ok(HttpResponse::parse(status, raw))
    }

    fn parse_headers(&self) -> Result<Vec<(HeaderName, HeaderValue)>, Error> {
        self.headers
            .iter()
            .map(|line| {
                let invalid = || Error::InvalidHeader(redact(line).into_owned());
                let (name, value) = parse_header_line(line).ok_or_else(invalid)?;
                let name = HeaderName::from_bytes(name.trim().as_bytes()).map_err(|_| invalid())?;
                let value = HeaderValue::from_str(value).map_err(|_| invalid())?;
                Ok((name, value))
            })
            .collect()
    }

    fn prepare_payload(&self, body: RequestBody<'_>) -> Result<Payload, Error> {
        Ok(match body {
            RequestBody::None => Payload::None,
            RequestBody::Bytes(b) => Payload::Body(b.to_vec().into()),
            RequestBody::File(path) => {
                let io_err = |source| Error::Io {
                    path: path.to_path_buf(),
                    source,
                };
                let file = File::open(path).map_err(io_err)?;
                let len = file.metadata().map_err(io_err)?.len();
                Payload::Body(reqwest::blocking::Body::sized(file, len))
            }
            RequestBody::Form => Payload::Form,
        })
    }

    /// Whole-request timeout handed to the transport; `None` when disabled.
    pub(crate) fn request_timeout(&self) -> Option<Duration> {
        (self.timeout_seconds > 0).then(|| Duration::from_secs(self.timeout_seconds))
    }

    /// Certificate checks are only ever skipped for `https://` URLs.
    #[cfg_attr(
        not(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        )),
        allow(dead_code)
    )]
    pub(crate) fn accepts_invalid_certs(&self) -> bool {
        self.ignore_cert_check && self.url.starts_with("https://")
    }

    fn build_transport(&self) -> Result<reqwest::blocking::Client, Error> {
        let defaults = global_init();
        let timeout = self.request_timeout();

        #[allow(unused_mut)]
        let mut builder = reqwest::blocking::Client::builder()
            .user_agent(defaults.user_agent.as_str())
            .no_gzip()
            .pool_max_idle_per_host(0)
            .connection_verbose(self.verbose)
            .timeout(timeout);

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if self.accepts_invalid_certs() {
            log::warn!("certificate verification disabled for {}", self.url);
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(builder.build()?)
    }
}

/// Renders a transport response back into wire form: status line, header
/// lines, blank line, body.
fn to_raw_response(resp: reqwest::blocking::Response) -> Result<Bytes, Error> {
    let status = resp.status();
    let mut raw: Vec<u8> = format!(
        "{:?} {} {}\r\n",
        resp.version(),
        status.as_u16(),
        status.canonical_reason().unwrap_or_default()
    )
    .into_bytes();

    for (name, value) in resp.headers() {
        raw.extend_from_slice(name.as_str().as_bytes());
        raw.extend_from_slice(b": ");
        raw.extend_from_slice(value.as_bytes());
        raw.extend_from_slice(b"\r\n");
    }
    raw.extend_from_slice(b"\r\n");
    raw.extend_from_slice(&resp.bytes()?);

    Ok(Bytes::from(raw))
}

fn redact(line: &str) -> std::borrow::Cow<'_, str> {
    match parse_header_line(line) {
        Some((name, _)) if name.trim().eq_ignore_ascii_case("authorization") => {
            format!("{name}: *****").into()
        }
        _ => line.into(),
    }
}
