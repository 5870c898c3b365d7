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

//! In-process S3 server for integration tests.
//!
//! Understands list buckets (`GET /`), make bucket (`PUT /bucket`), put object
//! (`PUT /bucket/object`) and get object (`GET /bucket/object`). Every request
//! must carry a valid legacy signature for the configured credentials. Objects
//! live in memory for the lifetime of the server.
//!
//! The server is an axum router served from a private tokio runtime, so the
//! blocking client under test can call it from ordinary `#[test]` functions.

use axum::Router;
use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::response::{IntoResponse, Response};
use http::{Method, StatusCode, header};
use minio_lite::s3::http::BaseUrl;
use minio_lite::s3::signer::build_auth_header;
use std::collections::BTreeMap;
use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::runtime::Runtime;
use tokio::sync::oneshot;

const XML_CONTENT_TYPE: &str = "application/xml";
const OBJECT_CONTENT_TYPE: &str = "application/octet-stream";

/// A request as seen by the server.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    /// Header name/value pairs; names are lowercase.
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    /// Case-insensitive header lookup, first match.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Default)]
struct Store {
    buckets: BTreeMap<String, BTreeMap<String, Vec<u8>>>,
    requests: Vec<RecordedRequest>,
}

struct Shared {
    access_key: String,
    secret_key: String,
    store: Mutex<Store>,
}

type Reply = (StatusCode, &'static str, Vec<u8>);

/// Server running on its own background runtime; stopped on drop.
pub struct MockS3Server {
    addr: SocketAddr,
    shared: Arc<Shared>,
    shutdown: Option<oneshot::Sender<()>>,
    runtime: Option<Runtime>,
}

impl MockS3Server {
    /// Starts a server on an ephemeral local port accepting given credentials.
    pub fn start(access_key: &str, secret_key: &str) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let listener = runtime.block_on(TcpListener::bind("127.0.0.1:0"))?;
        let addr = listener.local_addr()?;

        let shared = Arc::new(Shared {
            access_key: access_key.to_string(),
            secret_key: secret_key.to_string(),
            store: Mutex::default(),
        });
        let app = Router::new()
            .fallback(handle_request)
            .with_state(shared.clone());

        let (tx, rx) = oneshot::channel::<()>();
        runtime.spawn(async move {
            let server = axum::serve(listener, app).with_graceful_shutdown(async {
                let _ = rx.await;
            });
            if let Err(e) = server.await {
                log::warn!("mock S3 server stopped: {e}");
            }
        });

        log::debug!("mock S3 server listening on {addr}");
        Ok(Self {
            addr,
            shared,
            shutdown: Some(tx),
            runtime: Some(runtime),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn base_url(&self) -> BaseUrl {
        format!("http://{}", self.addr)
            .parse()
            .expect("local address is a valid base url")
    }

    /// Returns all requests served so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.shared.store().requests.clone()
    }

    pub fn bucket_names(&self) -> Vec<String> {
        self.shared.store().buckets.keys().cloned().collect()
    }

    pub fn object(&self, bucket: &str, object: &str) -> Option<Vec<u8>> {
        self.shared
            .store()
            .buckets
            .get(bucket)
            .and_then(|b| b.get(object))
            .cloned()
    }
}

impl Drop for MockS3Server {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_timeout(Duration::from_secs(1));
        }
    }
}

async fn handle_request(State(shared): State<Arc<Shared>>, req: Request) -> Response {
    let (parts, body) = req.into_parts();
    let body = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            log::warn!("mock S3 server failed to read body: {e}");
            return reply(error_reply(
                StatusCode::BAD_REQUEST,
                "IncompleteBody",
                "You did not provide the number of bytes specified by the Content-Length HTTP header.",
                parts.uri.path(),
            ));
        }
    };

    let recorded = RecordedRequest {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        headers: parts
            .headers
            .iter()
            .map(|(n, v)| {
                (
                    n.as_str().to_string(),
                    String::from_utf8_lossy(v.as_bytes()).into_owned(),
                )
            })
            .collect(),
        body: body.to_vec(),
    };

    let result = shared.handle(&recorded);
    log::debug!(
        "mock {} {} -> {}",
        recorded.method,
        recorded.path,
        result.0.as_u16()
    );
    shared.store().requests.push(recorded);
    reply(result)
}

fn reply((status, content_type, body): Reply) -> Response {
    (
        status,
        [(header::SERVER, "MinIO"), (header::CONTENT_TYPE, content_type)],
        body,
    )
        .into_response()
}

impl Shared {
    fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn handle(&self, req: &RecordedRequest) -> Reply {
        if let Err((code, message)) = self.authenticate(req) {
            return error_reply(StatusCode::FORBIDDEN, code, message, &req.path);
        }

        let path = req.path.trim_start_matches('/');
        let (bucket, object) = path.split_once('/').unwrap_or((path, ""));
        let mut store = self.store();

        match (req.method.as_str(), bucket, object) {
            ("GET", "", "") => (
                StatusCode::OK,
                XML_CONTENT_TYPE,
                list_buckets_body(store.buckets.keys()),
            ),
            ("PUT", "", _) => error_reply(
                StatusCode::BAD_REQUEST,
                "InvalidBucketName",
                "The specified bucket is not valid.",
                &req.path,
            ),
            ("PUT", bucket, "") => {
                if store.buckets.contains_key(bucket) {
                    return error_reply(
                        StatusCode::CONFLICT,
                        "BucketAlreadyOwnedByYou",
                        "Your previous request to create the named bucket succeeded and you already own it.",
                        &req.path,
                    );
                }
                store.buckets.insert(bucket.to_string(), BTreeMap::new());
                (StatusCode::OK, XML_CONTENT_TYPE, Vec::new())
            }
            ("PUT", bucket, object) => match store.buckets.get_mut(bucket) {
                Some(objects) => {
                    objects.insert(object.to_string(), req.body.clone());
                    (StatusCode::OK, XML_CONTENT_TYPE, Vec::new())
                }
                None => no_such_bucket(&req.path),
            },
            ("GET", bucket, object) if !object.is_empty() => match store.buckets.get(bucket) {
                Some(objects) => match objects.get(object) {
                    Some(data) => (StatusCode::OK, OBJECT_CONTENT_TYPE, data.clone()),
                    None => error_reply(
                        StatusCode::NOT_FOUND,
                        "NoSuchKey",
                        "The specified key does not exist.",
                        &req.path,
                    ),
                },
                None => no_such_bucket(&req.path),
            },
            _ => error_reply(
                StatusCode::METHOD_NOT_ALLOWED,
                "MethodNotAllowed",
                "The specified method is not allowed against this resource.",
                &req.path,
            ),
        }
    }

    fn authenticate(&self, req: &RecordedRequest) -> Result<(), (&'static str, &'static str)> {
        const DENIED: (&str, &str) = ("AccessDenied", "Access Denied.");

        let authorization = req.header("Authorization").ok_or(DENIED)?;
        let date = req.header("Date").ok_or(DENIED)?;
        let content_type = req.header("Content-Type").unwrap_or_default();
        let method = Method::from_bytes(req.method.as_bytes()).map_err(|_| DENIED)?;

        let expected = build_auth_header(
            &self.secret_key,
            &self.access_key,
            &method,
            content_type,
            date,
            &req.path,
        );
        if authorization == expected {
            return Ok(());
        }

        if !authorization.starts_with(&format!("AWS {}:", self.access_key)) {
            return Err((
                "InvalidAccessKeyId",
                "The Access Key Id you provided does not exist in our records.",
            ));
        }
        Err((
            "SignatureDoesNotMatch",
            "The request signature we calculated does not match the signature you provided.",
        ))
    }
}

fn list_buckets_body<'a>(names: impl Iterator<Item = &'a String>) -> Vec<u8> {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<ListAllMyBucketsResult xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\"><Owner><ID>02d6176db174dc93cb1b899f7c6078f08654445fe8cf1b6ce98d8855f66bdbf4</ID><DisplayName>minio</DisplayName></Owner><Buckets>",
    );
    for name in names {
        xml.push_str("<Bucket><Name>");
        xml.push_str(name);
        xml.push_str("</Name><CreationDate>2021-07-28T09:56:02.000Z</CreationDate></Bucket>");
    }
    xml.push_str("</Buckets></ListAllMyBucketsResult>");
    xml.into_bytes()
}

fn no_such_bucket(resource: &str) -> Reply {
    error_reply(
        StatusCode::NOT_FOUND,
        "NoSuchBucket",
        "The specified bucket does not exist",
        resource,
    )
}

fn error_reply(status: StatusCode, code: &str, message: &str, resource: &str) -> Reply {
    let body = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Error><Code>{code}</Code><Message>{message}</Message><Resource>{resource}</Resource><RequestId>17F3E7A8D6C5B4A3</RequestId><HostId>dd9025bab4ad464b049177c95eb6ebf374d3b3fd1af9251148b658df7ac2e3e8</HostId></Error>"
    );
    (status, XML_CONTENT_TYPE, body.into_bytes())
}
