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

//! Error definitions for S3 operations

use crate::s3::utils::get_default_text;
use std::path::PathBuf;
use thiserror::Error;
use xmltree::Element;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Error document returned by the server in the body of a failed request
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub resource: String,
    pub request_id: String,
    pub host_id: String,
    pub bucket_name: String,
    pub object_name: String,
}

impl ErrorResponse {
    /// Parses an `<Error>` XML document. Returns `None` when the body is not
    /// one (empty body, HTML error page, unrelated XML).
    pub fn parse(body: &[u8]) -> Option<ErrorResponse> {
        let root = Element::parse(body).ok()?;
        if root.name != "Error" {
            return None;
        }

        Some(ErrorResponse {
            code: get_default_text(&root, "Code"),
            message: get_default_text(&root, "Message"),
            resource: get_default_text(&root, "Resource"),
            request_id: get_default_text(&root, "RequestId"),
            host_id: get_default_text(&root, "HostId"),
            bucket_name: get_default_text(&root, "BucketName"),
            object_name: get_default_text(&root, "Key"),
        })
    }
}

/// Error definitions
#[derive(Debug, Error)]
pub enum Error {
    /// Connection, DNS, TLS, redirect or timeout failure reported by the transport
    #[error("transport error{}: {}", transport_kind(.0), error_chain(.0))]
    Transport(#[from] reqwest::Error),

    /// Local file could not be opened; raised before any network I/O
    #[error("open file {} failed: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid header line '{0}', expected 'Name: value'")]
    InvalidHeader(String),

    /// Response has no blank line between header block and body
    #[error("wrong http response, no header/body separator; status code: {0}")]
    MalformedResponse(u16),

    /// Response status code is outside of `[200, 300)`
    #[error("response code: {status}{}", describe(.response))]
    ServerError {
        status: u16,
        response: Option<ErrorResponse>,
    },

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),

    #[error("missing environment variable {0}")]
    MissingEnv(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the HTTP status code if the server answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::MalformedResponse(status) | Error::ServerError { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns the server error document, if the failed response carried one.
    pub fn error_response(&self) -> Option<&ErrorResponse> {
        match self {
            Error::ServerError { response, .. } => response.as_ref(),
            _ => None,
        }
    }
}

fn transport_kind(e: &reqwest::Error) -> &'static str {
    if e.is_timeout() {
        " (timeout)"
    } else if e.is_connect() {
        " (connect)"
    } else if e.is_redirect() {
        " (redirect)"
    } else {
        ""
    }
}

fn error_chain(e: &reqwest::Error) -> String {
    let mut msg = e.to_string();
    let mut source = std::error::Error::source(e);
    while let Some(s) = source {
        msg.push_str(": ");
        msg.push_str(&s.to_string());
        source = s.source();
    }
    msg
}

fn describe(response: &Option<ErrorResponse>) -> String {
    match response {
        Some(er) => format!(
            "; code: {}, message: {}, resource: {}, request_id: {}",
            er.code, er.message, er.resource, er.request_id
        ),
        None => String::new(),
    }
}
