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

//! Raw HTTP response parsing
//!
//! The transport hands over the response as one byte stream: status line,
//! header lines, a blank line and the body. [`HttpResponse::parse`] splits it
//! locally at the first `\r\n\r\n`.

use crate::s3::error::{Error, ErrorResponse};
use bytes::Bytes;
use std::collections::HashMap;

const HEADER_SEPARATOR: &[u8] = b"\r\n\r\n";
const LINE_SEPARATOR: &str = "\r\n";

/// Response of a single HTTP exchange.
///
/// A response is successful when its status code is in `[200, 300)` and the
/// header block could be split off; otherwise [`error`](Self::error) is set and
/// whatever could be parsed stays accessible for diagnostics.
#[derive(Debug, Default)]
pub struct HttpResponse {
    status_code: u16,
    header_block: String,
    header_lines: Vec<String>,
    header_map: HashMap<String, String>,
    body: Bytes,
    error: Option<Error>,
}

impl HttpResponse {
    /// Parses a raw response; `status_code` comes from the transport.
    pub fn parse(status_code: u16, raw: Bytes) -> HttpResponse {
        let mut resp = HttpResponse {
            status_code,
            ..Default::default()
        };

        let Some(pos) = find_separator(&raw) else {
            log::debug!("no header/body separator in {} byte response", raw.len());
            resp.body = raw;
            resp.error = Some(Error::MalformedResponse(status_code));
            return resp;
        };

        resp.header_block = String::from_utf8_lossy(&raw[..pos]).into_owned();
        resp.body = raw.slice(pos + HEADER_SEPARATOR.len()..);
        resp.header_lines = resp
            .header_block
            .split(LINE_SEPARATOR)
            .map(str::to_string)
            .collect();

        for line in &resp.header_lines {
            match parse_header_line(line) {
                Some((key, value)) => {
                    resp.header_map.insert(key.to_string(), value.to_string());
                }
                None => log::trace!("skipping header line without ':' {line:?}"),
            }
        }

        if !(200..300).contains(&status_code) {
            resp.error = Some(Error::ServerError {
                status: status_code,
                response: ErrorResponse::parse(&resp.body),
            });
        }

        resp
    }

    /// Builds a failed response that never reached the parsing stage.
    pub(crate) fn failed(error: Error) -> HttpResponse {
        HttpResponse {
            error: Some(error),
            ..Default::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Returns the HTTP status code, or 0 if no response was received.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// Returns the value of the header with exactly this name, as received.
    ///
    /// Responses from [`HttpRequest`](crate::s3::http::HttpRequest) carry
    /// lowercase names (`content-type`, not `Content-Type`); use
    /// [`header_ignore_case`](Self::header_ignore_case) when the casing is not known.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.header_map.get(name).map(String::as_str)
    }

    /// Returns the value of the header matching `name` in any letter case.
    /// If several spellings were received, the exact match wins.
    pub fn header_ignore_case(&self, name: &str) -> Option<&str> {
        self.header(name).or_else(|| {
            self.header_map
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str())
        })
    }

    pub fn has_header(&self, name: &str) -> bool {
        self.header_map.contains_key(name)
    }

    /// Returns all lines of the header block in order, including the status line.
    pub fn headers(&self) -> &[String] {
        &self.header_lines
    }

    /// Returns the header block as received, without the trailing blank line.
    pub fn header_block(&self) -> &str {
        &self.header_block
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Returns a human readable failure description; empty on success.
    pub fn error_message(&self) -> String {
        self.error.as_ref().map(Error::to_string).unwrap_or_default()
    }

    /// Converts into a `Result`, dropping the response on failure.
    pub fn into_result(mut self) -> Result<HttpResponse, Error> {
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(self),
        }
    }
}

fn find_separator(raw: &[u8]) -> Option<usize> {
    raw.windows(HEADER_SEPARATOR.len())
        .position(|w| w == HEADER_SEPARATOR)
}

/// Splits a header line at its first `:`. The value has surrounding spaces and
/// tabs removed, so `Name:value`, `Name: value` and `Name:  value` all yield `value`.
pub fn parse_header_line(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    Some((key, value.trim_matches([' ', '\t'])))
}
