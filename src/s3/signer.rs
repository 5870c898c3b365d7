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

//! Legacy (HMAC-SHA1) request signing for S3 API
//!
//! The `Authorization` header has the format:
//!
//! ```text
//! AWS <AccessKey>:<Signature>
//! ```
//!
//! Where `Signature = Base64(HMAC-SHA1(SecretKey, StringToSign))` and:
//!
//! ```text
//! StringToSign = HTTP-Verb + "\n" +
//!                "\n" +
//!                Content-Type + "\n" +
//!                Date + "\n" +
//!                Resource
//! ```
//!
//! The Content-MD5 line is always empty and no `x-amz-*` headers are
//! canonicalized; the resource path is used verbatim.

use crate::s3::creds::Credentials;
use crate::s3::header_constants::{AUTHORIZATION, CONTENT_TYPE, DATE};
use crate::s3::utils::{b64encode, hmac_sha1};
use http::Method;

/// Returns string-to-sign value of given method, content type, date and resource
pub fn string_to_sign(method: &Method, content_type: &str, date: &str, resource: &str) -> String {
    format!("{method}\n\n{content_type}\n{date}\n{resource}")
}

/// Returns base64 encoded HMAC-SHA1 signature of given string-to-sign
pub fn sign_v2(secret_key: &str, string_to_sign: &str) -> String {
    b64encode(hmac_sha1(secret_key.as_bytes(), string_to_sign.as_bytes()))
}

/// Returns authorization value for given access key and signature
pub fn get_authorization(access_key: &str, signature: &str) -> String {
    format!("AWS {access_key}:{signature}")
}

/// Builds the `Authorization` header value for given parameters.
///
/// `date` must be pre-formatted (see [`to_signer_date`](crate::s3::utils::to_signer_date))
/// and sent unchanged as the `Date` header of the same request.
pub fn build_auth_header(
    secret_key: &str,
    access_key: &str,
    method: &Method,
    content_type: &str,
    date: &str,
    resource: &str,
) -> String {
    let string_to_sign = string_to_sign(method, content_type, date, resource);
    get_authorization(access_key, &sign_v2(secret_key, &string_to_sign))
}

/// Signs a request by appending `Date`, `Content-Type` and `Authorization`
/// header lines, in that order.
pub fn sign_request(
    headers: &mut Vec<String>,
    creds: &Credentials,
    method: &Method,
    content_type: &str,
    date: &str,
    resource: &str,
) {
    let authorization = build_auth_header(
        &creds.secret_key,
        &creds.access_key,
        method,
        content_type,
        date,
        resource,
    );

    headers.push(format!("{DATE}: {date}"));
    headers.push(format!("{CONTENT_TYPE}: {content_type}"));
    headers.push(format!("{AUTHORIZATION}: {authorization}"));
}
