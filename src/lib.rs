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

//! # minio-lite
//!
//! A small blocking client for MinIO and Amazon S3-compatible object storage
//! using the legacy `Authorization: AWS access_key:signature` scheme
//! (HMAC-SHA1 over a string-to-sign).
//!
//! Supported operations: list buckets, make bucket, upload an object from a
//! file or from memory, and download an object into memory.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use minio_lite::s3::Client;
//! use minio_lite::s3::creds::StaticProvider;
//! use minio_lite::s3::http::BaseUrl;
//!
//! fn main() -> Result<(), minio_lite::s3::error::Error> {
//!     let base_url: BaseUrl = "http://127.0.0.1:9000".parse()?;
//!     let client = Client::new(base_url, StaticProvider::new("minioadmin", "minioadmin"))?;
//!
//!     client.make_bucket("test-bucket")?;
//!     client.upload_from_bytes("/test-bucket/hello.txt", b"hello")?;
//!     let data = client.download("/test-bucket/hello.txt")?;
//!     assert_eq!(data.as_ref(), b"hello");
//!     println!("buckets: {:?}", client.list_buckets()?);
//!     Ok(())
//! }
//! ```
//!
//! ## Design
//! - [`s3::client::Client`] signs every call with a fresh timestamp
//! - [`s3::http::HttpRequest`] performs exactly one blocking round trip per call
//! - [`s3::response::HttpResponse`] splits the raw response into header block and body

#![allow(clippy::result_large_err)]
pub mod s3;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
