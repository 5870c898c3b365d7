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

use super::{Client, check_response};
use crate::s3::error::Error;
use crate::s3::header_constants::OBJECT_CONTENT_TYPE;
use bytes::Bytes;
use http::Method;

impl Client {
    /// Downloads the object at `remote_path` and returns its content.
    ///
    /// The whole object is held in memory.
    pub fn download(&self, remote_path: &str) -> Result<Bytes, Error> {
        let resp = self
            .signed_request(&Method::GET, OBJECT_CONTENT_TYPE, remote_path)
            .get();
        let resp = check_response("download", resp)?;
        Ok(resp.into_body())
    }
}
