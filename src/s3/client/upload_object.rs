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
use http::Method;
use std::path::Path;

impl Client {
    /// Uploads the content of a local file to `remote_path`, a resource path
    /// of the form `/bucket/object`.
    ///
    /// The file is opened before anything is sent; if that fails no request
    /// is made and [`Error::Io`] is returned.
    pub fn upload_from_file<P: AsRef<Path>>(
        &self,
        remote_path: &str,
        local_path: P,
    ) -> Result<(), Error> {
        let resp = self
            .signed_request(&Method::PUT, OBJECT_CONTENT_TYPE, remote_path)
            .put_file(local_path);
        check_response("upload from file", resp)?;
        Ok(())
    }

    /// Uploads `data` to `remote_path`. An empty slice creates an empty object.
    pub fn upload_from_bytes(&self, remote_path: &str, data: &[u8]) -> Result<(), Error> {
        let resp = self
            .signed_request(&Method::PUT, OBJECT_CONTENT_TYPE, remote_path)
            .put_body(data);
        check_response("upload from bytes", resp)?;
        Ok(())
    }
}
