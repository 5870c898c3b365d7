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
use crate::s3::header_constants::BUCKET_CONTENT_TYPE;
use http::Method;

impl Client {
    /// Creates a bucket. The name is sent as is; the server decides whether it
    /// is valid.
    pub fn make_bucket(&self, bucket: &str) -> Result<(), Error> {
        let resource = format!("/{bucket}");
        let resp = self
            .signed_request(&Method::PUT, BUCKET_CONTENT_TYPE, &resource)
            .put();
        check_response("make bucket", resp)?;
        Ok(())
    }
}
