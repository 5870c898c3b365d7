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
use crate::s3::xml::extract_buckets;
use http::Method;

impl Client {
    /// Returns the names of all buckets owned by the authenticated sender of
    /// the request, in the order the server listed them.
    ///
    /// For more information, refer to the [AWS S3 ListBuckets API documentation](https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListBuckets.html).
    pub fn list_buckets(&self) -> Result<Vec<String>, Error> {
        let resp = self
            .signed_request(&Method::GET, BUCKET_CONTENT_TYPE, "/")
            .get();
        let resp = check_response("list buckets", resp)?;

        let buckets = extract_buckets(&String::from_utf8_lossy(resp.body()));
        log::debug!("listed {} buckets", buckets.len());
        Ok(buckets)
    }
}
