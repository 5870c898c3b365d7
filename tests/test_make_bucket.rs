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

use minio_lite::s3::error::Error;
use minio_lite_common::test_context::TestContext;
use minio_lite_common::utils::rand_bucket_name;

#[test]
fn make_bucket() {
    let ctx = TestContext::new();
    let bucket_name = rand_bucket_name();

    ctx.client.make_bucket(&bucket_name).unwrap();
    assert_eq!(ctx.server.bucket_names(), vec![bucket_name.clone()]);

    let req = ctx.server.requests().pop().unwrap();
    assert_eq!(req.method, "PUT");
    assert_eq!(req.path, format!("/{bucket_name}"));
    assert_eq!(req.header("Content-Type"), Some("text/plane"));
    assert!(req.body.is_empty());
}

#[test]
fn make_bucket_twice_reports_server_error() {
    let ctx = TestContext::new();
    let bucket_name = ctx.create_bucket_helper();

    let err = ctx.client.make_bucket(&bucket_name).unwrap_err();
    assert_eq!(err.status_code(), Some(409));
    let resp = err.error_response().unwrap();
    assert_eq!(resp.code, "BucketAlreadyOwnedByYou");
    assert_eq!(resp.resource, format!("/{bucket_name}"));
}

#[test]
fn make_bucket_empty_name() {
    let ctx = TestContext::new();
    let err = ctx.client.make_bucket("").unwrap_err();
    assert!(matches!(err, Error::ServerError { status: 400, .. }));
}
