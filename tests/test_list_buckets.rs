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

use minio_lite_common::test_context::TestContext;

#[test]
fn list_buckets() {
    const N_BUCKETS: usize = 3;
    let ctx = TestContext::new();

    let mut names: Vec<String> = Vec::new();
    for _ in 1..=N_BUCKETS {
        names.push(ctx.create_bucket_helper());
    }
    assert_eq!(names.len(), N_BUCKETS);

    let buckets = ctx.client.list_buckets().unwrap();
    let count = buckets.iter().filter(|b| names.contains(b)).count();
    assert_eq!(buckets.len(), N_BUCKETS);
    assert_eq!(count, N_BUCKETS);
}

#[test]
fn list_buckets_is_repeatable() {
    let ctx = TestContext::new();
    ctx.create_bucket_helper();
    ctx.create_bucket_helper();

    let first = ctx.client.list_buckets().unwrap();
    let second = ctx.client.list_buckets().unwrap();
    assert_eq!(first, second);
    assert_eq!(first, ctx.server.bucket_names());
}

#[test]
fn list_buckets_empty() {
    let ctx = TestContext::new();
    assert!(ctx.client.list_buckets().unwrap().is_empty());
}

#[test]
fn list_buckets_request_is_signed_get() {
    let ctx = TestContext::new();
    ctx.client.list_buckets().unwrap();

    let requests = ctx.server.requests();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/");
    assert_eq!(req.header("Content-Type"), Some("text/plane"));
    assert_eq!(req.header("Accept"), Some("*/*"));
    assert_eq!(req.header("Charset"), Some("utf-8"));
    assert!(req.header("Date").unwrap().ends_with(" +0000"));

    let authorization = req.header("Authorization").unwrap();
    let prefix = format!("AWS {}:", ctx.access_key);
    assert!(authorization.starts_with(&prefix));
    // base64 of a 20 byte digest
    assert_eq!(authorization.len() - prefix.len(), 28);
}
