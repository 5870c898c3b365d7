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
use minio_lite_common::temp_file::TempFile;
use minio_lite_common::test_context::TestContext;
use minio_lite_common::utils::{rand_data, rand_object_name};

#[test]
fn upload_download_bytes() {
    let ctx = TestContext::new();
    let bucket_name = ctx.create_bucket_helper();
    let object_name = rand_object_name();
    let remote_path = format!("/{bucket_name}/{object_name}");

    let data = b"\x00hello\xff\xfe\x00world\r\n\r\n\x80".to_vec();
    ctx.client.upload_from_bytes(&remote_path, &data).unwrap();
    assert_eq!(ctx.server.object(&bucket_name, &object_name), Some(data.clone()));

    let downloaded = ctx.client.download(&remote_path).unwrap();
    assert_eq!(downloaded.as_ref(), data.as_slice());

    let requests = ctx.server.requests();
    let put = &requests[requests.len() - 2];
    assert_eq!(put.method, "PUT");
    assert_eq!(put.header("Content-Type"), Some("application/octet-stream"));
    let get = &requests[requests.len() - 1];
    assert_eq!(get.method, "GET");
    assert_eq!(get.path, remote_path);
    assert_eq!(get.header("Content-Type"), Some("application/octet-stream"));
}

#[test]
fn upload_download_random_bytes() {
    let ctx = TestContext::new();
    let bucket_name = ctx.create_bucket_helper();

    for size in [1_usize, 16, 4096, 1 << 20] {
        let remote_path = format!("/{bucket_name}/{}", rand_object_name());
        let data = rand_data(size);
        ctx.client.upload_from_bytes(&remote_path, &data).unwrap();
        let downloaded = ctx.client.download(&remote_path).unwrap();
        assert_eq!(downloaded.len(), size);
        assert_eq!(downloaded.as_ref(), data.as_slice());
    }
}

#[test]
fn upload_download_empty_object() {
    let ctx = TestContext::new();
    let bucket_name = ctx.create_bucket_helper();
    let remote_path = format!("/{bucket_name}/{}", rand_object_name());

    ctx.client.upload_from_bytes(&remote_path, &[]).unwrap();
    let downloaded = ctx.client.download(&remote_path).unwrap();
    assert!(downloaded.is_empty());
}

#[test]
fn upload_from_file_download() {
    let ctx = TestContext::new();
    let bucket_name = ctx.create_bucket_helper();
    let object_name = rand_object_name();
    let remote_path = format!("/{bucket_name}/{object_name}");

    let data = rand_data(64 * 1024 + 7);
    let file = TempFile::with_content(&data);
    ctx.client.upload_from_file(&remote_path, file.path()).unwrap();

    let downloaded = ctx.client.download(&remote_path).unwrap();
    assert_eq!(downloaded.as_ref(), data.as_slice());

    let put = ctx
        .server
        .requests()
        .into_iter()
        .find(|r| r.method == "PUT" && r.path == remote_path)
        .unwrap();
    assert_eq!(put.header("Content-Length"), Some("65543"));
    assert_eq!(put.body, data);
}

#[test]
fn upload_from_missing_file_sends_nothing() {
    let ctx = TestContext::new();
    let bucket_name = ctx.create_bucket_helper();
    let before = ctx.server.requests().len();

    let local_path = std::env::temp_dir().join(format!("minio-lite-missing-{}", rand_object_name()));
    let err = ctx
        .client
        .upload_from_file(&format!("/{bucket_name}/object"), &local_path)
        .unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
    assert_eq!(ctx.server.requests().len(), before);
}

#[test]
fn upload_overwrites_object() {
    let ctx = TestContext::new();
    let bucket_name = ctx.create_bucket_helper();
    let remote_path = format!("/{bucket_name}/{}", rand_object_name());

    ctx.client.upload_from_bytes(&remote_path, b"first").unwrap();
    ctx.client.upload_from_bytes(&remote_path, b"second").unwrap();
    assert_eq!(ctx.client.download(&remote_path).unwrap().as_ref(), b"second");
}

#[test]
fn download_missing_object() {
    let ctx = TestContext::new();
    let bucket_name = ctx.create_bucket_helper();

    let err = ctx
        .client
        .download(&format!("/{bucket_name}/{}", rand_object_name()))
        .unwrap_err();
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.error_response().unwrap().code, "NoSuchKey");
}

#[test]
fn upload_to_missing_bucket() {
    let ctx = TestContext::new();
    let err = ctx
        .client
        .upload_from_bytes("/no-such-bucket/object", b"data")
        .unwrap_err();
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.error_response().unwrap().code, "NoSuchBucket");
}
