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

use criterion::{Criterion, criterion_group, criterion_main};
use http::Method;
use minio_lite::s3::response::HttpResponse;
use minio_lite::s3::signer::build_auth_header;
use minio_lite::s3::xml::extract_buckets;
use std::hint::black_box;

fn bench_build_auth_header(c: &mut Criterion) {
    c.bench_function("build_auth_header", |b| {
        b.iter(|| {
            build_auth_header(
                black_box("zuf+tfteSlswRu7BJ86wekitnifILbZam1KYY3TG"),
                black_box("Q3AM3UQ867SPQQA43P2F"),
                &Method::PUT,
                "application/octet-stream",
                "Thu, 08 Jul 2021 01:02:03 +0000",
                "/test-bucket/echo.txt",
            )
        })
    });
}

fn bench_parse_response(c: &mut Criterion) {
    let mut raw = b"HTTP/1.1 200 OK\r\nServer: MinIO\r\nContent-Type: application/octet-stream\r\nContent-Length: 65536\r\n\r\n".to_vec();
    raw.extend(std::iter::repeat_n(b'x', 64 * 1024));
    let raw = bytes::Bytes::from(raw);

    c.bench_function("HttpResponse::parse 64KiB", |b| {
        b.iter(|| HttpResponse::parse(200, black_box(raw.clone())))
    });
}

fn bench_extract_buckets(c: &mut Criterion) {
    let mut xml = String::from("<ListAllMyBucketsResult><Buckets>");
    for i in 0..100 {
        xml.push_str(&format!(
            "<Bucket><Name>bucket-{i}</Name><CreationDate>2021-07-28T09:56:02.000Z</CreationDate></Bucket>"
        ));
    }
    xml.push_str("</Buckets></ListAllMyBucketsResult>");

    c.bench_function("extract_buckets 100", |b| {
        b.iter(|| extract_buckets(black_box(&xml)))
    });
}

criterion_group!(
    benches,
    bench_build_auth_header,
    bench_parse_response,
    bench_extract_buckets
);
criterion_main!(benches);
