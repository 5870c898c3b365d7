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

use super::xml::extract_buckets;

#[test]
fn test_extract_buckets_in_document_order() {
    let xml = "<ListAllMyBucketsResult><Buckets><Bucket><Name>alpha</Name></Bucket><Bucket><Name>beta</Name></Bucket></Buckets></ListAllMyBucketsResult>";
    assert_eq!(extract_buckets(xml), vec!["alpha", "beta"]);
}

#[test]
fn test_extract_buckets_server_response() {
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListAllMyBucketsResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/"><Owner><ID>02d6176db174dc93cb1b899f7c6078f08654445fe8cf1b6ce98d8855f66bdbf4</ID><DisplayName>minio</DisplayName></Owner><Buckets><Bucket><Name>test-bucket</Name><CreationDate>2021-07-28T09:56:02.000Z</CreationDate></Bucket><Bucket><Name>wish</Name><CreationDate>2021-07-28T10:01:13.000Z</CreationDate></Bucket></Buckets></ListAllMyBucketsResult>"#;
    assert_eq!(extract_buckets(xml), vec!["test-bucket", "wish"]);
}

#[test]
fn test_extract_buckets_empty_list() {
    assert!(extract_buckets("<ListAllMyBucketsResult><Buckets></Buckets></ListAllMyBucketsResult>").is_empty());
    assert!(extract_buckets("").is_empty());
}

#[test]
fn test_extract_buckets_does_not_match_buckets_tag() {
    assert!(extract_buckets("<Buckets><Name>x</Name></Buckets>").is_empty());
}

#[test]
fn test_extract_buckets_unclosed_bucket_stops_scan() {
    let xml = "<Bucket><Name>a</Name></Bucket><Bucket><Name>b</Name>";
    assert_eq!(extract_buckets(xml), vec!["a"]);
}

#[test]
fn test_extract_buckets_missing_name_yields_empty_entry() {
    let xml = "<Bucket><CreationDate>x</CreationDate></Bucket><Bucket><Name>b</Name></Bucket>";
    assert_eq!(extract_buckets(xml), vec!["", "b"]);
}

#[test]
fn test_extract_buckets_name_outside_span_is_ignored() {
    let xml = "<Bucket></Bucket><Name>owner</Name>";
    assert_eq!(extract_buckets(xml), vec![""]);
}

#[test]
fn test_extract_buckets_empty_name() {
    assert_eq!(extract_buckets("<Bucket><Name></Name></Bucket>"), vec![""]);
}

#[test]
fn test_extract_buckets_text_is_not_unescaped() {
    let xml = "<Bucket><Name>a&amp;b</Name></Bucket>";
    assert_eq!(extract_buckets(xml), vec!["a&amp;b"]);
}

#[test]
fn test_extract_buckets_handles_multibyte_text() {
    let xml = "<Bucket><Name>桶-1</Name></Bucket><Bucket><Name>ß</Name></Bucket>";
    assert_eq!(extract_buckets(xml), vec!["桶-1", "ß"]);
}
