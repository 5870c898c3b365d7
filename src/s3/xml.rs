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

//! Scanner for the list-buckets response body
//!
//! The server answers with a flat document:
//!
//! ```xml
//! <ListAllMyBucketsResult>
//!   <Buckets>
//!     <Bucket><Name>alpha</Name><CreationDate>...</CreationDate></Bucket>
//!   </Buckets>
//! </ListAllMyBucketsResult>
//! ```
//!
//! This is a tag scanner, not an XML parser: nested `<Bucket>` elements,
//! attributes on the scanned tags, CDATA and entities are not interpreted.

const BUCKET_BEGIN: &str = "<Bucket>";
const BUCKET_END: &str = "</Bucket>";
const NAME_BEGIN: &str = "<Name>";
const NAME_END: &str = "</Name>";

/// Returns the `<Name>` text of every `<Bucket>` element in document order.
///
/// A `<Bucket>` without a closing `</Bucket>` ends the scan. A bucket span
/// without a `<Name>...</Name>` pair yields an empty name.
pub fn extract_buckets(xml: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut pos = 0;

    while let Some(begin) = find_from(xml, BUCKET_BEGIN, pos) {
        let Some(end) = find_from(xml, BUCKET_END, begin + BUCKET_BEGIN.len()) else {
            break;
        };

        names.push(extract_name(xml, begin, end).to_string());
        pos = end + BUCKET_END.len();
    }

    names
}

/// Returns the `<Name>` text between `begin` and `end`; the closing tag may
/// lie past `end`, the opening tag may not.
fn extract_name(xml: &str, begin: usize, end: usize) -> &str {
    let start = match find_from(xml, NAME_BEGIN, begin) {
        Some(p) if p < end => p + NAME_BEGIN.len(),
        _ => return "",
    };

    match find_from(xml, NAME_END, start) {
        Some(stop) => &xml[start..stop],
        None => "",
    }
}

fn find_from(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    haystack.get(from..)?.find(needle).map(|p| p + from)
}
