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

//! Various utility and helper functions

use base64::engine::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha1::Sha1;
use xmltree::Element;

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

type HmacSha1 = Hmac<Sha1>;

/// Length in bytes of an HMAC-SHA1 digest
pub const HMAC_SHA1_LEN: usize = 20;

/// Encodes data using base64 algorithm (standard alphabet, `=` padded)
pub fn b64encode<T: AsRef<[u8]>>(input: T) -> String {
    BASE64.encode(input)
}

/// Returns HMAC-SHA1 digest for given key and data
pub fn hmac_sha1(key: &[u8], data: &[u8]) -> [u8; HMAC_SHA1_LEN] {
    let mut hasher = HmacSha1::new_from_slice(key).expect("HMAC can take key of any size");
    hasher.update(data);
    let mut digest = [0u8; HMAC_SHA1_LEN];
    digest.copy_from_slice(&hasher.finalize().into_bytes());
    digest
}

/// Gets current UTC time
pub fn utc_now() -> UtcTime {
    chrono::offset::Utc::now()
}

/// Gets signer date value of given time, e.g. `Tue, 27 Mar 2007 19:36:42 +0000`.
///
/// Day and month names are always English, independent of the process locale.
/// The same string must be sent in the `Date` header and used in the string-to-sign.
pub fn to_signer_date(time: UtcTime) -> String {
    time.format("%a, %d %b %Y %H:%M:%S %z").to_string()
}

/// Gets default text value of given XML element for given tag.
pub fn get_default_text(element: &Element, tag: &str) -> String {
    element.get_child(tag).map_or(String::new(), |v| {
        v.get_text().unwrap_or_default().to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_b64encode_rfc4648_vectors() {
        assert_eq!(b64encode(""), "");
        assert_eq!(b64encode("f"), "Zg==");
        assert_eq!(b64encode("fo"), "Zm8=");
        assert_eq!(b64encode("foo"), "Zm9v");
        assert_eq!(b64encode("foob"), "Zm9vYg==");
        assert_eq!(b64encode("fooba"), "Zm9vYmE=");
        assert_eq!(b64encode("foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_b64encode_uses_plus_and_slash() {
        assert_eq!(b64encode([0xfb, 0xff, 0xbf]), "+/+/");
    }

    quickcheck! {
        fn prop_b64encode_length(data: Vec<u8>) -> bool {
            b64encode(&data).len() == data.len().div_ceil(3) * 4
        }

        fn prop_b64encode_alphabet(data: Vec<u8>) -> bool {
            let encoded = b64encode(&data);
            let body = encoded.trim_end_matches('=');
            encoded.len() - body.len() <= 2
                && body.chars().all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/')
        }
    }

    #[test]
    fn test_hmac_sha1_rfc2202_case_2() {
        let digest = hmac_sha1(b"Jefe", b"what do ya want for nothing?");
        let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
        assert_eq!(hex, "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79");
    }

    #[test]
    fn test_hmac_sha1_empty_inputs() {
        let digest = hmac_sha1(b"", b"");
        let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
        assert_eq!(hex, "fbdb1d1b18aa6c08324b7d64b71fb76370690e1d");
    }

    #[test]
    fn test_to_signer_date() {
        let time = Utc.with_ymd_and_hms(2007, 3, 27, 19, 36, 42).unwrap();
        assert_eq!(to_signer_date(time), "Tue, 27 Mar 2007 19:36:42 +0000");

        let time = Utc.with_ymd_and_hms(2021, 7, 8, 1, 2, 3).unwrap();
        assert_eq!(to_signer_date(time), "Thu, 08 Jul 2021 01:02:03 +0000");
    }

    #[test]
    fn test_get_default_text() {
        let root = Element::parse("<Error><Code>NoSuchKey</Code><Empty/></Error>".as_bytes())
            .unwrap();
        assert_eq!(get_default_text(&root, "Code"), "NoSuchKey");
        assert_eq!(get_default_text(&root, "Empty"), "");
        assert_eq!(get_default_text(&root, "Missing"), "");
    }
}
