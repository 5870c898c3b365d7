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

pub const ACCEPT: &str = "Accept";
pub const CHARSET: &str = "Charset";
pub const DATE: &str = "Date";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";

/// Content type sent with bucket requests (sic); it is part of the signature.
pub const BUCKET_CONTENT_TYPE: &str = "text/plane";
pub const OBJECT_CONTENT_TYPE: &str = "application/octet-stream";
