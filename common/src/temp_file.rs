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

use crate::utils::rand_object_name;
use std::path::{Path, PathBuf};

/// Local file in the temp directory that is removed when dropped
pub struct TempFile {
    path: PathBuf,
}

impl TempFile {
    pub fn with_content(content: &[u8]) -> Self {
        let path = std::env::temp_dir().join(format!("minio-lite-{}", rand_object_name()));
        std::fs::write(&path, content)
            .unwrap_or_else(|e| panic!("unable to write {}: {e}", path.display()));
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            eprintln!("Error removing file '{}':\n{e}", self.path.display());
        }
    }
}
