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

//! Credential providers

use crate::s3::error::Error;
use std::fmt;

pub const ENV_ACCESS_KEY: &str = "MINIO_ACCESS_KEY";
pub const ENV_SECRET_KEY: &str = "MINIO_SECRET_KEY";

#[derive(Clone, PartialEq, Eq)]
/// Credentials contain access key and secret key
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
}

impl Credentials {
    pub fn new(access_key: &str, secret_key: &str) -> Credentials {
        Credentials {
            access_key: access_key.to_string(),
            secret_key: secret_key.to_string(),
        }
    }

    /// Reads credentials from `MINIO_ACCESS_KEY` and `MINIO_SECRET_KEY`.
    pub fn from_env() -> Result<Credentials, Error> {
        let access_key =
            std::env::var(ENV_ACCESS_KEY).map_err(|_| Error::MissingEnv(ENV_ACCESS_KEY.into()))?;
        let secret_key =
            std::env::var(ENV_SECRET_KEY).map_err(|_| Error::MissingEnv(ENV_SECRET_KEY.into()))?;
        Ok(Credentials::new(&access_key, &secret_key))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"*****")
            .finish()
    }
}

/// Provider trait to fetch credentials
pub trait Provider: fmt::Debug {
    fn fetch(&self) -> Credentials;
}

#[derive(Clone, Debug)]
/// Static credential provider
pub struct StaticProvider {
    creds: Credentials,
}

impl StaticProvider {
    /// Returns a static provider with given access key and secret key
    ///
    /// # Examples
    ///
    /// ```
    /// use minio_lite::s3::creds::StaticProvider;
    /// let provider = StaticProvider::new("minioadmin", "minio123");
    /// ```
    pub fn new(access_key: &str, secret_key: &str) -> StaticProvider {
        StaticProvider {
            creds: Credentials::new(access_key, secret_key),
        }
    }
}

impl Provider for StaticProvider {
    fn fetch(&self) -> Credentials {
        self.creds.clone()
    }
}

#[derive(Clone, Debug)]
/// Credential provider backed by the `MINIO_ACCESS_KEY` and `MINIO_SECRET_KEY`
/// environment variables, read once at construction.
pub struct EnvProvider {
    creds: Credentials,
}

impl EnvProvider {
    pub fn new() -> Result<EnvProvider, Error> {
        Ok(EnvProvider {
            creds: Credentials::from_env()?,
        })
    }
}

impl Provider for EnvProvider {
    fn fetch(&self) -> Credentials {
        self.creds.clone()
    }
}
