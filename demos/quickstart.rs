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

//! Lists buckets, uploads a local file and a byte buffer, and downloads both back.
//!
//! Configure with `SERVER_ENDPOINT`, `ACCESS_KEY`, `SECRET_KEY` (and optionally
//! `IGNORE_CERT_CHECK`); without them the public play server is used.
//! Set `RUST_LOG=info` to see the output.

use minio_lite::s3::creds::StaticProvider;
use minio_lite::s3::http::BaseUrl;
use minio_lite::s3::{Client, ClientBuilder};
use std::path::Path;

fn create_client() -> Result<Client, Box<dyn std::error::Error + Send + Sync>> {
    if let Ok(builder) = ClientBuilder::from_env() {
        return Ok(builder.build()?);
    }

    let base_url = "https://play.min.io".parse::<BaseUrl>()?;
    log::info!("Trying to connect to MinIO at: `{base_url}`");

    let static_provider = StaticProvider::new(
        "Q3AM3UQ867SPQQA43P2F",
        "zuf+tfteSlswRu7BJ86wekitnifILbZam1KYY3TG",
    );
    Ok(ClientBuilder::new(base_url).provider(static_provider).build()?)
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init(); // Note: set environment variable RUST_LOG="INFO" to log info and higher
    let client = create_client()?;
    let bucket_name = "test-bucket";

    log::info!("=========================== list buckets ===========================");
    let buckets = client.list_buckets()?;
    log::info!("total is {}", buckets.len());
    for (i, name) in buckets.iter().enumerate() {
        log::info!("bucket[{i}] = {name}");
    }

    if !buckets.iter().any(|b| b == bucket_name) {
        client.make_bucket(bucket_name)?;
        log::info!("created bucket '{bucket_name}'");
    }

    log::info!("=========================== upload file ===========================");
    let local_file = Path::new("echo.txt");
    if !local_file.exists() {
        std::fs::write(local_file, "hello from minio-lite\n")?;
    }
    client.upload_from_file("/test-bucket/echo.txt", local_file)?;
    log::info!("upload {} success", local_file.display());

    log::info!("=========================== download ===========================");
    let data = client.download("/test-bucket/echo.txt")?;
    log::info!("download echo.txt, content is: {}", String::from_utf8_lossy(&data));

    log::info!("=========================== upload data ===========================");
    let file_data = std::fs::read(local_file)?;
    client.upload_from_bytes("/test-bucket/echo-filedata.txt", &file_data)?;
    log::info!("upload file data success, size = {}", file_data.len());

    log::info!("=========================== download ===========================");
    let data = client.download("/test-bucket/echo-filedata.txt")?;
    log::info!(
        "download echo-filedata.txt, content is: {}",
        String::from_utf8_lossy(&data)
    );
    Ok(())
}
