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

use crate::mock_server::MockS3Server;
use crate::utils::rand_bucket_name;
use minio_lite::s3::creds::StaticProvider;
use minio_lite::s3::http::BaseUrl;
use minio_lite::s3::{Client, ClientBuilder};
use rand::distr::{Alphanumeric, SampleString};

const DEFAULT_ACCESS_KEY: &str = "minioadmin";

pub struct TestContext {
    pub client: Client,
    pub server: MockS3Server,
    pub base_url: BaseUrl,
    pub access_key: String,
    pub secret_key: String,
}

impl TestContext {
    /// Starts a fresh mock server with a random secret key and a client for it.
    pub fn new() -> Self {
        let access_key = DEFAULT_ACCESS_KEY.to_string();
        let secret_key = Alphanumeric.sample_string(&mut rand::rng(), 40);

        let server = MockS3Server::start(&access_key, &secret_key)
            .unwrap_or_else(|e| panic!("unable to start mock S3 server: {e}"));
        let base_url = server.base_url();
        let client = ClientBuilder::new(base_url.clone())
            .provider(StaticProvider::new(&access_key, &secret_key))
            .timeout(30)
            .build()
            .unwrap();

        Self {
            client,
            server,
            base_url,
            access_key,
            secret_key,
        }
    }

    /// Returns a client for the same server using other credentials.
    pub fn client_with_credentials(&self, access_key: &str, secret_key: &str) -> Client {
        Client::new(
            self.base_url.clone(),
            StaticProvider::new(access_key, secret_key),
        )
        .unwrap()
    }

    /// Creates a bucket with a random name and returns the name.
    pub fn create_bucket_helper(&self) -> String {
        let bucket_name = rand_bucket_name();
        self.client.make_bucket(&bucket_name).unwrap();
        bucket_name
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
