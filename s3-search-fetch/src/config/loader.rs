/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::config::Builder;
use crate::Config;

/// Load search-and-fetch [`Config`] from the environment.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
}

impl ConfigLoader {
    /// Set an explicit S3 client to use instead of resolving one from the
    /// environment.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.builder = self.builder.client(client);
        self
    }

    /// Load the default configuration
    ///
    /// Credentials and region resolution are delegated entirely to the SDK's
    /// ambient configuration (environment variables, shared config files,
    /// IMDS) unless an explicit client was provided.
    pub async fn load(self) -> Config {
        let builder = if self.builder.client.is_some() {
            self.builder
        } else {
            let shared_config = aws_config::from_env().load().await;
            let s3_client = aws_sdk_s3::Client::new(&shared_config);
            self.builder.client(s3_client)
        };
        builder.build()
    }
}
