/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::operation::search_fetch::builders::SearchFetchFluentBuilder;
use crate::Config;

/// Search-and-fetch client.
///
/// Cheap to clone; all clones share the same configuration and underlying S3
/// client.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations.
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: Config,
}

impl Client {
    /// Create a new client with the given config.
    pub fn new(config: Config) -> Self {
        let handle = Arc::new(Handle { config });
        Self { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Search a bucket's keys for a substring and download every match.
    ///
    /// Constructs a fluent builder for the
    /// [`SearchFetch`](crate::operation::search_fetch) operation.
    pub fn search_fetch(&self) -> SearchFetchFluentBuilder {
        SearchFetchFluentBuilder::new(self.handle.clone())
    }
}
