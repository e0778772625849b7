/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error;
use std::{path::PathBuf, sync::Arc};

use super::{SearchFetchInputBuilder, SearchFetchOutput};

/// Fluent builder for constructing a search-and-fetch operation
#[derive(Debug)]
pub struct SearchFetchFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: SearchFetchInputBuilder,
}

impl SearchFetchFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Initiate the search and fetch every matching object sequentially.
    pub async fn send(self) -> Result<SearchFetchOutput, error::Error> {
        let input = self.inner.build()?;
        crate::operation::search_fetch::SearchFetch::orchestrate(self.handle, input).await
    }

    /// Set the bucket name to search.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the bucket name to search.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket name to search
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Set the substring that object keys must contain (compared case-insensitively).
    pub fn search_term(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.search_term(input);
        self
    }

    /// Set the substring that object keys must contain (compared case-insensitively).
    pub fn set_search_term(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_search_term(input);
        self
    }

    /// The substring that object keys must contain
    pub fn get_search_term(&self) -> &Option<String> {
        self.inner.get_search_term()
    }

    /// Set the directory matching objects are downloaded into.
    pub fn download_dir(mut self, input: impl Into<PathBuf>) -> Self {
        self.inner = self.inner.download_dir(input);
        self
    }

    /// Set the directory matching objects are downloaded into.
    pub fn set_download_dir(mut self, input: Option<PathBuf>) -> Self {
        self.inner = self.inner.set_download_dir(input);
        self
    }

    /// The directory matching objects are downloaded into
    pub fn get_download_dir(&self) -> &Option<PathBuf> {
        self.inner.get_download_dir()
    }
}

impl crate::operation::search_fetch::input::SearchFetchInputBuilder {
    /// Initiate a search-and-fetch operation with this input using the given client.
    pub async fn send_with(
        self,
        client: &crate::Client,
    ) -> Result<SearchFetchOutput, error::Error> {
        let mut fluent_builder = client.search_fetch();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
