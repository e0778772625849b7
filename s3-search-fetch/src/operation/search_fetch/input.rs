/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

use std::path::{Path, PathBuf};

/// Input type for searching a bucket and fetching the matching objects
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct SearchFetchInput {
    /// The bucket name to search
    pub bucket: Option<String>,

    /// Substring that object keys must contain (compared case-insensitively)
    pub search_term: Option<String>,

    /// The directory matching objects are downloaded into
    pub download_dir: Option<PathBuf>,
}

impl SearchFetchInput {
    /// Creates a new builder-style object to manufacture [`SearchFetchInput`](crate::operation::search_fetch::SearchFetchInput).
    pub fn builder() -> SearchFetchInputBuilder {
        SearchFetchInputBuilder::default()
    }

    /// The bucket name to search
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// Substring that object keys must contain (compared case-insensitively)
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref()
    }

    /// The directory matching objects are downloaded into
    pub fn download_dir(&self) -> Option<&Path> {
        self.download_dir.as_deref()
    }
}

/// A builder for [`SearchFetchInput`](crate::operation::search_fetch::SearchFetchInput).
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct SearchFetchInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) search_term: Option<String>,
    pub(crate) download_dir: Option<PathBuf>,
}

impl SearchFetchInputBuilder {
    /// Set the bucket name to search.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set the bucket name to search.
    ///
    /// NOTE: A bucket name is required.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket name to search
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Set the substring that object keys must contain.
    ///
    /// NOTE: A non-empty search term is required.
    pub fn search_term(mut self, input: impl Into<String>) -> Self {
        self.search_term = Some(input.into());
        self
    }

    /// Set the substring that object keys must contain.
    ///
    /// NOTE: A non-empty search term is required.
    pub fn set_search_term(mut self, input: Option<String>) -> Self {
        self.search_term = input;
        self
    }

    /// The substring that object keys must contain
    pub fn get_search_term(&self) -> &Option<String> {
        &self.search_term
    }

    /// Set the directory matching objects are downloaded into.
    ///
    /// The directory is created (recursively) if at least one object matches
    /// and it does not already exist.
    ///
    /// NOTE: A download directory is required.
    pub fn download_dir(mut self, input: impl Into<PathBuf>) -> Self {
        self.download_dir = Some(input.into());
        self
    }

    /// Set the directory matching objects are downloaded into.
    ///
    /// NOTE: A download directory is required.
    pub fn set_download_dir(mut self, input: Option<PathBuf>) -> Self {
        self.download_dir = input;
        self
    }

    /// The directory matching objects are downloaded into
    pub fn get_download_dir(&self) -> &Option<PathBuf> {
        &self.download_dir
    }

    /// Consumes the builder and constructs a [`SearchFetchInput`](crate::operation::search_fetch::SearchFetchInput).
    pub fn build(self) -> Result<SearchFetchInput, BuildError> {
        if self.bucket.is_none() {
            return Err(BuildError::missing_field("bucket", "A bucket is required"));
        }

        match &self.search_term {
            None => {
                return Err(BuildError::missing_field(
                    "search_term",
                    "A search term is required",
                ))
            }
            Some(term) if term.is_empty() => {
                return Err(BuildError::invalid_field(
                    "search_term",
                    "The search term must be non-empty",
                ))
            }
            Some(_) => {}
        }

        if self.download_dir.is_none() {
            return Err(BuildError::missing_field(
                "download_dir",
                "A download directory is required",
            ));
        }

        Result::Ok(SearchFetchInput {
            bucket: self.bucket,
            search_term: self.search_term,
            download_dir: self.download_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::SearchFetchInput;

    #[test]
    fn test_no_bucket_error() {
        let err = SearchFetchInput::builder()
            .search_term("report")
            .download_dir("/tmp/test")
            .build()
            .unwrap_err();

        let err_string = err.to_string();
        assert!(err_string.contains("A bucket is required"));
    }

    #[test]
    fn test_no_search_term_error() {
        let err = SearchFetchInput::builder()
            .bucket("test-bucket")
            .download_dir("/tmp/test")
            .build()
            .unwrap_err();

        let err_string = err.to_string();
        assert!(err_string.contains("A search term is required"));
    }

    #[test]
    fn test_empty_search_term_error() {
        let err = SearchFetchInput::builder()
            .bucket("test-bucket")
            .search_term("")
            .download_dir("/tmp/test")
            .build()
            .unwrap_err();

        let err_string = err.to_string();
        assert!(err_string.contains("The search term must be non-empty"));
    }

    #[test]
    fn test_no_download_dir_error() {
        let err = SearchFetchInput::builder()
            .bucket("test-bucket")
            .search_term("report")
            .build()
            .unwrap_err();

        let err_string = err.to_string();
        assert!(err_string.contains("A download directory is required"));
    }
}
