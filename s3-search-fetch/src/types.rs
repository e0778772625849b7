/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::{Path, PathBuf};

use aws_smithy_types::DateTime;

/// An object whose key matched the search term.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct MatchedObject {
    /// The full key of the object within the bucket
    pub key: String,

    /// The size of the object in bytes
    pub size: u64,

    /// The last-modified timestamp reported by S3
    pub last_modified: Option<DateTime>,
}

impl MatchedObject {
    /// The full key of the object within the bucket
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The size of the object in bytes
    pub fn size(&self) -> u64 {
        self.size
    }

    /// The last-modified timestamp reported by S3
    pub fn last_modified(&self) -> Option<&DateTime> {
        self.last_modified.as_ref()
    }
}

/// A matched object that was fetched to the local filesystem.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct DownloadedFile {
    /// The key the file was fetched from
    pub key: String,

    /// The local path the object contents were written to
    pub local_path: PathBuf,
}

impl DownloadedFile {
    /// The key the file was fetched from
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The local path the object contents were written to
    pub fn local_path(&self) -> &Path {
        &self.local_path
    }
}

/// A matched object that could not be fetched.
#[derive(Debug)]
#[non_exhaustive]
pub struct FailedDownload {
    /// The key of the object that failed to download
    pub key: String,

    /// The error encountered downloading the object
    pub error: crate::error::Error,
}

impl FailedDownload {
    /// The key of the object that failed to download
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The error encountered downloading the object
    pub fn error(&self) -> &crate::error::Error {
        &self.error
    }
}
