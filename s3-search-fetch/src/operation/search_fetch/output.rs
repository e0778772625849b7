/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::{DownloadedFile, FailedDownload, MatchedObject};

/// Output type for searching a bucket and fetching the matching objects
#[non_exhaustive]
#[derive(Debug)]
pub struct SearchFetchOutput {
    /// Every object whose key matched the search term, in listing order
    pub objects_matched: Vec<MatchedObject>,

    /// The matches that were successfully written to disk, in listing order
    pub downloaded: Vec<DownloadedFile>,

    /// A list of failed object downloads
    pub failed_transfers: Option<Vec<FailedDownload>>,
}

impl SearchFetchOutput {
    /// Creates a new builder-style object to manufacture [`SearchFetchOutput`](crate::operation::search_fetch::SearchFetchOutput).
    pub fn builder() -> SearchFetchOutputBuilder {
        SearchFetchOutputBuilder::default()
    }

    /// Every object whose key matched the search term, in listing order
    pub fn objects_matched(&self) -> &[MatchedObject] {
        &self.objects_matched
    }

    /// The matches that were successfully written to disk, in listing order
    pub fn downloaded(&self) -> &[DownloadedFile] {
        &self.downloaded
    }

    /// A slice of failed object downloads
    ///
    /// If no value was sent for this field, a default will be set. If you want to determine if no value was
    /// set, use `.failed_transfers.is_none()`
    pub fn failed_transfers(&self) -> &[FailedDownload] {
        self.failed_transfers.as_deref().unwrap_or_default()
    }
}

/// A builder for [`SearchFetchOutput`](crate::operation::search_fetch::SearchFetchOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct SearchFetchOutputBuilder {
    pub(crate) objects_matched: Vec<MatchedObject>,
    pub(crate) downloaded: Vec<DownloadedFile>,
    pub(crate) failed_transfers: Option<Vec<FailedDownload>>,
}

impl SearchFetchOutputBuilder {
    /// Append a matched object.
    ///
    /// To override the contents of this collection use
    /// [`set_objects_matched`](Self::set_objects_matched)
    pub fn objects_matched(mut self, input: MatchedObject) -> Self {
        self.objects_matched.push(input);
        self
    }

    /// Every object whose key matched the search term
    pub fn set_objects_matched(mut self, input: Vec<MatchedObject>) -> Self {
        self.objects_matched = input;
        self
    }

    /// Every object whose key matched the search term
    pub fn get_objects_matched(&self) -> &Vec<MatchedObject> {
        &self.objects_matched
    }

    /// Append a successfully downloaded file.
    ///
    /// To override the contents of this collection use
    /// [`set_downloaded`](Self::set_downloaded)
    pub fn downloaded(mut self, input: DownloadedFile) -> Self {
        self.downloaded.push(input);
        self
    }

    /// The matches that were successfully written to disk
    pub fn set_downloaded(mut self, input: Vec<DownloadedFile>) -> Self {
        self.downloaded = input;
        self
    }

    /// The matches that were successfully written to disk
    pub fn get_downloaded(&self) -> &Vec<DownloadedFile> {
        &self.downloaded
    }

    /// Append a failed download.
    ///
    /// To override the contents of this collection use
    /// [`set_failed_transfers`](Self::set_failed_transfers)
    pub fn failed_transfers(mut self, input: FailedDownload) -> Self {
        self.failed_transfers
            .get_or_insert_with(Vec::new)
            .push(input);
        self
    }

    /// A list of failed object downloads
    pub fn set_failed_transfers(mut self, input: Option<Vec<FailedDownload>>) -> Self {
        self.failed_transfers = input;
        self
    }

    /// A list of failed object downloads
    pub fn get_failed_transfers(&self) -> &Option<Vec<FailedDownload>> {
        &self.failed_transfers
    }

    /// Consume the builder and return the output
    pub fn build(self) -> SearchFetchOutput {
        SearchFetchOutput {
            objects_matched: self.objects_matched,
            downloaded: self.downloaded,
            failed_transfers: self.failed_transfers,
        }
    }
}
