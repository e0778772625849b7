/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Input type for searching a bucket and fetching the matching objects
pub use input::{SearchFetchInput, SearchFetchInputBuilder};
mod output;
/// Output type for searching a bucket and fetching the matching objects
pub use output::{SearchFetchOutput, SearchFetchOutputBuilder};

mod list_objects;
mod worker;

use std::sync::Arc;

use tokio::fs;

use crate::error;
use crate::operation::OperationContext;
use crate::types::{DownloadedFile, FailedDownload};

/// Operation struct for searching a bucket and fetching the matching objects
#[derive(Clone, Default, Debug)]
pub(crate) struct SearchFetch;

impl SearchFetch {
    /// Execute a single `SearchFetch` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: SearchFetchInput,
    ) -> Result<SearchFetchOutput, error::Error> {
        let ctx = SearchFetchContext::new(handle, input);

        let matches = worker::discover_matches(&ctx).await?;
        tracing::debug!("collected {} matching object(s)", matches.len());

        if matches.is_empty() {
            return Ok(SearchFetchOutput::builder().build());
        }

        let download_dir = ctx.state.input.download_dir().expect("download dir set");
        fs::create_dir_all(download_dir).await?;

        let mut output = SearchFetchOutput::builder();
        for matched in &matches {
            match worker::download_single_obj(&ctx, matched).await {
                Ok(local_path) => {
                    tracing::debug!("downloaded key {:?} to {:?}", matched.key, local_path);
                    output = output.downloaded(DownloadedFile {
                        key: matched.key.clone(),
                        local_path,
                    });
                }
                Err(err) => {
                    tracing::warn!("failed to download key {:?}: {}", matched.key, err);
                    output = output.failed_transfers(FailedDownload {
                        key: matched.key.clone(),
                        error: err,
                    });
                }
            }
        }

        Ok(output.set_objects_matched(matches).build())
    }
}

pub(crate) type SearchFetchContext = OperationContext<SearchFetchState>;

#[derive(Debug)]
pub(crate) struct SearchFetchState {
    input: SearchFetchInput,
}

impl SearchFetchContext {
    pub(crate) fn new(handle: Arc<crate::client::Handle>, input: SearchFetchInput) -> Self {
        let state = SearchFetchState { input };
        OperationContext {
            handle,
            state: Arc::new(state),
        }
    }
}
