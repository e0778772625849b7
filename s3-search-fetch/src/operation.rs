/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

/// Types for the search-and-fetch operation
pub mod search_fetch;

/// Separator used between the segments of an object key
pub(crate) const KEY_SEPARATOR: &str = "/";

/// Container for maintaining context required to carry out a single operation.
///
/// `State` is whatever additional operation specific state is required for the operation.
#[derive(Debug)]
pub(crate) struct OperationContext<State> {
    handle: Arc<crate::client::Handle>,
    state: Arc<State>,
}

impl<State> OperationContext<State> {
    /// The S3 client to use for SDK operations
    pub(crate) fn client(&self) -> &aws_sdk_s3::Client {
        self.handle.config.client()
    }
}

impl<State> Clone for OperationContext<State> {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle.clone(),
            state: self.state.clone(),
        }
    }
}
