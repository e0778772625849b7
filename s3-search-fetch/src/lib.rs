/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */

//! S3 Search and Fetch
//!
//! Enumerates the keys of an S3 bucket, selects the ones containing a search
//! term (case-insensitive), and downloads every match into a local directory.
//! Local filenames are the final key segment normalized to Unicode NFKC so
//! that visually-equivalent encodings map to one on-disk name.

#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

/// Error types emitted by `s3-search-fetch`
pub mod error;

/// Common types used by `s3-search-fetch`
pub mod types;

/// Client configuration
pub mod config;

/// Search-and-fetch client
pub mod client;

/// Search-and-fetch operations
pub mod operation;

pub use client::Client;
pub use config::Config;

/// Create a [`ConfigLoader`](crate::config::loader::ConfigLoader) that resolves
/// the S3 client from the ambient environment (env vars, profile, IMDS).
pub fn from_env() -> config::loader::ConfigLoader {
    config::loader::ConfigLoader::default()
}
