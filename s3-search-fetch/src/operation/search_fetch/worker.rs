/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::path::{Path, PathBuf};

use path_clean::PathClean;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use unicode_normalization::UnicodeNormalization;

use crate::error::{self, ErrorKind};
use crate::operation::KEY_SEPARATOR;
use crate::types::MatchedObject;

use super::list_objects::ListObjectsPaginator;
use super::SearchFetchContext;

/// Enumerate the bucket and collect every object whose key contains the
/// search term, in listing order.
///
/// A failed listing page aborts the whole discovery; no partial listing is
/// acted upon.
pub(super) async fn discover_matches(
    ctx: &SearchFetchContext,
) -> Result<Vec<MatchedObject>, error::Error> {
    let term = ctx
        .state
        .input
        .search_term()
        .expect("search term set")
        .to_lowercase();

    let mut paginator = ListObjectsPaginator::new(ctx.clone());
    let mut matches = Vec::new();

    while let Some(page) = paginator.next_page().await {
        let page = page.map_err(error::listing_failed)?;

        for object in page.contents() {
            let Some(key) = object.key() else {
                tracing::debug!("skipping object with no key: {:?}", object);
                continue;
            };

            if !key_matches(key, &term) {
                continue;
            }

            matches.push(MatchedObject {
                key: key.to_owned(),
                size: object.size().unwrap_or_default().try_into().unwrap_or_default(),
                last_modified: object.last_modified().cloned(),
            });
        }
    }

    Ok(matches)
}

/// Fetch a single matched object into the download directory.
///
/// Returns the local path the object contents were written to. An existing
/// file at that path is overwritten.
pub(super) async fn download_single_obj(
    ctx: &SearchFetchContext,
    matched: &MatchedObject,
) -> Result<PathBuf, error::Error> {
    let input = &ctx.state.input;
    let bucket = input.bucket().expect("bucket set");
    let download_dir = input.download_dir().expect("download dir set");

    let local_path = local_obj_path(download_dir, matched.key())?;

    let resp = ctx
        .client()
        .get_object()
        .bucket(bucket)
        .key(matched.key())
        .send()
        .await
        .map_err(error::download_failed)?;

    let parent_dir = local_path.parent().expect("valid parent dir for filename");
    fs::create_dir_all(parent_dir).await?;
    let mut dest = fs::File::create(&local_path).await?;

    let mut body = resp.body;
    while let Some(chunk) = body.try_next().await? {
        dest.write_all(&chunk).await?;
    }

    Ok(local_path)
}

/// Case-insensitive substring test. `term` must already be lowercased.
fn key_matches(key: &str, term: &str) -> bool {
    key.to_lowercase().contains(term)
}

/// Derive the flat local filename for a key: the final key segment, or the
/// whole key with every separator substituted by `_` when the key is
/// directory-like (ends in a separator).
fn local_filename(key: &str) -> String {
    let basename = key.rsplit(KEY_SEPARATOR).next().unwrap_or(key);
    if basename.is_empty() {
        key.replace(KEY_SEPARATOR, "_")
    } else {
        basename.to_owned()
    }
}

/// Normalize a filename to NFKC so visually-equivalent encodings of the same
/// characters map to one canonical on-disk name.
fn normalize_filename(filename: &str) -> String {
    filename.nfkc().collect()
}

/// Resolve the on-disk path for a given S3 key
fn local_obj_path(download_dir: &Path, key: &str) -> Result<PathBuf, error::Error> {
    let filename = normalize_filename(&local_filename(key));

    let local_path = download_dir.join(filename).clean();
    validate_path(download_dir, &local_path, key)?;

    Ok(local_path)
}

fn validate_path(download_dir: &Path, local_path: &Path, key: &str) -> Result<(), error::Error> {
    // NFKC can introduce separators and dots (e.g. U+FF0F normalizes to '/'),
    // so the resolved path must not escape the download directory
    if !local_path.starts_with(download_dir) {
        let err = error::Error::new(ErrorKind::InputInvalid, format!("Unable to download key: '{key}', its filename resolves outside the download directory"));
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::operation::search_fetch::{SearchFetchContext, SearchFetchInput};

    use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
    use aws_sdk_s3::types::Object;
    use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};

    #[test]
    fn test_local_filename() {
        let tests = &[
            ("img/Screenshot (1).png", "Screenshot (1).png"),
            ("a/b/c.txt", "c.txt"),
            ("no-separator", "no-separator"),
            ("folder/sub/", "folder_sub_"),
            ("trailing/", "trailing_"),
        ];

        for (key, expected) in tests {
            assert_eq!(*expected, local_filename(key));
        }
    }

    #[test]
    fn test_normalize_filename_nfkc() {
        // combining acute accent composes with the preceding 'e'
        assert_eq!("café.txt", normalize_filename("cafe\u{301}.txt"));
        // precomposed input is untouched
        assert_eq!("café.txt", normalize_filename("café.txt"));
        // compatibility characters map to their canonical equivalents
        assert_eq!("file.txt", normalize_filename("\u{FB01}le.txt"));
        assert_eq!("Screenshot", normalize_filename("\u{FF33}creenshot"));
    }

    #[test]
    fn test_normalize_filename_idempotent() {
        let names = ["cafe\u{301}.txt", "\u{FB01}le.txt", "plain.txt"];
        for name in names {
            let once = normalize_filename(name);
            assert_eq!(once, normalize_filename(&once));
        }
    }

    #[test]
    fn test_key_matches_case_insensitive() {
        assert!(key_matches("img/Screenshot (1).png", "screenshot"));
        assert!(key_matches("IMG/REPORT.PDF", "report"));
        assert!(!key_matches("docs/readme.txt", "screenshot"));
    }

    #[test]
    fn test_local_obj_path() {
        let download_dir = PathBuf::from("/tmp/downloads");

        let path = local_obj_path(&download_dir, "img/Screenshot (1).png").unwrap();
        assert_eq!(PathBuf::from("/tmp/downloads/Screenshot (1).png"), path);

        let path = local_obj_path(&download_dir, "folder/sub/").unwrap();
        assert_eq!(PathBuf::from("/tmp/downloads/folder_sub_"), path);
    }

    /// A filename that normalizes to a relative traversal must be rejected
    #[test]
    fn test_local_obj_path_rejects_escape() {
        let download_dir = PathBuf::from("/tmp/downloads");

        // U+FF0E/U+FF0F normalize to '.' and '/' under NFKC
        let err = local_obj_path(&download_dir, "\u{FF0E}\u{FF0E}\u{FF0F}x").unwrap_err();
        assert_eq!(&ErrorKind::InputInvalid, err.kind());

        let msg = format!("{}", aws_sdk_s3::error::DisplayErrorContext(err));
        assert!(msg.contains("resolves outside the download directory"));
    }

    #[tokio::test]
    async fn test_discover_matches_filters_and_preserves_order() {
        let list_objects_rule = mock!(aws_sdk_s3::Client::list_objects_v2).then_output(|| {
            ListObjectsV2Output::builder()
                .contents(Object::builder().key("img/Screenshot (1).png").size(10).build())
                .contents(Object::builder().key("docs/readme.txt").size(3).build())
                .contents(Object::builder().key("img/screenshot-2.PNG").size(7).build())
                .build()
        });

        let s3_client = mock_client!(aws_sdk_s3, RuleMode::MatchAny, &[&list_objects_rule]);
        let config = crate::Config::builder().client(s3_client).build();
        let client = crate::Client::new(config);

        let input = SearchFetchInput::builder()
            .bucket("test-bucket")
            .search_term("Screenshot")
            .download_dir("/tmp/test")
            .build()
            .unwrap();
        let ctx = SearchFetchContext::new(client.handle.clone(), input);

        let matches = discover_matches(&ctx).await.unwrap();

        let keys: Vec<&str> = matches.iter().map(|m| m.key()).collect();
        assert_eq!(keys, vec!["img/Screenshot (1).png", "img/screenshot-2.PNG"]);
        assert_eq!(10, matches[0].size());
        assert_eq!(7, matches[1].size());
    }
}
