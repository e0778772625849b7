/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::path::PathBuf;

use aws_sdk_s3::error::DisplayErrorContext;
use clap::Parser;
use s3_search_fetch::operation::search_fetch::SearchFetchOutput;
use s3_search_fetch::types::MatchedObject;

const DEFAULT_BUCKET: &str = "dbm-cf-2-web";

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "s3-search-fetch")]
#[command(about = "Searches an S3 bucket for keys containing a term and downloads the matches.")]
struct Args {
    /// Substring to look for in object keys (case-insensitive)
    #[arg(required = true)]
    search_term: String,

    /// S3 bucket to search
    #[arg(long, default_value = DEFAULT_BUCKET)]
    bucket: String,

    /// Directory to download matching objects into (defaults to the system temp directory)
    #[arg(long)]
    download_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // missing/invalid arguments exit 1; every other outcome exits 0
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            let code = match err.kind() {
                clap::error::ErrorKind::DisplayHelp => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let download_dir = args
        .download_dir
        .clone()
        .unwrap_or_else(std::env::temp_dir);

    println!("S3 File Downloader");
    println!("Bucket: {}", args.bucket);
    println!("Search term: {}", args.search_term);
    println!("Download directory: {}", download_dir.display());
    println!("{}", "-".repeat(50));

    let config = s3_search_fetch::from_env().load().await;
    let client = s3_search_fetch::Client::new(config);

    println!(
        "Searching for files containing '{}' in bucket '{}'...",
        args.search_term, args.bucket
    );

    let result = client
        .search_fetch()
        .bucket(&args.bucket)
        .search_term(&args.search_term)
        .download_dir(&download_dir)
        .send()
        .await;

    let output = match result {
        Ok(output) => output,
        Err(err) => {
            println!("Error accessing S3: {}", DisplayErrorContext(&err));
            println!("\nNo files were downloaded");
            return;
        }
    };

    report(&args.search_term, &output);
}

/// Print the match list and per-item download outcomes
fn report(search_term: &str, output: &SearchFetchOutput) {
    if output.objects_matched().is_empty() {
        println!("No files found matching '{search_term}'");
        println!("\nNo files were downloaded");
        return;
    }

    println!("\nFound {} matching file(s):", output.objects_matched().len());
    for (i, matched) in output.objects_matched().iter().enumerate() {
        println!("{}. {}", i + 1, describe_match(matched));
    }

    for failure in output.failed_transfers() {
        println!(
            "Failed to download '{}': {}",
            failure.key(),
            DisplayErrorContext(failure.error())
        );
    }

    if output.downloaded().is_empty() {
        println!("\nNo files were downloaded");
    } else {
        println!(
            "\nSuccessfully downloaded {} file(s):",
            output.downloaded().len()
        );
        for file in output.downloaded() {
            println!("  - {}", file.local_path().display());
        }
    }
}

fn describe_match(matched: &MatchedObject) -> String {
    match matched.last_modified() {
        Some(modified) => format!(
            "{} ({} bytes, modified: {})",
            matched.key(),
            matched.size(),
            modified
        ),
        None => format!("{} ({} bytes)", matched.key(), matched.size()),
    }
}
