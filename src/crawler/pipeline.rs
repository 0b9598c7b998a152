//! Per-URL fetch/transform/save pipeline
//!
//! One invocation per frontier claim. Every failure is caught at this
//! boundary: a bad page is logged and yields zero discoveries, and nothing
//! here can abort the crawl.

use crate::crawler::fetcher::{fetch_url, FetchResult};
use crate::crawler::parser::extract_links;
use crate::crawler::rewriter::rewrite_page;
use crate::mirror::storage_path;
use crate::KagamiError;
use reqwest::Client;
use std::path::Path;
use url::Url;

/// Fetches, rewrites, and saves one page, returning its discovered links
///
/// # Per-URL Flow
///
/// 1. GET the URL (redirects followed transparently)
/// 2. Non-2xx - warn and abandon, no retry
/// 3. Non-HTML content-type - info and skip; no file, no link extraction
/// 4. HTML - rewrite the markup, ensure the parent directory exists, and
///    write the transformed copy to its storage path
/// 5. Extract same-host links from the ORIGINAL body for the frontier
///
/// Failures never propagate to the scheduler; they produce a warning and an
/// empty discovery list.
pub async fn process_page(
    client: &Client,
    page_url: &Url,
    origin_host: &str,
    mirror_root: &Path,
) -> Vec<Url> {
    match try_process(client, page_url, origin_host, mirror_root).await {
        Ok(links) => links,
        Err(e) => {
            tracing::warn!("Failed to process {}: {}", page_url, e);
            Vec::new()
        }
    }
}

async fn try_process(
    client: &Client,
    page_url: &Url,
    origin_host: &str,
    mirror_root: &Path,
) -> crate::Result<Vec<Url>> {
    match fetch_url(client, page_url).await {
        FetchResult::Html { body } => {
            let rewritten = rewrite_page(page_url, origin_host, &body);

            let path = storage_path(mirror_root, page_url);
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&path, rewritten).await?;
            tracing::debug!("Saved {} to {}", page_url, path.display());

            // Discovery runs against the original markup, not the rewritten copy
            Ok(extract_links(&body, page_url, origin_host))
        }

        FetchResult::NotHtml { content_type } => {
            tracing::info!("Skipping {} (content-type: {})", page_url, content_type);
            Ok(Vec::new())
        }

        FetchResult::HttpError { status_code } => Err(KagamiError::HttpStatus {
            url: page_url.to_string(),
            status: status_code,
        }),

        FetchResult::NetworkError { error } => Err(KagamiError::Network {
            url: page_url.to_string(),
            message: error,
        }),
    }
}
