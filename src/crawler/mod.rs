//! Crawler module for fetching, rewriting, and saving pages
//!
//! This module contains the core crawl engine:
//! - HTTP fetching and response classification
//! - HTML rewriting for local serving
//! - Link extraction for frontier growth
//! - The guarded frontier/seen-set scheduler
//! - Worker-pool coordination for one crawl invocation

mod coordinator;
mod fetcher;
mod parser;
mod pipeline;
mod rewriter;
mod scheduler;

pub use coordinator::{run_crawl, Coordinator, CrawlReport};
pub use fetcher::{build_http_client, fetch_url, FetchResult};
pub use parser::extract_links;
pub use pipeline::process_page;
pub use rewriter::rewrite_page;
pub use scheduler::Scheduler;

use crate::config::Config;

/// Runs a complete crawl operation
///
/// This is the main entry point for mirroring a site. It will:
/// 1. Canonicalize the configured origin URL and seed the frontier with it
/// 2. Create the mirror root directory
/// 3. Spawn the configured number of concurrent workers
/// 4. Fetch, rewrite, and save pages until the frontier or budget runs out
///
/// # Arguments
///
/// * `config` - The crawl configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl ran to completion (individual page failures
///   are logged, not fatal)
/// * `Err(KagamiError)` - Setup failed (bad origin URL, unwritable mirror root)
pub async fn crawl(config: Config) -> crate::Result<CrawlReport> {
    run_crawl(config).await
}
