//! Crawl coordinator - orchestrates one crawl invocation
//!
//! Owns everything a single crawl needs: the canonicalized origin, the
//! shared scheduler, the HTTP client, and the worker pool. There is no
//! ambient global state; two coordinators can run side by side.

use crate::config::Config;
use crate::crawler::fetcher::build_http_client;
use crate::crawler::pipeline::process_page;
use crate::crawler::scheduler::Scheduler;
use crate::url::origin_host;
use crate::KagamiError;
use reqwest::Client;
use std::path::PathBuf;
use std::sync::Arc;
use url::Url;

/// Summary of a completed crawl
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlReport {
    /// URLs popped from the frontier, successful or not
    pub pages_processed: usize,
}

/// Coordinates a single crawl from seed to exhaustion
pub struct Coordinator {
    concurrency: usize,
    origin_host: String,
    mirror_root: PathBuf,
    client: Client,
    scheduler: Arc<Scheduler>,
}

impl Coordinator {
    /// Creates a coordinator for one crawl invocation
    ///
    /// Canonicalizes the origin URL, seeds the scheduler with it, and
    /// creates the mirror root directory. A mirror root that cannot be
    /// created is the one fatal setup failure.
    pub fn new(config: Config) -> crate::Result<Self> {
        let mut origin = Url::parse(&config.origin.base_url)?;
        origin.set_fragment(None);

        let host = origin_host(&origin)
            .ok_or_else(|| KagamiError::MissingHost(config.origin.base_url.clone()))?;

        let mirror_root = PathBuf::from(&config.output.mirror_root);
        std::fs::create_dir_all(&mirror_root)?;

        let client = build_http_client()?;
        let scheduler = Arc::new(Scheduler::new(origin, config.crawler.max_pages));

        Ok(Self {
            concurrency: config.crawler.concurrency,
            origin_host: host,
            mirror_root,
            client,
            scheduler,
        })
    }

    /// Runs the crawl to frontier or budget exhaustion
    ///
    /// Spawns the configured number of workers, each repeatedly claiming a
    /// frontier entry and running the pipeline on it. A worker exits when a
    /// claim comes back empty; the crawl is done when every worker has
    /// exited. Individual page failures are logged by the pipeline and are
    /// never fatal to the run.
    pub async fn run(&self) -> crate::Result<CrawlReport> {
        let start_time = std::time::Instant::now();

        let mut handles = Vec::with_capacity(self.concurrency);
        for worker_id in 0..self.concurrency {
            let scheduler = Arc::clone(&self.scheduler);
            let client = self.client.clone();
            let origin_host = self.origin_host.clone();
            let mirror_root = self.mirror_root.clone();

            handles.push(tokio::spawn(worker(
                worker_id,
                scheduler,
                client,
                origin_host,
                mirror_root,
            )));
        }

        for handle in handles {
            let _ = handle.await;
        }

        let pages_processed = self.scheduler.processed();
        tracing::info!(
            "Crawl completed: {} pages processed in {:?}",
            pages_processed,
            start_time.elapsed()
        );

        Ok(CrawlReport { pages_processed })
    }
}

/// One worker's claim/process loop
async fn worker(
    worker_id: usize,
    scheduler: Arc<Scheduler>,
    client: Client,
    origin_host: String,
    mirror_root: PathBuf,
) {
    while let Some(page_url) = scheduler.claim_next() {
        tracing::info!(
            "[{}/{}] Fetching {}",
            scheduler.processed(),
            scheduler.max_pages(),
            page_url
        );

        let discovered = process_page(&client, &page_url, &origin_host, &mirror_root).await;

        for link in discovered {
            tracing::trace!("Discovered {}", link);
            scheduler.offer(link);
        }
    }

    tracing::debug!("Worker {} exiting", worker_id);
}

/// Runs a complete crawl with the given configuration
pub async fn run_crawl(config: Config) -> crate::Result<CrawlReport> {
    let coordinator = Coordinator::new(config)?;
    coordinator.run().await
}
