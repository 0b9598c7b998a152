//! Scheduler owning the crawl frontier, seen set, and page budget
//!
//! All three pieces of shared crawl state live behind one mutex, so a claim
//! (pop + counter increment) and a discovery (seen check + push) are each a
//! single critical section. Workers never hold the lock across an await
//! point; fetch and disk I/O happen entirely outside it.

use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;
use url::Url;

/// Shared crawl state guarded by the scheduler's mutex
struct CrawlState {
    /// FIFO queue of canonical URLs awaiting a fetch
    frontier: VecDeque<Url>,

    /// Canonical URLs ever enqueued (including the seed); grows monotonically
    seen: HashSet<String>,

    /// URLs popped from the frontier so far, successful or not
    processed: usize,
}

/// Owns the frontier, the seen set, and the processed counter for one crawl
///
/// A URL enters the frontier at most once over the crawl's lifetime: the
/// seen set gates every enqueue, and nothing is ever removed from it.
pub struct Scheduler {
    state: Mutex<CrawlState>,

    /// Page budget: claims stop once this many URLs have been popped
    max_pages: usize,
}

impl Scheduler {
    /// Creates a scheduler seeded with exactly the origin URL
    ///
    /// The seed is pre-inserted into the seen set, so re-discovering the
    /// origin mid-crawl never re-enqueues it.
    pub fn new(seed: Url, max_pages: usize) -> Self {
        let mut seen = HashSet::new();
        seen.insert(seed.as_str().to_string());

        let mut frontier = VecDeque::new();
        frontier.push_back(seed);

        Self {
            state: Mutex::new(CrawlState {
                frontier,
                seen,
                processed: 0,
            }),
            max_pages,
        }
    }

    /// Atomically claims the next frontier entry and counts it as processed
    ///
    /// Returns None - without touching the counter - when the budget is
    /// exhausted or the frontier is empty; a worker receiving None exits.
    pub fn claim_next(&self) -> Option<Url> {
        let mut state = self.state.lock().unwrap();

        if state.processed >= self.max_pages {
            return None;
        }

        let url = state.frontier.pop_front()?;
        state.processed += 1;
        Some(url)
    }

    /// Offers a discovered URL to the frontier
    ///
    /// One critical section covers the seen-set check, insert, and push, so
    /// concurrent workers can never double-enqueue the same URL. Returns
    /// true if the URL was novel and enqueued.
    pub fn offer(&self, url: Url) -> bool {
        let mut state = self.state.lock().unwrap();

        if state.seen.insert(url.as_str().to_string()) {
            state.frontier.push_back(url);
            true
        } else {
            false
        }
    }

    /// Returns the number of URLs claimed so far
    pub fn processed(&self) -> usize {
        self.state.lock().unwrap().processed
    }

    /// Returns the number of URLs currently awaiting a fetch
    pub fn frontier_size(&self) -> usize {
        self.state.lock().unwrap().frontier.len()
    }

    /// Returns the configured page budget
    pub fn max_pages(&self) -> usize {
        self.max_pages
    }
}
