//! URL handling module for kagami
//!
//! Provides the canonicalization step that turns raw hrefs into same-host,
//! fragment-free crawl targets.

mod normalize;

pub use normalize::normalize;

use url::Url;

/// Extracts the host from a URL, lowercased
///
/// Returns None for URLs without a host, which cannot anchor a crawl.
pub fn origin_host(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}
