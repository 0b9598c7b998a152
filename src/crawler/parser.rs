//! Link extraction from fetched pages
//!
//! Discovery always runs against the ORIGINAL markup, never the rewritten
//! copy, so link rewriting can never affect crawl completeness.

use crate::url::normalize;
use scraper::{Html, Selector};
use url::Url;

/// Extracts every same-host anchor target from an HTML document
///
/// Each `<a href>` is canonicalized against `base_url`; hrefs that are
/// malformed, non-http(s), or cross-host are silently dropped. Duplicates
/// within one page are returned as-is - the scheduler's seen set is the
/// dedup authority.
///
/// # Arguments
///
/// * `html` - The original (untransformed) page markup
/// * `base_url` - The canonical URL the page was fetched from
/// * `origin_host` - The host the crawl is restricted to
pub fn extract_links(html: &str, base_url: &Url, origin_host: &str) -> Vec<Url> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(canonical) = normalize(href, base_url, origin_host) {
                    links.push(canonical);
                }
            }
        }
    }

    links
}
