use url::Url;

/// Canonicalizes a discovered hyperlink relative to its source page
///
/// # Normalization Steps
///
/// 1. Reject fragment-only hrefs (`#section`) - same-page anchors are not
///    crawl targets and must survive rewriting untouched
/// 2. Resolve `href` against `base` using standard relative-URL resolution
/// 3. Remove the fragment (everything after #)
/// 4. Reject anything that is not http(s) after resolution
///    (mailto:, javascript:, tel:, data: links all fall out here)
/// 5. Reject URLs whose host differs from `origin_host` - the crawl is
///    strictly single-host
///
/// Trailing slashes are preserved: `/about` and `/about/` remain distinct
/// canonical URLs and distinct crawl targets.
///
/// # Arguments
///
/// * `href` - The raw href or URL string from the markup
/// * `base` - The URL of the page the href was found on
/// * `origin_host` - The host the crawl is restricted to
///
/// # Returns
///
/// * `Some(Url)` - The canonical same-host URL
/// * `None` - Malformed, non-http(s), or cross-host
///
/// # Examples
///
/// ```
/// use kagami::url::normalize;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/team").unwrap();
/// let url = normalize("profile#bio", &base, "example.com").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/profile");
///
/// assert!(normalize("https://other.com/x", &base, "example.com").is_none());
/// ```
pub fn normalize(href: &str, base: &Url, origin_host: &str) -> Option<Url> {
    let href = href.trim();

    if href.starts_with('#') {
        return None;
    }

    let mut resolved = base.join(href).ok()?;

    resolved.set_fragment(None);

    if resolved.scheme() != "http" && resolved.scheme() != "https" {
        return None;
    }

    if resolved.host_str()? != origin_host {
        return None;
    }

    Some(resolved)
}
