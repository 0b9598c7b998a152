//! HTML rewriting for mirrored pages
//!
//! Rewrites a fetched page so it works when served from the local mirror:
//! same-host anchors point at local link paths, and asset references
//! (images, scripts, stylesheets) become absolute remote URLs since assets
//! are never downloaded.

use crate::mirror::link_path;
use crate::url::normalize;
use ego_tree::NodeId;
use scraper::{Html, Node, Selector};
use url::Url;

/// Rewrites a page's markup for local serving
///
/// # Rewrite Rules
///
/// * `<a href>` that canonicalizes to the origin host - replaced with the
///   local link path; cross-host or malformed hrefs are left untouched
/// * `<img src>`, `<script src>`, `<link rel="stylesheet" href>` - resolved
///   against `source_url` into an absolute URL (any host); a resolution
///   failure leaves the attribute untouched
///
/// Never touches disk or network; bad markup never makes this fail - the
/// parser recovers and unrewritable attributes simply pass through.
pub fn rewrite_page(source_url: &Url, origin_host: &str, html: &str) -> String {
    let mut document = Html::parse_document(html);

    rewrite_anchors(&mut document, source_url, origin_host);
    rewrite_assets(&mut document, "img[src]", "src", source_url);
    rewrite_assets(&mut document, "script[src]", "src", source_url);
    rewrite_assets(
        &mut document,
        r#"link[rel="stylesheet"][href]"#,
        "href",
        source_url,
    );

    document.html()
}

/// Rewrites same-host anchor hrefs to local link paths
fn rewrite_anchors(document: &mut Html, source_url: &Url, origin_host: &str) {
    let selector = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return,
    };

    let edits: Vec<(NodeId, String)> = document
        .select(&selector)
        .filter_map(|element| {
            let href = element.value().attr("href")?;
            let canonical = normalize(href, source_url, origin_host)?;
            Some((element.id(), link_path(&canonical)))
        })
        .collect();

    for (id, local_href) in edits {
        set_attr(document, id, "href", &local_href);
    }
}

/// Rewrites matching asset attributes to absolute URLs
fn rewrite_assets(document: &mut Html, selector: &str, attr: &str, source_url: &Url) {
    let selector = match Selector::parse(selector) {
        Ok(s) => s,
        Err(_) => return,
    };

    let edits: Vec<(NodeId, String)> = document
        .select(&selector)
        .filter_map(|element| {
            let value = element.value().attr(attr)?;
            let absolute = source_url.join(value.trim()).ok()?;
            Some((element.id(), absolute.to_string()))
        })
        .collect();

    for (id, absolute) in edits {
        set_attr(document, id, attr, &absolute);
    }
}

/// Replaces the value of an existing attribute on the element at `id`
///
/// Only updates attributes that are already present; the rewrite rules never
/// need to add one.
fn set_attr(document: &mut Html, id: NodeId, name: &str, value: &str) {
    if let Some(mut node) = document.tree.get_mut(id) {
        if let Node::Element(element) = node.value() {
            for (attr_name, attr_value) in element.attrs.iter_mut() {
                if attr_name.local.as_ref() == name {
                    *attr_value = value.into();
                }
            }
        }
    }
}
