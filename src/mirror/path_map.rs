use std::path::{Path, PathBuf};
use url::Url;

/// Maps a canonical URL to the file path its mirrored page is written to
///
/// # Mapping Rules
///
/// * Path ends in `/` - append `index.html` (`/about/` - `about/index.html`)
/// * Last segment has no extension - append `.html` (`/team` - `team.html`)
/// * Otherwise the path is kept as-is (`/style.css` - `style.css`)
///
/// The serving layer reverses the same rules at request time, so the two
/// sides must agree on this mapping exactly.
///
/// Distinct canonical URLs are assumed to map to distinct storage paths.
/// The known exception (`/a` and `/a.html` both mapping to `a.html`) is
/// accepted as last-writer-wins; query strings are ignored entirely.
///
/// # Examples
///
/// ```
/// use kagami::mirror::storage_path;
/// use std::path::Path;
/// use url::Url;
///
/// let url = Url::parse("https://example.com/about/").unwrap();
/// assert_eq!(
///     storage_path(Path::new("/tmp/mirror"), &url),
///     Path::new("/tmp/mirror/about/index.html")
/// );
/// ```
pub fn storage_path(mirror_root: &Path, url: &Url) -> PathBuf {
    let path = url.path();

    let relative = if path.ends_with('/') {
        format!("{}index.html", path)
    } else if !last_segment_has_extension(path) {
        format!("{}.html", path)
    } else {
        path.to_string()
    };

    mirror_root.join(relative.trim_start_matches('/'))
}

/// Maps a canonical URL to the local href substituted into rewritten anchors
///
/// Trailing-slash paths are served as-is; `.html` pages are served without
/// the extension (the serving layer re-applies it), so the suffix is
/// stripped here. Everything else passes through unchanged.
pub fn link_path(url: &Url) -> String {
    let path = url.path();

    if path.ends_with('/') {
        path.to_string()
    } else if let Some(stripped) = path.strip_suffix(".html") {
        stripped.to_string()
    } else {
        path.to_string()
    }
}

/// Whether the last path segment contains a `.` (i.e. looks like a file
/// with an extension)
fn last_segment_has_extension(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .map(|segment| segment.contains('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> PathBuf {
        PathBuf::from("/mirror")
    }

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_root_url_maps_to_index() {
        let path = storage_path(&root(), &url("https://example.test/"));
        assert_eq!(path, Path::new("/mirror/index.html"));
    }

    #[test]
    fn test_directory_url_maps_to_nested_index() {
        let path = storage_path(&root(), &url("https://example.test/about/"));
        assert_eq!(path, Path::new("/mirror/about/index.html"));
    }

    #[test]
    fn test_extensionless_path_gets_html_suffix() {
        let path = storage_path(&root(), &url("https://example.test/profile"));
        assert_eq!(path, Path::new("/mirror/profile.html"));
    }

    #[test]
    fn test_path_with_extension_unchanged() {
        let path = storage_path(&root(), &url("https://example.test/page.html"));
        assert_eq!(path, Path::new("/mirror/page.html"));
    }

    #[test]
    fn test_deep_path() {
        let path = storage_path(&root(), &url("https://example.test/blog/2024/post"));
        assert_eq!(path, Path::new("/mirror/blog/2024/post.html"));
    }

    #[test]
    fn test_dotted_parent_segment_does_not_count_as_extension() {
        let path = storage_path(&root(), &url("https://example.test/v1.2/docs"));
        assert_eq!(path, Path::new("/mirror/v1.2/docs.html"));
    }

    #[test]
    fn test_storage_path_deterministic() {
        let u = url("https://example.test/a/b/");
        assert_eq!(storage_path(&root(), &u), storage_path(&root(), &u));
    }

    #[test]
    fn test_known_collision_documented() {
        // /a and /a.html intentionally collide; last writer wins
        let bare = storage_path(&root(), &url("https://example.test/a"));
        let suffixed = storage_path(&root(), &url("https://example.test/a.html"));
        assert_eq!(bare, suffixed);
    }

    #[test]
    fn test_link_path_trailing_slash_unchanged() {
        assert_eq!(link_path(&url("https://example.test/about/")), "/about/");
    }

    #[test]
    fn test_link_path_strips_html_suffix() {
        assert_eq!(link_path(&url("https://example.test/page.html")), "/page");
    }

    #[test]
    fn test_link_path_plain_path_unchanged() {
        assert_eq!(link_path(&url("https://example.test/profile")), "/profile");
    }

    #[test]
    fn test_link_path_other_extension_unchanged() {
        assert_eq!(
            link_path(&url("https://example.test/style.css")),
            "/style.css"
        );
    }

    #[test]
    fn test_link_path_never_keeps_html_suffix() {
        for p in ["/x.html", "/a/b.html", "/index.html"] {
            let u = url(&format!("https://example.test{}", p));
            assert!(!link_path(&u).ends_with(".html"), "{} kept its suffix", p);
        }
    }

    #[test]
    fn test_link_path_root() {
        assert_eq!(link_path(&url("https://example.test/")), "/");
    }
}
