//! Filename extraction from URL path.

/// Extracts the last non-empty path segment of `url` for use as a filename.
///
/// The segment is returned as it appears in the URL (no percent-decoding), so
/// `https://h/a/my%20lib.jar` yields `my%20lib.jar`. A trailing slash is
/// ignored (`https://h/a/b/` yields `b`). Returns `None` if the path has no
/// usable segment.
pub fn filename_from_url_path(url: &url::Url) -> Option<String> {
    let segment = url
        .path()
        .split('/')
        .filter(|s| !s.is_empty())
        .last()?;
    if segment == "." || segment == ".." || segment.contains('\\') {
        return None;
    }
    Some(segment.to_string())
}
