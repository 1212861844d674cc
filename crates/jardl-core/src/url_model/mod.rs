//! URL modeling and destination derivation.
//!
//! A download lands in the destination directory under the last path segment
//! of its URL; nothing else (headers, query) influences the name.

mod path;

pub use path::filename_from_url_path;

use std::path::{Path, PathBuf};

/// Why a manifest URL cannot be mapped to a destination file.
#[derive(Debug, thiserror::Error)]
pub enum UrlError {
    #[error("invalid URL: {0}")]
    Parse(#[from] url::ParseError),
    #[error("URL has no file name in its path")]
    NoFileName,
}

/// Parses `url` and returns the destination path inside `dir`.
///
/// # Examples
///
/// - `destination_for("https://example.org/libs/file1.jar", "out")` → `out/file1.jar`
/// - `destination_for("https://example.org/", "out")` → `Err(NoFileName)`
pub fn destination_for(url: &str, dir: &Path) -> Result<PathBuf, UrlError> {
    let parsed = url::Url::parse(url)?;
    let name = filename_from_url_path(&parsed).ok_or(UrlError::NoFileName)?;
    Ok(dir.join(name))
}
