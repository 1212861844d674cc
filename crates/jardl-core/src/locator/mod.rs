//! Manifest discovery.
//!
//! Either a manifest path is given directly, or a directory tree is walked for
//! archives (files ending with the archive suffix) and each archive is probed
//! for the manifest entry: exact top-level name first, then the first entry
//! whose name ends with it.

mod archive;
mod error;
mod source;

use archive::{find_manifest_entry, open_archive};
pub use error::LocateError;
pub use source::ManifestSource;

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// What `Locator::locate` starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Manifest file given explicitly (direct mode).
    ManifestFile(PathBuf),
    /// Directory searched recursively for archives.
    SearchRoot(PathBuf),
}

/// Result of probing one path during a scan.
#[derive(Debug)]
pub enum Located {
    /// A manifest ready to be read.
    Manifest(ManifestSource),
    /// Archive opened fine but holds no manifest (informational).
    NoManifest { archive: PathBuf },
    /// Archive could not be opened as a zip container; skipped.
    Unreadable { archive: PathBuf, error: LocateError },
    /// Directory walk hit an entry it could not read; the walk continues.
    WalkFailed { path: Option<PathBuf>, message: String },
}

/// Finds manifests given the configured manifest name and archive suffix.
#[derive(Debug, Clone)]
pub struct Locator {
    manifest_name: String,
    archive_suffix: String,
}

impl Locator {
    pub fn new(manifest_name: impl Into<String>, archive_suffix: impl Into<String>) -> Self {
        Self {
            manifest_name: manifest_name.into(),
            archive_suffix: archive_suffix.into(),
        }
    }

    /// Lazy sequence of manifests for `input`. Direct mode yields exactly one item.
    pub fn locate<'a>(&'a self, input: &Input) -> Box<dyn Iterator<Item = Located> + 'a> {
        match input {
            Input::ManifestFile(path) => {
                Box::new(std::iter::once(Located::Manifest(self.direct(path))))
            }
            Input::SearchRoot(root) => Box::new(self.scan(root)),
        }
    }

    /// Direct mode: the given file is the manifest.
    pub fn direct(&self, manifest_path: &Path) -> ManifestSource {
        ManifestSource::File(manifest_path.to_path_buf())
    }

    /// True if `path`'s file name ends with the archive suffix (case-sensitive).
    pub fn is_archive_name(&self, path: &Path) -> bool {
        path.file_name()
            .map(|n| n.to_string_lossy().ends_with(self.archive_suffix.as_str()))
            .unwrap_or(false)
    }

    /// Lazily walks `root` and probes every archive found, including symlinked
    /// archive files. Order follows the OS.
    pub fn scan<'a>(&'a self, root: &Path) -> impl Iterator<Item = Located> + 'a {
        WalkDir::new(root)
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) => {
                    if self.is_archive_name(entry.path()) && entry.path().is_file() {
                        Some(self.probe(entry.path()))
                    } else {
                        None
                    }
                }
                Err(e) => Some(Located::WalkFailed {
                    path: e.path().map(Path::to_path_buf),
                    message: e.to_string(),
                }),
            })
    }

    /// Opens one archive and looks for the manifest entry.
    pub fn probe(&self, archive_path: &Path) -> Located {
        let mut archive = match open_archive(archive_path) {
            Ok(a) => a,
            Err(error) => {
                return Located::Unreadable {
                    archive: archive_path.to_path_buf(),
                    error,
                }
            }
        };
        match find_manifest_entry(&mut archive, &self.manifest_name) {
            Some(entry) => Located::Manifest(ManifestSource::ArchiveEntry {
                archive: archive_path.to_path_buf(),
                entry,
            }),
            None => Located::NoManifest {
                archive: archive_path.to_path_buf(),
            },
        }
    }
}
