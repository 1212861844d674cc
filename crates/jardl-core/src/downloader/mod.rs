//! Downloader: one URL into one file in the destination directory.
//!
//! An existing file at the destination means the URL is skipped without any
//! network access. Otherwise the body is streamed into `<name>.part` and
//! renamed on success; on failure the temp file is removed.

mod error;
mod http;

pub use error::DownloadError;

use crate::config::HttpConfig;
use crate::storage::{temp_path, PartFile};
use crate::url_model::destination_for;
use std::path::{Path, PathBuf};

/// Result of one download attempt.
#[derive(Debug)]
pub enum DownloadOutcome {
    /// Destination already existed; nothing was fetched.
    Skipped { path: PathBuf },
    /// Body stored at `path`.
    Downloaded { path: PathBuf, bytes: u64 },
    Failed(DownloadError),
}

/// Blocking downloader. Holds only configuration; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct Downloader {
    http: HttpConfig,
}

impl Downloader {
    pub fn new(http: HttpConfig) -> Self {
        Self { http }
    }

    /// Downloads `url` into `dest_dir` unless a file with the same name is already there.
    pub fn download(&self, url: &str, dest_dir: &Path) -> DownloadOutcome {
        self.download_with(url, dest_dir, |_| {})
    }

    /// Like `download`, calling `on_fetch` with the destination right before
    /// the network is touched (never for skipped or unmappable URLs).
    pub fn download_with<F>(&self, url: &str, dest_dir: &Path, on_fetch: F) -> DownloadOutcome
    where
        F: FnOnce(&Path),
    {
        let dest = match destination_for(url, dest_dir) {
            Ok(p) => p,
            Err(e) => return DownloadOutcome::Failed(e.into()),
        };
        if dest.exists() {
            tracing::debug!(url, path = %dest.display(), "destination exists, skipping");
            return DownloadOutcome::Skipped { path: dest };
        }
        on_fetch(&dest);
        match self.fetch(url, &dest) {
            Ok(bytes) => DownloadOutcome::Downloaded { path: dest, bytes },
            Err(e) => DownloadOutcome::Failed(e),
        }
    }

    fn fetch(&self, url: &str, dest: &Path) -> Result<u64, DownloadError> {
        let mut part = PartFile::create(&temp_path(dest)).map_err(DownloadError::Storage)?;
        tracing::debug!(url, temp = %part.temp_path().display(), "GET");
        match http::get_into(url, &mut part, &self.http) {
            Ok(_) => part.finalize(dest).map_err(DownloadError::Storage),
            Err(e) => {
                part.discard();
                Err(e)
            }
        }
    }
}
