//! Progress events emitted while a run is in flight.

use std::path::PathBuf;

/// One observable step of a run. Owned so sinks can keep them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Directory-scan mode started.
    ScanStarted {
        search_root: PathBuf,
        download_dir: PathBuf,
    },
    /// Direct mode: reading a manifest file.
    ReadingManifest { path: PathBuf },
    InspectingArchive { archive: PathBuf },
    ManifestFound { archive: PathBuf, entry: String },
    ManifestMissing { archive: PathBuf },
    ArchiveUnreadable { archive: PathBuf, message: String },
    WalkFailed { path: Option<PathBuf>, message: String },
    /// Reading the manifest stream failed; remaining lines are lost.
    ManifestReadFailed { source: String, message: String },
    InvalidLine { line_no: usize, text: String },
    DownloadStarted { url: String },
    Skipped { url: String, path: PathBuf },
    Downloaded { url: String, path: PathBuf, bytes: u64 },
    DownloadFailed { url: String, message: String },
}

/// Receives events as they happen (console printer, test collector, ...).
pub trait Reporter {
    fn report(&mut self, event: &Event);
}

/// Collects every event; handy in tests.
impl Reporter for Vec<Event> {
    fn report(&mut self, event: &Event) {
        self.push(event.clone());
    }
}

/// Discards events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&mut self, _event: &Event) {}
}

/// Mirrors an event into the log.
pub(crate) fn trace(event: &Event) {
    match event {
        Event::ScanStarted {
            search_root,
            download_dir,
        } => tracing::info!(
            search_root = %search_root.display(),
            download_dir = %download_dir.display(),
            "scan started"
        ),
        Event::ReadingManifest { path } => {
            tracing::info!(path = %path.display(), "reading manifest")
        }
        Event::InspectingArchive { archive } => {
            tracing::debug!(archive = %archive.display(), "inspecting archive")
        }
        Event::ManifestFound { archive, entry } => {
            tracing::info!(archive = %archive.display(), entry = %entry, "manifest found")
        }
        Event::ManifestMissing { archive } => {
            tracing::info!(archive = %archive.display(), "no manifest in archive")
        }
        Event::ArchiveUnreadable { archive, message } => {
            tracing::warn!(archive = %archive.display(), "archive unreadable: {}", message)
        }
        Event::WalkFailed { path, message } => tracing::warn!(
            path = ?path.as_ref().map(|p| p.display().to_string()),
            "walk error: {}",
            message
        ),
        Event::ManifestReadFailed { source, message } => {
            tracing::warn!(source = %source, "manifest read failed: {}", message)
        }
        Event::InvalidLine { line_no, text } => {
            tracing::info!(line_no, text = %text, "invalid manifest line ignored")
        }
        Event::DownloadStarted { url } => tracing::debug!(url = %url, "download started"),
        Event::Skipped { url, path } => {
            tracing::info!(url = %url, path = %path.display(), "already exists, skipped")
        }
        Event::Downloaded { url, path, bytes } => {
            tracing::info!(url = %url, path = %path.display(), bytes, "download complete")
        }
        Event::DownloadFailed { url, message } => {
            tracing::warn!(url = %url, "download failed: {}", message)
        }
    }
}
