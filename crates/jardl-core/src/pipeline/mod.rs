//! Manifest discovery and download pipeline.
//!
//! Locator → manifest reader → downloader, strictly sequential. Per-item
//! failures (unreadable archive, bad manifest stream, failed download) are
//! reported and recorded in the [`RunReport`]; only a missing input aborts a run.

mod event;
mod report;

pub use event::{Event, NullReporter, Reporter};
pub use report::{Failure, FailureKind, RunReport};

use crate::config::JardlConfig;
use crate::downloader::{DownloadOutcome, Downloader};
use crate::locator::{Input, LocateError, Located, Locator, ManifestSource};
use crate::manifest::{ManifestItem, ManifestReader};
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

/// Errors that stop a run before any download happens.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("dependency file not found: {}", .0.display())]
    ManifestNotFound(PathBuf),
    #[error("search path not found: {}", .0.display())]
    SearchRootNotFound(PathBuf),
    #[error(transparent)]
    ManifestUnreadable(#[from] LocateError),
    #[error("cannot create download directory {}: {source}", path.display())]
    DownloadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The configured pipeline. Cheap to build; holds no state between runs.
#[derive(Debug, Clone)]
pub struct Pipeline {
    locator: Locator,
    downloader: Downloader,
}

/// Per-run state: the sink and the report being filled.
struct Run<'r> {
    reporter: &'r mut dyn Reporter,
    report: RunReport,
}

impl Run<'_> {
    fn emit(&mut self, event: Event) {
        event::trace(&event);
        self.reporter.report(&event);
    }
}

impl Pipeline {
    pub fn new(config: &JardlConfig) -> Self {
        Self::from_parts(
            Locator::new(config.manifest_name.clone(), config.archive_suffix.clone()),
            Downloader::new(config.http()),
        )
    }

    pub fn from_parts(locator: Locator, downloader: Downloader) -> Self {
        Self {
            locator,
            downloader,
        }
    }

    /// Direct mode: read `manifest` and download every URL into `download_dir`.
    pub fn run_direct(
        &self,
        manifest: &Path,
        download_dir: &Path,
        reporter: &mut dyn Reporter,
    ) -> Result<RunReport, PipelineError> {
        if !manifest.exists() {
            return Err(PipelineError::ManifestNotFound(manifest.to_path_buf()));
        }
        ensure_dir(download_dir)?;

        let mut run = Run {
            reporter,
            report: RunReport::default(),
        };
        run.emit(Event::ReadingManifest {
            path: manifest.to_path_buf(),
        });

        let source = self.locator.direct(manifest);
        let reader = source.open()?;
        self.process_manifest(&mut run, &source, reader, download_dir);
        Ok(run.report)
    }

    /// Directory-scan mode: find archives under `search_root`, read each one's
    /// manifest and download into `download_dir`.
    pub fn run_scan(
        &self,
        search_root: &Path,
        download_dir: &Path,
        reporter: &mut dyn Reporter,
    ) -> Result<RunReport, PipelineError> {
        if !search_root.exists() {
            return Err(PipelineError::SearchRootNotFound(search_root.to_path_buf()));
        }
        ensure_dir(download_dir)?;

        let mut run = Run {
            reporter,
            report: RunReport::default(),
        };
        run.emit(Event::ScanStarted {
            search_root: search_root.to_path_buf(),
            download_dir: download_dir.to_path_buf(),
        });

        for located in self.locator.locate(&Input::SearchRoot(search_root.to_path_buf())) {
            match located {
                Located::Manifest(source) => {
                    run.report.archives_inspected += 1;
                    run.emit(Event::InspectingArchive {
                        archive: source.path().to_path_buf(),
                    });
                    if let ManifestSource::ArchiveEntry { archive, entry } = &source {
                        run.emit(Event::ManifestFound {
                            archive: archive.clone(),
                            entry: entry.clone(),
                        });
                    }
                    match source.open() {
                        Ok(reader) => self.process_manifest(&mut run, &source, reader, download_dir),
                        Err(e) => archive_unreadable(&mut run, source.path(), &e),
                    }
                }
                Located::NoManifest { archive } => {
                    run.report.archives_inspected += 1;
                    run.report.manifests_missing += 1;
                    run.emit(Event::InspectingArchive {
                        archive: archive.clone(),
                    });
                    run.emit(Event::ManifestMissing { archive });
                }
                Located::Unreadable { archive, error } => {
                    run.report.archives_inspected += 1;
                    run.emit(Event::InspectingArchive {
                        archive: archive.clone(),
                    });
                    archive_unreadable(&mut run, &archive, &error);
                }
                Located::WalkFailed { path, message } => {
                    let subject = path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    run.report.fail(FailureKind::Walk, subject, message.clone());
                    run.emit(Event::WalkFailed { path, message });
                }
            }
        }
        Ok(run.report)
    }

    fn process_manifest(
        &self,
        run: &mut Run<'_>,
        source: &ManifestSource,
        reader: Box<dyn BufRead>,
        download_dir: &Path,
    ) {
        run.report.manifests_read += 1;
        for item in ManifestReader::new(reader) {
            match item {
                Ok(ManifestItem::Url { url, .. }) => self.download_one(run, &url, download_dir),
                Ok(ManifestItem::Invalid { line_no, text }) => {
                    run.report.invalid_lines += 1;
                    run.emit(Event::InvalidLine { line_no, text });
                }
                Err(e) => {
                    run.report
                        .fail(FailureKind::Manifest, source.to_string(), e.to_string());
                    run.emit(Event::ManifestReadFailed {
                        source: source.to_string(),
                        message: e.to_string(),
                    });
                }
            }
        }
    }

    fn download_one(&self, run: &mut Run<'_>, url: &str, download_dir: &Path) {
        let outcome = self.downloader.download_with(url, download_dir, |_| {
            run.emit(Event::DownloadStarted {
                url: url.to_string(),
            })
        });
        match outcome {
            DownloadOutcome::Skipped { path } => {
                run.report.skipped += 1;
                run.emit(Event::Skipped {
                    url: url.to_string(),
                    path,
                });
            }
            DownloadOutcome::Downloaded { path, bytes } => {
                run.report.downloaded += 1;
                run.emit(Event::Downloaded {
                    url: url.to_string(),
                    path,
                    bytes,
                });
            }
            DownloadOutcome::Failed(e) => {
                run.report.fail(FailureKind::Download, url, e.to_string());
                run.emit(Event::DownloadFailed {
                    url: url.to_string(),
                    message: e.to_string(),
                });
            }
        }
    }
}

fn archive_unreadable(run: &mut Run<'_>, archive: &Path, error: &LocateError) {
    run.report.fail(
        FailureKind::Archive,
        archive.display().to_string(),
        error.to_string(),
    );
    run.emit(Event::ArchiveUnreadable {
        archive: archive.to_path_buf(),
        message: error.to_string(),
    });
}

fn ensure_dir(dir: &Path) -> Result<(), PipelineError> {
    std::fs::create_dir_all(dir).map_err(|source| PipelineError::DownloadDir {
        path: dir.to_path_buf(),
        source,
    })
}
