//! Human-readable progress output.

use jardl_core::config::JardlConfig;
use jardl_core::pipeline::{Event, Reporter, RunReport};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Prints pipeline events: progress to `out`, errors to `err`.
pub struct Console<O, E> {
    out: O,
    err: E,
    manifest_name: String,
    archive_suffix: String,
}

impl Console<io::Stdout, io::Stderr> {
    pub fn stdio(cfg: &JardlConfig) -> Self {
        Console::new(io::stdout(), io::stderr(), cfg)
    }
}

impl<O: Write, E: Write> Console<O, E> {
    pub fn new(out: O, err: E, cfg: &JardlConfig) -> Self {
        Self {
            out,
            err,
            manifest_name: cfg.manifest_name.clone(),
            archive_suffix: cfg.archive_suffix.clone(),
        }
    }

    pub fn banner(&mut self, version: &str) {
        let _ = writeln!(self.out, "JARDL v{}", version);
        let _ = writeln!(self.out, "================================");
        let _ = writeln!(self.out);
    }

    pub fn summary(&mut self, report: &RunReport) {
        let _ = writeln!(
            self.out,
            "Done: {} downloaded, {} skipped, {} invalid line(s), {} failure(s).",
            report.downloaded,
            report.skipped,
            report.invalid_lines,
            report.failures.len()
        );
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }

    fn print(&mut self, event: &Event) -> io::Result<()> {
        match event {
            Event::ScanStarted {
                search_root,
                download_dir,
            } => {
                writeln!(
                    self.out,
                    "Searching for {} files in: {}",
                    self.archive_suffix,
                    absolute(search_root).display()
                )?;
                writeln!(
                    self.out,
                    "Downloading dependencies into: {}",
                    absolute(download_dir).display()
                )?;
                writeln!(self.out)
            }
            Event::ReadingManifest { path } => {
                writeln!(self.out, "Reading dependencies from file: {}", path.display())
            }
            Event::InspectingArchive { archive } => writeln!(
                self.out,
                "-> Inspecting archive: {}",
                file_name(archive)
            ),
            Event::ManifestFound { entry, .. } => writeln!(self.out, "   Found: {}", entry),
            Event::ManifestMissing { .. } => {
                writeln!(self.out, "   No {} found.", self.manifest_name)?;
                writeln!(self.out)
            }
            Event::ArchiveUnreadable { archive, message } => {
                writeln!(
                    self.err,
                    "Error reading archive '{}': {}",
                    archive.display(),
                    message
                )?;
                writeln!(self.out)
            }
            Event::WalkFailed { path, message } => match path {
                Some(p) => writeln!(self.err, "Error walking '{}': {}", p.display(), message),
                None => writeln!(self.err, "Error walking directory: {}", message),
            },
            Event::ManifestReadFailed { source, message } => {
                writeln!(self.err, "Error reading manifest '{}': {}", source, message)
            }
            Event::InvalidLine { line_no, text } => {
                writeln!(self.out, "   [IGNORED] Invalid line {}: {}", line_no, text)
            }
            Event::DownloadStarted { url } => writeln!(self.out, "   Downloading: {}", url),
            Event::Skipped { path, .. } => {
                writeln!(self.out, "   [SKIPPED] Already exists: {}", file_name(path))
            }
            Event::Downloaded { path, bytes, .. } => writeln!(
                self.out,
                "   Download complete -> {} ({} bytes)",
                file_name(path),
                bytes
            ),
            Event::DownloadFailed { url, message } => {
                writeln!(self.err, "   ERROR downloading {}: {}", url, message)
            }
        }
    }
}

impl<O: Write, E: Write> Reporter for Console<O, E> {
    fn report(&mut self, event: &Event) {
        if let Err(e) = self.print(event) {
            tracing::debug!("console write failed: {}", e);
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
