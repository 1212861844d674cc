//! Sequential writer for a `.part` temp file.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writer for an in-progress download. Bytes go to the temp path; `finalize`
/// moves them to the final name, `discard` removes them.
pub struct PartFile {
    file: BufWriter<File>,
    temp_path: PathBuf,
    written: u64,
}

impl PartFile {
    /// Create a new temp file at `temp_path` (e.g. `destination.part`).
    /// A stale temp file from an earlier interrupted run is truncated.
    pub fn create(temp_path: &Path) -> Result<Self> {
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(temp_path)
            .with_context(|| format!("failed to create temp file: {}", temp_path.display()))?;
        Ok(PartFile {
            file: BufWriter::new(file),
            temp_path: temp_path.to_path_buf(),
            written: 0,
        })
    }

    /// Append `data`.
    pub fn write(&mut self, data: &[u8]) -> Result<()> {
        self.file
            .write_all(data)
            .with_context(|| format!("write to {}", self.temp_path.display()))?;
        self.written += data.len() as u64;
        Ok(())
    }

    /// Bytes written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Path to the current temp file.
    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// Flush, fsync and rename the temp file to `final_path`. Consumes the writer.
    /// Refuses to replace an existing file. On any error the temp file is removed.
    pub fn finalize(self, final_path: &Path) -> Result<u64> {
        let PartFile {
            file,
            temp_path,
            written,
        } = self;
        match commit(file, &temp_path, final_path) {
            Ok(()) => Ok(written),
            Err(e) => {
                remove_temp(&temp_path);
                Err(e)
            }
        }
    }

    /// Close and delete the temp file. Errors are logged, not returned.
    pub fn discard(self) {
        let temp_path = self.temp_path.clone();
        drop(self.file);
        remove_temp(&temp_path);
    }
}

fn commit(file: BufWriter<File>, temp_path: &Path, final_path: &Path) -> Result<()> {
    let file = file
        .into_inner()
        .map_err(|e| e.into_error())
        .with_context(|| format!("flush {}", temp_path.display()))?;
    file.sync_all().context("storage sync failed")?;
    drop(file);

    if final_path.exists() {
        anyhow::bail!("{} appeared during download; not overwriting", final_path.display());
    }
    std::fs::rename(temp_path, final_path).with_context(|| {
        format!("failed to rename {} to {}", temp_path.display(), final_path.display())
    })
}

fn remove_temp(temp_path: &Path) {
    if let Err(e) = std::fs::remove_file(temp_path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!("could not remove {}: {}", temp_path.display(), e);
        }
    }
}
