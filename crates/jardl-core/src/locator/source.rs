//! Where a manifest lives and how to read it.

use super::archive::read_entry;
use super::error::LocateError;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};

/// A manifest found on disk or inside an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    /// Plain manifest file (direct mode).
    File(PathBuf),
    /// Entry `entry` inside the archive at `archive`.
    ArchiveEntry { archive: PathBuf, entry: String },
}

impl ManifestSource {
    /// Opens the manifest for reading.
    ///
    /// Archive entries are read fully into memory so the archive is closed
    /// before the caller starts downloading.
    pub fn open(&self) -> Result<Box<dyn BufRead>, LocateError> {
        match self {
            ManifestSource::File(path) => {
                let file = File::open(path).map_err(|source| LocateError::Io {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
            ManifestSource::ArchiveEntry { archive, entry } => {
                let data = read_entry(archive, entry)?;
                Ok(Box::new(Cursor::new(data)))
            }
        }
    }

    /// Path of the file on disk (the manifest itself or its archive).
    pub fn path(&self) -> &Path {
        match self {
            ManifestSource::File(path) => path,
            ManifestSource::ArchiveEntry { archive, .. } => archive,
        }
    }
}

impl fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestSource::File(path) => write!(f, "{}", path.display()),
            ManifestSource::ArchiveEntry { archive, entry } => {
                write!(f, "{}!/{}", archive.display(), entry)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn display_archive_entry() {
        let s = ManifestSource::ArchiveEntry {
            archive: PathBuf::from("libs/app.jar"),
            entry: "META-INF/dependencies.txt".to_string(),
        };
        assert_eq!(s.to_string(), "libs/app.jar!/META-INF/dependencies.txt");
        assert_eq!(s.path(), Path::new("libs/app.jar"));
    }

    #[test]
    fn open_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dependencies.txt");
        std::fs::write(&path, "https://example.org/file1.jar\n").unwrap();
        let mut r = ManifestSource::File(path).open().unwrap();
        let mut s = String::new();
        r.read_to_string(&mut s).unwrap();
        assert_eq!(s, "https://example.org/file1.jar\n");
    }

    #[test]
    fn open_missing_file_is_io_error() {
        let src = ManifestSource::File(PathBuf::from("/nonexistent/dependencies.txt"));
        assert!(matches!(src.open(), Err(LocateError::Io { .. })));
    }
}
