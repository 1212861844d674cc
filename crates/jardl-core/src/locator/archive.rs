//! Manifest lookup inside zip-structured archives.

use super::error::LocateError;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// Opens `path` as a zip archive.
pub fn open_archive(path: &Path) -> Result<ZipArchive<BufReader<File>>, LocateError> {
    let file = File::open(path).map_err(|source| LocateError::OpenArchive {
        path: path.to_path_buf(),
        source,
    })?;
    ZipArchive::new(BufReader::new(file)).map_err(|source| LocateError::Zip {
        path: path.to_path_buf(),
        source,
    })
}

/// Finds the entry holding the manifest named `manifest_name`.
///
/// An exact top-level match wins; otherwise the first entry (in central
/// directory order) whose name ends with `manifest_name` is returned.
pub fn find_manifest_entry<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    manifest_name: &str,
) -> Option<String> {
    if archive.by_name(manifest_name).is_ok() {
        return Some(manifest_name.to_string());
    }
    find_entry_by_suffix(archive, manifest_name)
}

/// First entry whose name ends with `suffix`; directory entries never match.
pub fn find_entry_by_suffix<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    suffix: &str,
) -> Option<String> {
    for i in 0..archive.len() {
        let entry = match archive.by_index_raw(i) {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!(index = i, "skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.is_dir() && entry.name().ends_with(suffix) {
            return Some(entry.name().to_string());
        }
    }
    None
}

/// Reads the whole entry `entry_name` from the archive at `path`.
pub fn read_entry(path: &Path, entry_name: &str) -> Result<Vec<u8>, LocateError> {
    let mut archive = open_archive(path)?;
    let mut entry = archive
        .by_name(entry_name)
        .map_err(|source| LocateError::Zip {
            path: path.to_path_buf(),
            source,
        })?;
    let mut data = Vec::with_capacity(entry.size() as usize);
    entry
        .read_to_end(&mut data)
        .map_err(|source| LocateError::Io {
            path: path.join(entry_name),
            source,
        })?;
    Ok(data)
}
