//! Disk side of a download.
//!
//! Bytes are streamed into `<destination>.part` and renamed to the final name
//! only after the transfer succeeded, so the final name never holds a
//! truncated file. Failed transfers delete the temp file.

mod writer;

pub use writer::PartFile;

/// Temporary file suffix used before the rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `file.jar` → `file.jar.part`).
pub fn temp_path(final_path: &std::path::Path) -> std::path::PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    std::path::PathBuf::from(o)
}
