use std::io;
use std::path::PathBuf;

/// Failure to open or read a manifest source.
#[derive(Debug, thiserror::Error)]
pub enum LocateError {
    #[error("cannot open archive {}: {source}", path.display())]
    OpenArchive {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("not a readable zip archive {}: {source}", path.display())]
    Zip {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
