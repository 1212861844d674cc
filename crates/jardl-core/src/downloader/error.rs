//! Download error type.

use crate::url_model::UrlError;

/// Why a single URL could not be downloaded. The run continues with the next URL.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error(transparent)]
    Url(#[from] UrlError),
    /// Final response (after redirects) had a non-2xx status.
    #[error("HTTP {status}")]
    Http { status: u32 },
    /// Curl reported an error (connection refused, timeout, redirect loop, ...).
    #[error("{0}")]
    Transfer(#[from] curl::Error),
    /// Temp file could not be created, written or renamed.
    #[error("storage: {0:#}")]
    Storage(anyhow::Error),
}
