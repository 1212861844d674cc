//! Single-stream HTTP GET into a temp file.

use super::error::DownloadError;
use crate::config::HttpConfig;
use crate::storage::PartFile;
use std::time::Duration;

/// GETs `url` (following redirects) and appends the body to `part`.
/// Returns the number of bytes written.
pub(crate) fn get_into(
    url: &str,
    part: &mut PartFile,
    http: &HttpConfig,
) -> Result<u64, DownloadError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(http.max_redirections)?;
    easy.useragent(&http.user_agent())?;
    easy.connect_timeout(Duration::from_secs(http.connect_timeout_secs))?;
    if let Some(secs) = http.timeout_secs {
        easy.timeout(Duration::from_secs(secs))?;
    }

    let mut write_error: Option<anyhow::Error> = None;
    let performed = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| match part.write(data) {
            Ok(()) => Ok(data.len()),
            Err(e) => {
                write_error = Some(e);
                Ok(0) // abort transfer
            }
        })?;
        transfer.perform()
    };

    if let Some(e) = write_error {
        return Err(DownloadError::Storage(e));
    }
    performed?;

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(DownloadError::Http { status: code });
    }
    Ok(part.written())
}
