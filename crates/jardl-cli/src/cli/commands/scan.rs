//! `jardl [search_path] [download_dir]`: scan for archives and download what their manifests list.

use anyhow::Result;
use jardl_core::pipeline::{Pipeline, RunReport};
use std::path::Path;

use crate::cli::console::Console;

pub fn run_scan<O, E>(
    pipeline: &Pipeline,
    search_path: &Path,
    download_dir: &Path,
    console: &mut Console<O, E>,
) -> Result<RunReport>
where
    O: std::io::Write,
    E: std::io::Write,
{
    let report = pipeline.run_scan(search_path, download_dir, console)?;
    tracing::info!(
        archives = report.archives_inspected,
        manifests = report.manifests_read,
        "scan finished"
    );
    Ok(report)
}
