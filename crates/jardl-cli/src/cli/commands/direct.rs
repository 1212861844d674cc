//! `jardl -i <manifest>`: read one manifest, download into the current directory.

use anyhow::{Context, Result};
use jardl_core::pipeline::{Pipeline, RunReport};
use std::path::Path;

use crate::cli::console::Console;

pub fn run_direct<O, E>(
    pipeline: &Pipeline,
    manifest: &Path,
    console: &mut Console<O, E>,
) -> Result<RunReport>
where
    O: std::io::Write,
    E: std::io::Write,
{
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let report = pipeline.run_direct(manifest, &cwd, console)?;
    Ok(report)
}
