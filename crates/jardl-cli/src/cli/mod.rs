//! CLI for jardl.
//!
//! Two invocation forms:
//! - `jardl -i <manifest>`: read one manifest, download into the current directory.
//! - `jardl [search_path] [download_dir]`: scan for archives (both default to `.`).
//!
//! `jardl help` prints usage.

mod commands;
mod console;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use jardl_core::config::{self, JardlConfig};
use jardl_core::pipeline::{Pipeline, RunReport};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use commands::{run_direct, run_scan};
use console::Console;

/// Top-level CLI for jardl.
#[derive(Debug, Parser)]
#[command(name = "jardl", version)]
#[command(
    about = "Download the files listed in dependency manifests of jar archives",
    long_about = None
)]
pub struct Cli {
    /// Read this manifest file directly; files are downloaded into the current directory.
    #[arg(
        short = 'i',
        value_name = "MANIFEST",
        conflicts_with_all = ["search_path", "download_dir"]
    )]
    pub input: Option<PathBuf>,

    /// Directory searched recursively for archives (default: current directory).
    #[arg(value_name = "SEARCH_PATH")]
    pub search_path: Option<PathBuf>,

    /// Directory the listed files are downloaded into (default: current directory).
    #[arg(value_name = "DOWNLOAD_DIR")]
    pub download_dir: Option<PathBuf>,
}

/// What the parsed arguments ask for.
#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    Direct {
        manifest: PathBuf,
    },
    Scan {
        search_path: PathBuf,
        download_dir: PathBuf,
    },
    Help,
}

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Run finished and nothing failed.
    Success,
    /// Missing input, or a finished run that recorded failures.
    IoError,
    /// Bad arguments (the code clap itself uses for parse errors).
    Usage,
}

impl RunStatus {
    pub fn code(self) -> u8 {
        match self {
            RunStatus::Success => 0,
            RunStatus::IoError => 1,
            RunStatus::Usage => 2,
        }
    }

    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.code())
    }

    pub fn from_report(report: &RunReport) -> Self {
        if report.is_clean() {
            RunStatus::Success
        } else {
            RunStatus::IoError
        }
    }
}

impl Cli {
    /// Resolves the invocation form.
    pub fn mode(self) -> Mode {
        if let Some(manifest) = self.input {
            return Mode::Direct { manifest };
        }
        if self.search_path.as_deref() == Some(std::path::Path::new("help")) {
            return Mode::Help;
        }
        Mode::Scan {
            search_path: self.search_path.unwrap_or_else(|| PathBuf::from(".")),
            download_dir: self.download_dir.unwrap_or_else(|| PathBuf::from(".")),
        }
    }

    pub fn run_from_args() -> Result<RunStatus> {
        let cli = match Cli::try_parse() {
            Ok(cli) => cli,
            Err(err) => {
                // --help / --version are not errors.
                let status = if err.use_stderr() {
                    RunStatus::Usage
                } else {
                    RunStatus::Success
                };
                err.print()?;
                return Ok(status);
            }
        };
        match cli.mode() {
            Mode::Help => {
                Cli::command().print_help()?;
                println!();
                Ok(RunStatus::Success)
            }
            Mode::Direct { manifest } => run_with(|pipeline, console| {
                run_direct(pipeline, &manifest, console)
            }),
            Mode::Scan {
                search_path,
                download_dir,
            } => run_with(|pipeline, console| {
                run_scan(pipeline, &search_path, &download_dir, console)
            }),
        }
    }
}

/// Loads config, prints the banner, runs `command` and prints the summary.
fn run_with<F>(command: F) -> Result<RunStatus>
where
    F: FnOnce(&Pipeline, &mut Console<io::Stdout, io::Stderr>) -> Result<RunReport>,
{
    let cfg = load_config();
    tracing::debug!("loaded config: {:?}", cfg);
    let pipeline = Pipeline::new(&cfg);
    let mut console = Console::stdio(&cfg);
    console.banner(env!("CARGO_PKG_VERSION"));

    let report = command(&pipeline, &mut console)?;
    console.summary(&report);
    Ok(RunStatus::from_report(&report))
}

/// Config from `~/.config/jardl/config.toml`; defaults if it cannot be loaded.
fn load_config() -> JardlConfig {
    match config::load_or_init() {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::warn!("using default config: {:#}", err);
            JardlConfig::default()
        }
    }
}
