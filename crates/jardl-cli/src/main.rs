use jardl_core::logging;
use std::process::ExitCode;

mod cli;

use crate::cli::{Cli, RunStatus};

fn main() -> ExitCode {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    match Cli::run_from_args() {
        Ok(status) => status.exit_code(),
        Err(err) => {
            eprintln!("jardl error: {:#}", err);
            RunStatus::IoError.exit_code()
        }
    }
}
