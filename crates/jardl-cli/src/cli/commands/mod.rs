//! CLI command handlers, one file per invocation form.

mod direct;
mod scan;

pub use direct::run_direct;
pub use scan::run_scan;
