//! Manifest parsing.
//!
//! A manifest is newline-delimited text: blank lines and `#` comments are
//! ignored, lines starting with `http://` or `https://` are download targets,
//! anything else is reported as invalid and skipped.

mod line;
mod reader;

pub use line::{classify, ManifestLine};
pub use reader::{ManifestItem, ManifestReader};
