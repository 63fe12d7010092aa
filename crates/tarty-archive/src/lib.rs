//! Tree scanning and flat archive packing.
//!
//! A scan walks the root, filters files through ignore rules and content
//! classification, compacts what survives, and the writer packs the result
//! into one `[[FILE:<path>]]`-delimited text archive.

pub mod ignore_rules;
pub mod reader;
pub mod walker;
pub mod writer;

pub use ignore_rules::{is_dotfile, IgnoreMatcher};
pub use reader::{parse, read_archive};
pub use walker::{scan, ScanOutcome, TreeWalker, VerdictRecord};
pub use writer::{header_line, write_archive, write_to, ArchiveWriter};

use std::path::Path;
use tarty_core::{Result, TartyConfig};

/// Result of a full scan-and-write run.
#[derive(Debug, Clone)]
pub struct PackSummary {
    pub outcome: ScanOutcome,
    pub total_bytes: u64,
}

/// Scan `root` and write the archive to `destination`.
pub fn pack(root: &Path, destination: &Path, config: &TartyConfig) -> Result<PackSummary> {
    let outcome = TreeWalker::with_config(root, config.clone()).scan()?;
    let total_bytes = write_archive(&outcome.files, destination)?;
    Ok(PackSummary { outcome, total_bytes })
}
