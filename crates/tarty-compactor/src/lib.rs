//! Tarty compactor: per-file text reduction for archive packing.
//!
//! Stages:
//! 1. Classify: binary sniffing and extension lookup
//! 2. Strip: remove comments for the file's language
//! 3. Format: collapse insignificant whitespace

pub mod classify;
pub mod format;
pub mod pipeline;
pub mod strip;

pub use classify::{is_binary, is_supported_extension, lookup, SUPPORTED_KINDS};
pub use format::{compact, normalize_newlines};
pub use pipeline::{CompactionResult, CompactorPipeline};
pub use strip::strip;
