//! Per-file pipeline: comment stripping followed by whitespace compaction.

use crate::{classify, format, strip};
use tarty_core::FileKind;

/// Compaction result with statistics.
#[derive(Debug, Clone)]
pub struct CompactionResult {
    pub output: String,
    pub original_len: usize,
    pub compacted_len: usize,
    pub reduction_pct: f64,
    pub kind: FileKind,
}

impl CompactionResult {
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 { return 1.0; }
        self.compacted_len as f64 / self.original_len as f64
    }
}

/// Runs a file's text through the stripper and compactor.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactorPipeline;

impl CompactorPipeline {
    pub fn new() -> Self { Self }

    /// Process text of a known kind.
    pub fn process_kind(&self, text: &str, kind: &FileKind) -> CompactionResult {
        let original_len = text.len();
        let stripped = strip::strip_style(text, kind.comments);
        let output = format::compact(&stripped, kind.layout);

        let compacted_len = output.len();
        let reduction = if original_len > 0 {
            (original_len.saturating_sub(compacted_len) as f64 / original_len as f64) * 100.0
        } else {
            0.0
        };

        CompactionResult {
            output,
            original_len,
            compacted_len,
            reduction_pct: reduction,
            kind: *kind,
        }
    }

    /// Process text by extension. `None` when the extension is unsupported.
    pub fn process(&self, text: &str, extension: &str) -> Option<CompactionResult> {
        classify::lookup(extension).map(|kind| self.process_kind(text, kind))
    }
}
