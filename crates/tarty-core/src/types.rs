use serde::{Deserialize, Serialize};
use std::fmt;

/// Extension category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Text,
    Code,
    Markup,
}

/// Comment syntax removed before compaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CommentStyle {
    /// Nothing to strip.
    None,
    /// `/* ... */` blocks, then `//` to end of line.
    Slash,
    /// `#` to end of line.
    Hash,
    /// `<!-- ... -->` blocks.
    Markup,
}

/// Whitespace policy applied after comment stripping.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Trim every line, keep blank lines.
    Markdown,
    /// Collapse whitespace between tags, then behave like `Lines`.
    Markup,
    /// Drop blank lines, trim the rest.
    Lines,
}

/// Everything tarty knows about one supported extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileKind {
    /// Lowercase, with the leading dot.
    pub extension: &'static str,
    pub category: Category,
    pub comments: CommentStyle,
    pub layout: Layout,
}

/// Outcome for one visited file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FileVerdict {
    Ignored,
    Binary,
    UnsupportedExtension,
    EncodingError,
    Included,
}

impl FileVerdict {
    /// Label used on diagnostic lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ignored => "Ignored",
            Self::Binary => "Skipped (binary)",
            Self::UnsupportedExtension => "Skipped",
            Self::EncodingError => "Skipped (encoding error)",
            Self::Included => "Added",
        }
    }

    pub fn is_included(&self) -> bool {
        matches!(self, Self::Included)
    }
}

impl fmt::Display for FileVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A file that made it into the archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedFile {
    /// Path relative to the scan root, `/`-separated.
    pub path: String,
    pub content: String,
}

impl ProcessedFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}
