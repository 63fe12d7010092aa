//! Content classification: binary sniffing and the supported extension table.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use tarty_core::config::DEFAULT_PROBE_LEN;
use tarty_core::{Category, CommentStyle, FileKind, Layout};

const fn kind(
    extension: &'static str,
    category: Category,
    comments: CommentStyle,
    layout: Layout,
) -> FileKind {
    FileKind { extension, category, comments, layout }
}

/// Every extension tarty will process. Anything else is skipped.
pub const SUPPORTED_KINDS: &[FileKind] = &[
    // Text
    kind(".txt", Category::Text, CommentStyle::None, Layout::Lines),
    kind(".csv", Category::Text, CommentStyle::None, Layout::Lines),
    kind(".md", Category::Text, CommentStyle::Markup, Layout::Markdown),
    // Code
    kind(".c", Category::Code, CommentStyle::Slash, Layout::Lines),
    kind(".cpp", Category::Code, CommentStyle::Slash, Layout::Lines),
    kind(".h", Category::Code, CommentStyle::Slash, Layout::Lines),
    kind(".hh", Category::Code, CommentStyle::Slash, Layout::Lines),
    kind(".hpp", Category::Code, CommentStyle::Slash, Layout::Lines),
    kind(".m", Category::Code, CommentStyle::Slash, Layout::Lines),
    kind(".mm", Category::Code, CommentStyle::Slash, Layout::Lines),
    kind(".swift", Category::Code, CommentStyle::Slash, Layout::Lines),
    kind(".rs", Category::Code, CommentStyle::Slash, Layout::Lines),
    kind(".kt", Category::Code, CommentStyle::Slash, Layout::Lines),
    kind(".py", Category::Code, CommentStyle::Hash, Layout::Lines),
    kind(".sh", Category::Code, CommentStyle::Hash, Layout::Lines),
    kind(".rb", Category::Code, CommentStyle::Hash, Layout::Lines),
    // Markup
    kind(".json", Category::Markup, CommentStyle::None, Layout::Markup),
    kind(".xml", Category::Markup, CommentStyle::Markup, Layout::Markup),
    kind(".xib", Category::Markup, CommentStyle::Markup, Layout::Markup),
    kind(".storyboard", Category::Markup, CommentStyle::Markup, Layout::Markup),
];

/// Normalize an extension to the table's form: lowercase with a leading dot.
pub fn normalize_extension(ext: &str) -> String {
    let lower = ext.to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{lower}")
    }
}

/// Look up an extension, with or without the leading dot, ignoring case.
pub fn lookup(ext: &str) -> Option<&'static FileKind> {
    if ext.is_empty() || ext == "." {
        return None;
    }
    let ext = normalize_extension(ext);
    SUPPORTED_KINDS.iter().find(|k| k.extension == ext)
}

pub fn is_supported_extension(ext: &str) -> bool {
    lookup(ext).is_some()
}

/// Extension of a path as a dotted string, e.g. `".rs"`. Empty when there is none.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default()
}

/// True when the first [`DEFAULT_PROBE_LEN`] bytes contain a NUL.
pub fn is_binary(bytes: &[u8]) -> bool {
    is_binary_prefix(bytes, DEFAULT_PROBE_LEN)
}

/// True when the first `probe_len` bytes contain a NUL.
pub fn is_binary_prefix(bytes: &[u8], probe_len: usize) -> bool {
    let end = bytes.len().min(probe_len);
    bytes[..end].contains(&0)
}

/// Read at most `probe_len` bytes of `path` and sniff them.
/// A file that cannot be opened or read counts as binary.
pub fn probe_file(path: &Path, probe_len: usize) -> bool {
    let mut head = Vec::with_capacity(probe_len);
    let read = File::open(path).and_then(|f| f.take(probe_len as u64).read_to_end(&mut head));
    match read {
        Ok(_) => is_binary_prefix(&head, probe_len),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "probe failed, treating as binary");
            true
        }
    }
}
