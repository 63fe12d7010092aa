//! Whitespace compaction applied after comment stripping.

use crate::classify;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use tarty_core::Layout;

static RE_BETWEEN_TAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">\s+<").unwrap());

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Trim every line; blank lines stay. Line count is preserved.
pub fn trim_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop lines that are blank after trimming and trim the rest.
pub fn strip_blank_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Remove whitespace runs sitting directly between `>` and `<`.
pub fn collapse_between_tags(text: &str) -> String {
    RE_BETWEEN_TAGS.replace_all(text, "><").into_owned()
}

/// Compact text according to its layout.
pub fn compact(text: &str, layout: Layout) -> String {
    match layout {
        Layout::Markdown => trim_lines(text),
        Layout::Markup => strip_blank_lines(&collapse_between_tags(text)),
        Layout::Lines => strip_blank_lines(text),
    }
}

/// Compact text for a file extension. Unknown extensions use [`Layout::Lines`].
pub fn compact_for(text: &str, extension: &str) -> String {
    let layout = classify::lookup(extension)
        .map(|k| k.layout)
        .unwrap_or(Layout::Lines);
    compact(text, layout)
}
