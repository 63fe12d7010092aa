//! Best-effort archive parsing.
//!
//! Any line of the form `[[FILE:...]]` starts a new entry, including one that
//! happens to sit inside a file's content.

use crate::writer::{HEADER_PREFIX, HEADER_SUFFIX};
use std::path::Path;
use tarty_core::{ProcessedFile, Result};

fn header_path(line: &str) -> Option<&str> {
    line.strip_suffix('\n')?
        .strip_prefix(HEADER_PREFIX)?
        .strip_suffix(HEADER_SUFFIX)
}

fn close_entry(text: &str, path: String, start: usize, end: usize) -> ProcessedFile {
    let body = &text[start..end];
    let content = body.strip_suffix('\n').unwrap_or(body);
    ProcessedFile::new(path, content)
}

/// Split archive text into entries. Text before the first header is dropped.
pub fn parse(text: &str) -> Vec<ProcessedFile> {
    let mut entries = Vec::new();
    let mut current: Option<(String, usize)> = None;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        if let Some(path) = header_path(line) {
            if let Some((prev, start)) = current.take() {
                entries.push(close_entry(text, prev, start, offset));
            }
            current = Some((path.to_string(), offset + line.len()));
        }
        offset += line.len();
    }
    if let Some((prev, start)) = current {
        entries.push(close_entry(text, prev, start, text.len()));
    }
    entries
}

/// Read and parse an archive file.
pub fn read_archive(path: &Path) -> Result<Vec<ProcessedFile>> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse(&text))
}
