//! Comment stripping: lexical, regex-based removal per comment style.
//!
//! Markers inside string or character literals are removed as well; there is
//! no tokenizer behind this.

use crate::classify;
use regex::Regex;
use std::sync::LazyLock;
use tarty_core::CommentStyle;

/// Patterns applied in order for each comment style.
static STRIP_RULES: LazyLock<Vec<(CommentStyle, Vec<Regex>)>> = LazyLock::new(|| {
    vec![
        (CommentStyle::Slash, vec![
            Regex::new(r"/\*[\s\S]*?\*/").unwrap(),
            Regex::new(r"//.*").unwrap(),
        ]),
        (CommentStyle::Hash, vec![Regex::new(r"#.*").unwrap()]),
        (CommentStyle::Markup, vec![Regex::new(r"<!--[\s\S]*?-->").unwrap()]),
    ]
});

fn rules_for(style: CommentStyle) -> &'static [Regex] {
    STRIP_RULES
        .iter()
        .find(|(s, _)| *s == style)
        .map(|(_, rules)| rules.as_slice())
        .unwrap_or(&[])
}

/// Remove comments of the given style.
pub fn strip_style(content: &str, style: CommentStyle) -> String {
    let mut result = content.to_string();
    for re in rules_for(style) {
        result = re.replace_all(&result, "").into_owned();
    }
    result
}

/// Remove comments for a file extension. Unknown extensions pass through.
pub fn strip(content: &str, extension: &str) -> String {
    match classify::lookup(extension) {
        Some(kind) => strip_style(content, kind.comments),
        None => content.to_string(),
    }
}
