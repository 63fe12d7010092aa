//! Ignore-rule matching with gitignore semantics, plus the fixed dotfile rule.

use ::ignore::gitignore::{Gitignore, GitignoreBuilder};
use ::ignore::Match;
use std::io;
use std::path::{Path, PathBuf};
use tarty_core::Result;

/// Rules loaded from the ignore file at the scan root, in declaration order.
/// Each pattern is compiled on its own so the latest matching one can be
/// found across the file and its parent directories.
#[derive(Clone)]
pub struct IgnoreMatcher {
    root: PathBuf,
    rules: Vec<Gitignore>,
}

impl IgnoreMatcher {
    /// Load `file_name` from `root`. A missing file yields a matcher with no rules.
    pub fn load(root: &Path, file_name: &str) -> Result<Self> {
        let path = root.join(file_name);
        let rules = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self::build(root, &rules, Some(path)))
    }

    /// Build a matcher from rule text, one pattern per line.
    pub fn from_rules(root: &Path, rules: &str) -> Self {
        Self::build(root, rules, None)
    }

    /// A matcher with no rules; only the dotfile rule applies.
    pub fn empty(root: &Path) -> Self {
        Self { root: root.to_path_buf(), rules: Vec::new() }
    }

    fn build(root: &Path, text: &str, source: Option<PathBuf>) -> Self {
        let rules: Vec<Gitignore> = text
            .lines()
            .filter_map(|line| compile_rule(root, source.clone(), line))
            .collect();
        tracing::debug!(root = %root.display(), rules = rules.len(), "ignore rules loaded");
        Self { root: root.to_path_buf(), rules }
    }

    /// Number of loaded patterns, negations included.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Is the file at `relative` (relative to the root) excluded?
    pub fn is_ignored(&self, relative: &Path) -> bool {
        is_dotfile(relative) || self.matches_rules(relative, false)
    }

    /// Evaluate only the loaded rules. A rule matches a path when it matches
    /// the path itself or any of its parent directories; the last matching
    /// rule decides, and a negated rule re-includes.
    pub fn matches_rules(&self, relative: &Path, is_dir: bool) -> bool {
        let full = self.root.join(relative);
        let parents: Vec<PathBuf> = relative
            .ancestors()
            .skip(1)
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| self.root.join(p))
            .collect();

        for rule in self.rules.iter().rev() {
            let hit = std::iter::once(rule.matched(&full, is_dir))
                .chain(parents.iter().map(|p| rule.matched(p, true)))
                .find(|m| !m.is_none());
            match hit {
                Some(Match::Ignore(_)) => return true,
                Some(Match::Whitelist(_)) => return false,
                _ => continue,
            }
        }
        false
    }
}

/// Compile one rule line. Blank lines, comments and invalid globs yield `None`.
fn compile_rule(root: &Path, source: Option<PathBuf>, line: &str) -> Option<Gitignore> {
    let mut builder = GitignoreBuilder::new(root);
    if let Err(e) = builder.add_line(source, line) {
        tracing::warn!(rule = line, error = %e, "skipping invalid ignore rule");
        return None;
    }
    match builder.build() {
        Ok(rule) if rule.is_empty() => None,
        Ok(rule) => Some(rule),
        Err(e) => {
            tracing::warn!(rule = line, error = %e, "skipping invalid ignore rule");
            None
        }
    }
}

/// Final path segment starts with `.`.
pub fn is_dotfile(relative: &Path) -> bool {
    relative
        .file_name()
        .map(|n| n.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}
