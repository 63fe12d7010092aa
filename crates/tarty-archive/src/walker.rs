//! Tree walking: visits every file under the root once and runs it through
//! the ordered check pipeline (ignore → binary → extension → decode).

use crate::ignore_rules::IgnoreMatcher;
use std::cmp::Ordering;
use std::io::{self, Write};
use std::ops::ControlFlow;
use std::path::{Component, Path, PathBuf};
use tarty_compactor::{classify, normalize_newlines, CompactionResult, CompactorPipeline};
use tarty_core::{FileVerdict, ProcessedFile, Result, TartyConfig, TartyError};
use walkdir::{DirEntry, WalkDir};

/// The verdict given to one visited file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerdictRecord {
    pub path: String,
    pub verdict: FileVerdict,
}

/// Everything a scan produced.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Included files in traversal order.
    pub files: Vec<ProcessedFile>,
    /// One record per visited file, in traversal order.
    pub verdicts: Vec<VerdictRecord>,
    /// Decoded bytes of included files before stripping and compaction.
    pub original_bytes: usize,
    pub compacted_bytes: usize,
}

impl ScanOutcome {
    pub fn count(&self, verdict: FileVerdict) -> usize {
        self.verdicts.iter().filter(|r| r.verdict == verdict).count()
    }

    pub fn reduction_pct(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        (self.original_bytes.saturating_sub(self.compacted_bytes) as f64 / self.original_bytes as f64) * 100.0
    }
}

/// A file under evaluation.
struct Candidate<'a> {
    path: &'a Path,
    relative: &'a Path,
    extension: String,
}

struct ScanContext<'a> {
    ignore: &'a IgnoreMatcher,
    probe_len: usize,
    pipeline: CompactorPipeline,
}

type Check = fn(&ScanContext<'_>, &Candidate<'_>) -> ControlFlow<FileVerdict>;

/// Cheap checks first; the first `Break` decides the verdict.
const CHECKS: &[Check] = &[check_ignored, check_binary, check_extension];

fn check_ignored(ctx: &ScanContext<'_>, c: &Candidate<'_>) -> ControlFlow<FileVerdict> {
    if ctx.ignore.is_ignored(c.relative) {
        ControlFlow::Break(FileVerdict::Ignored)
    } else {
        ControlFlow::Continue(())
    }
}

fn check_binary(ctx: &ScanContext<'_>, c: &Candidate<'_>) -> ControlFlow<FileVerdict> {
    if classify::probe_file(c.path, ctx.probe_len) {
        ControlFlow::Break(FileVerdict::Binary)
    } else {
        ControlFlow::Continue(())
    }
}

fn check_extension(_ctx: &ScanContext<'_>, c: &Candidate<'_>) -> ControlFlow<FileVerdict> {
    if classify::is_supported_extension(&c.extension) {
        ControlFlow::Continue(())
    } else {
        ControlFlow::Break(FileVerdict::UnsupportedExtension)
    }
}

/// Read the whole file as UTF-8 with line endings normalized to `\n`. Read
/// errors and invalid UTF-8 are both encoding errors.
fn decode(path: &Path) -> std::result::Result<String, FileVerdict> {
    let bytes = std::fs::read(path).map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "read failed");
        FileVerdict::EncodingError
    })?;
    let text = String::from_utf8(bytes).map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "not valid UTF-8");
        FileVerdict::EncodingError
    })?;
    if text.contains('\r') {
        Ok(normalize_newlines(&text).into_owned())
    } else {
        Ok(text)
    }
}

fn evaluate(ctx: &ScanContext<'_>, c: &Candidate<'_>) -> std::result::Result<CompactionResult, FileVerdict> {
    for check in CHECKS {
        if let ControlFlow::Break(verdict) = check(ctx, c) {
            return Err(verdict);
        }
    }
    if c.relative.to_str().is_none() {
        tracing::debug!(path = %c.relative.display(), "file name is not valid UTF-8");
        return Err(FileVerdict::EncodingError);
    }
    let text = decode(c.path)?;
    let kind = classify::lookup(&c.extension).ok_or(FileVerdict::UnsupportedExtension)?;
    Ok(ctx.pipeline.process_kind(&text, kind))
}

/// `/`-separated form of a relative path. Non-UTF-8 segments are rendered
/// lossily; such files never reach the archive.
pub fn display_relative(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Files before subdirectories, each group by name.
fn traversal_order(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Scans a directory tree into processed files.
pub struct TreeWalker {
    root: PathBuf,
    config: TartyConfig,
    pipeline: CompactorPipeline,
}

impl TreeWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_config(root, TartyConfig::default())
    }

    pub fn with_config(root: impl Into<PathBuf>, config: TartyConfig) -> Self {
        Self {
            root: root.into(),
            config,
            pipeline: CompactorPipeline::new(),
        }
    }

    /// Suppress the per-file diagnostic lines.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.config.quiet = quiet;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn check_root(&self) -> Result<()> {
        match std::fs::metadata(&self.root) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(TartyError::NotADirectory { path: self.root.clone() }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(TartyError::RootNotFound { path: self.root.clone() })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Walk the tree, reporting verdicts on stdout. Only a missing or
    /// unreadable root is fatal; every per-file problem becomes a verdict.
    pub fn scan(&self) -> Result<ScanOutcome> {
        self.scan_to(&mut io::stdout().lock())
    }

    /// Walk the tree, writing one `"<verdict>: <path>"` line per file to
    /// `report` unless quiet.
    pub fn scan_to(&self, report: &mut dyn Write) -> Result<ScanOutcome> {
        self.check_root()?;
        let ignore = IgnoreMatcher::load(&self.root, &self.config.ignore_file)?;
        self.walk(&ignore, report)
    }

    /// Walk the tree with an already loaded matcher.
    pub fn scan_with(&self, ignore: &IgnoreMatcher) -> Result<ScanOutcome> {
        self.check_root()?;
        self.walk(ignore, &mut io::stdout().lock())
    }

    fn walk(&self, ignore: &IgnoreMatcher, report: &mut dyn Write) -> Result<ScanOutcome> {
        let ctx = ScanContext {
            ignore,
            probe_len: self.config.probe_len,
            pipeline: self.pipeline,
        };
        let mut outcome = ScanOutcome::default();
        let mut reporting = !self.config.quiet;

        for entry in WalkDir::new(&self.root).sort_by(traversal_order) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => return Err(TartyError::Walk(e.to_string())),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir()) {
                continue;
            }

            let path = entry.path();
            let relative = path.strip_prefix(&self.root).unwrap_or(path);
            let candidate = Candidate {
                path,
                relative,
                extension: classify::extension_of(path),
            };
            let shown = display_relative(relative);

            let verdict = match evaluate(&ctx, &candidate) {
                Ok(result) => {
                    tracing::debug!(
                        path = %shown,
                        original = result.original_len,
                        compacted = result.compacted_len,
                        reduction_pct = result.reduction_pct,
                        "compacted"
                    );
                    outcome.original_bytes += result.original_len;
                    outcome.compacted_bytes += result.compacted_len;
                    outcome.files.push(ProcessedFile::new(shown.clone(), result.output));
                    FileVerdict::Included
                }
                Err(verdict) => {
                    tracing::debug!(path = %shown, verdict = %verdict, "excluded");
                    verdict
                }
            };

            if reporting {
                if let Err(e) = writeln!(report, "{verdict}: {shown}") {
                    // A closed reader (`tarty ... | head`) only ends the report.
                    if e.kind() != io::ErrorKind::BrokenPipe {
                        tracing::warn!(error = %e, "verdict report failed");
                    }
                    reporting = false;
                }
            }
            outcome.verdicts.push(VerdictRecord { path: shown, verdict });
        }

        if reporting {
            if let Err(e) = report.flush() {
                tracing::debug!(error = %e, "verdict report flush failed");
            }
        }
        tracing::info!(
            root = %self.root.display(),
            visited = outcome.verdicts.len(),
            included = outcome.files.len(),
            "scan complete"
        );
        Ok(outcome)
    }
}

/// Scan `root` with default settings.
pub fn scan(root: &Path, quiet: bool) -> Result<ScanOutcome> {
    TreeWalker::new(root).quiet(quiet).scan()
}
