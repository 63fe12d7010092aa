use crate::error::{Result, TartyError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Bytes inspected when sniffing for binary content.
pub const DEFAULT_PROBE_LEN: usize = 1024;

/// Ignore-rule file looked up at the scan root.
pub const DEFAULT_IGNORE_FILE: &str = ".gitignore";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TartyConfig {
    pub ignore_file: String,
    pub probe_len: usize,
    pub quiet: bool,
}

impl TartyConfig {
    /// Load a config from a JSON file. Missing keys take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| TartyError::Config(format!("{}: {e}", path.display())))?;
        let config: Self = serde_json::from_str(&raw)?;
        if config.probe_len == 0 {
            return Err(TartyError::Config("probe_len must be positive".into()));
        }
        Ok(config)
    }
}

impl Default for TartyConfig {
    fn default() -> Self {
        Self {
            ignore_file: DEFAULT_IGNORE_FILE.into(),
            probe_len: DEFAULT_PROBE_LEN,
            quiet: false,
        }
    }
}
