use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TartyError {
    #[error("Scan root not found: {}", path.display())]
    RootNotFound { path: PathBuf },
    #[error("Scan root is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Cannot write archive {}: {source}", path.display())]
    Destination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Config error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TartyError>;
