//! Shared types, configuration and errors for tarty.

pub mod config;
pub mod error;
pub mod types;

pub use config::TartyConfig;
pub use error::{Result, TartyError};
pub use types::{Category, CommentStyle, FileKind, FileVerdict, Layout, ProcessedFile};
