//! Error types for mirror-core

use std::path::PathBuf;

/// Result type for mirror-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a whole invocation.
///
/// Pair-level problems never surface here; the engine records them as
/// failed outcomes in the report instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The canonical source directory does not exist
    #[error("Canonical source directory not found at {path}")]
    SourceNotFound { path: PathBuf },

    /// The canonical source path exists but is not a directory
    #[error("Canonical source {path} is not a directory")]
    SourceNotDirectory { path: PathBuf },

    /// A selected target name is not configured
    #[error("Unknown target '{name}' (available: {available})")]
    UnknownTarget { name: String, available: String },

    /// The configured source path is unusable
    #[error("Invalid source path '{path}': {message}")]
    InvalidSource { path: PathBuf, message: String },

    /// A target definition is unusable
    #[error("Invalid target '{name}': {message}")]
    InvalidTarget { name: String, message: String },

    /// Configuration file could not be parsed
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from mirror-fs
    #[error(transparent)]
    Fs(#[from] mirror_fs::Error),

    /// TOML serialization error
    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
}
