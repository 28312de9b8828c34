//! Error types for mirror-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from mirror-core
    #[error(transparent)]
    Core(#[from] mirror_core::Error),

    /// Error from mirror-fs
    #[error(transparent)]
    Fs(#[from] mirror_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Interactive prompt error
    #[error("Interactive prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// Log subscriber could not be installed
    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// Follow-up guidance shown under the error, if any
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::Core(mirror_core::Error::SourceNotFound { path }) => Some(format!(
                "Create the canonical source directory with `mkdir -p {}` or run `skill-mirror init`.",
                path.display()
            )),
            Self::Core(mirror_core::Error::UnknownTarget { .. }) => {
                Some("Run `skill-mirror targets` to list configured targets.".to_string())
            }
            _ => None,
        }
    }
}
