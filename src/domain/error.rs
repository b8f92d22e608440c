use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for datasyncer operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The containers root holds no entry with the container extension.
    #[error("No containers found in {}", .root.display())]
    NoContainersFound { root: PathBuf },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind` view for callers matching on failure class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_) => io::ErrorKind::InvalidInput,
            AppError::NoContainersFound { .. } => io::ErrorKind::NotFound,
            AppError::TomlParseError(_) => io::ErrorKind::InvalidData,
        }
    }
}
