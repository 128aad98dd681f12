//! Error types for reelmatch-cli

use reelmatch::RecommendError;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// Input file not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Invalid command-line value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed input data
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Library error
    #[error("{0}")]
    Recommend(RecommendError),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::Recommend(_) => ExitCode::from(1),
            Self::InvalidArgument(_) => ExitCode::from(2),
            Self::FileNotFound(_) => ExitCode::from(3),
            Self::InvalidData(_) => ExitCode::from(4),
            Self::Io(_) => ExitCode::from(7),
        }
    }
}

impl From<RecommendError> for CliError {
    fn from(e: RecommendError) -> Self {
        match e {
            RecommendError::Io(io) => Self::Io(io),
            RecommendError::Csv(_) | RecommendError::MissingColumn { .. } => {
                Self::InvalidData(e.to_string())
            }
            other => Self::Recommend(other),
        }
    }
}
