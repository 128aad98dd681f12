//! Error types for reelmatch operations.
//!
//! Provides rich error context for library consumers.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, RecommendError>;

/// Main error type for reelmatch operations.
///
/// # Examples
///
/// ```
/// use reelmatch::error::RecommendError;
///
/// let err = RecommendError::DimensionMismatch {
///     expected: "1x120".to_string(),
///     actual: "1x80".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Error)]
pub enum RecommendError {
    /// Vector or matrix dimensions don't match for the operation.
    #[error("Vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Input data cannot be used (empty corpus, bad column, ...).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A vectorizer or recommender was used before being fitted.
    #[error("Not fitted: {0}")]
    NotFitted(String),

    /// A required CSV column is absent from the header row.
    #[error("Missing column '{column}' in {}", .path.display())]
    MissingColumn {
        /// Column name
        column: String,
        /// File that was being read
        path: PathBuf,
    },

    /// CSV reading or writing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Regular expression failed to compile.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// I/O error (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
