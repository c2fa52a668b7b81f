//! Error types for harness and scoring operations

use std::path::PathBuf;
use thiserror::Error;

/// Result type for benchmark operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur while benchmarking or scoring
///
/// Failures of the measured external process are deliberately absent:
/// the harness records elapsed time regardless of exit status.
#[derive(Error, Debug)]
pub enum BenchError {
    /// IO error (file not found, permission denied, etc.)
    #[error("IO error for path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error while loading a dataset
    #[error("failed to read CSV from '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Data validation error
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Chart rendering or persistence error
    #[error("failed to render chart: {0}")]
    Plot(String),

    /// SVM training or cross-validation error from the numerical library
    #[error("svm scoring failed: {0}")]
    Svm(String),
}

impl BenchError {
    /// Attach a path to a bare IO error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
