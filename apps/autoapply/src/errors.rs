use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Application-level error type.
/// Every variant is fatal for the current pass and stops the scheduler.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot read input file {}: {source}", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed jobs file {}: {reason}", path.display())]
    MalformedInput { path: PathBuf, reason: String },

    #[error("Cannot append to log file {}: {source}", path.display())]
    LogWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AppError {
    pub fn input_not_found(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::InputNotFound {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        AppError::MalformedInput {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn log_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::LogWriteFailure {
            path: path.into(),
            source,
        }
    }
}
