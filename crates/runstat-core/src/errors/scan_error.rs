//! Scanner errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while discovering and reading log files.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("No logs matching '{pattern}' in {}", .dir.display())]
    NoInput { dir: PathBuf, pattern: String },

    #[error("Invalid file pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("IO error reading {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoInput { .. } => error_code::NO_INPUT,
            Self::InvalidPattern { .. } => error_code::INVALID_PATTERN,
            Self::IoError { .. } => error_code::IO_ERROR,
        }
    }

    fn exit_status(&self) -> i32 {
        match self {
            Self::NoInput { .. } => error_code::EXIT_NO_INPUT,
            _ => error_code::EXIT_USAGE,
        }
    }
}
