//! Report rendering errors.

use super::error_code::{self, ErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Unknown report format '{format}' (available: {available})")]
    UnknownFormat { format: String, available: String },

    #[error("Report serialization failed: {0}")]
    Serialization(String),
}

impl ErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        error_code::REPORT_ERROR
    }
}
