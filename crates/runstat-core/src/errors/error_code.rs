//! ErrorCode trait: stable error codes and process exit statuses.

/// Every error enum implements this to expose a structured error code and
/// the exit status the CLI terminates with.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "NO_INPUT").
    fn error_code(&self) -> &'static str;

    /// Process exit status for this error.
    fn exit_status(&self) -> i32 {
        EXIT_USAGE
    }

    /// Returns the formatted diagnostic line: `[ERROR_CODE] message`.
    fn diagnostic(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const USAGE_ERROR: &str = "USAGE_ERROR";
pub const NO_INPUT: &str = "NO_INPUT";
pub const INVALID_PATTERN: &str = "INVALID_PATTERN";
pub const IO_ERROR: &str = "IO_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";

// Exit statuses.
pub const EXIT_OK: i32 = 0;
pub const EXIT_USAGE: i32 = 1;
pub const EXIT_NO_INPUT: i32 = 2;
