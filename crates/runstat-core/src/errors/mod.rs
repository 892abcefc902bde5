//! Error handling for runstat.
//! One error enum per subsystem, `thiserror` only.
//!
//! Only pipeline-level conditions are fatal. Unparseable file names and
//! missing metrics are not errors at all: they surface as absent data.

pub mod config_error;
pub mod error_code;
pub mod pipeline_error;
pub mod report_error;
pub mod scan_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use pipeline_error::{PipelineError, PipelineResult};
pub use report_error::ReportError;
pub use scan_error::ScanError;
