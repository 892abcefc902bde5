//! Report configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for summary rendering.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format: "csv" | "json". Default: "csv".
    pub format: Option<String>,
    /// Decimal digits for floating statistics. Default: 3.
    pub precision: Option<usize>,
}

impl ReportConfig {
    /// Returns the effective output format, defaulting to "csv".
    pub fn effective_format(&self) -> &str {
        self.format.as_deref().unwrap_or(constants::DEFAULT_FORMAT)
    }

    /// Returns the effective precision, defaulting to 3.
    pub fn effective_precision(&self) -> usize {
        self.precision.unwrap_or(constants::DEFAULT_PRECISION)
    }
}
