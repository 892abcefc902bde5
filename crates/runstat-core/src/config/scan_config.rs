//! Scan configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for log discovery and metric extraction.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory holding the run logs. No default: must come from somewhere.
    pub log_dir: Option<PathBuf>,
    /// Glob selecting candidate files inside `log_dir`. Default: "*.log".
    pub pattern: Option<String>,
    /// Literal suffix closing the run naming contract. Default: ".log".
    pub log_suffix: Option<String>,
    /// Extract files on the rayon pool. Default: false.
    pub parallel: Option<bool>,
    /// Worker threads for parallel extraction (0 = auto-detect). Default: 0.
    pub threads: Option<usize>,
}

impl ScanConfig {
    /// Returns the effective file pattern, defaulting to "*.log".
    pub fn effective_pattern(&self) -> &str {
        self.pattern.as_deref().unwrap_or(constants::DEFAULT_PATTERN)
    }

    /// Returns the effective naming-contract suffix, defaulting to ".log".
    pub fn effective_log_suffix(&self) -> &str {
        self.log_suffix
            .as_deref()
            .unwrap_or(constants::DEFAULT_LOG_SUFFIX)
    }

    /// Returns whether extraction runs in parallel, defaulting to false.
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(false)
    }

    /// Returns the effective thread count, defaulting to 0 (auto).
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(constants::DEFAULT_THREADS)
    }
}
