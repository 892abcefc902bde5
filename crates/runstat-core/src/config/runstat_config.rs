//! Top-level runstat configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ReportConfig, ScanConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`RUNSTAT_*`)
/// 3. Project config (`runstat.toml` in the working directory)
/// 4. User config (`~/.runstat/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RunstatConfig {
    pub scan: ScanConfig,
    pub report: ReportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub log_dir: Option<PathBuf>,
    pub pattern: Option<String>,
    pub log_suffix: Option<String>,
    pub parallel: Option<bool>,
    pub threads: Option<usize>,
    pub format: Option<String>,
    pub precision: Option<usize>,
}

impl RunstatConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(constants::PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &RunstatConfig) -> Result<(), ConfigError> {
        if let Some(ref pattern) = config.scan.pattern {
            if pattern.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.pattern".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref suffix) = config.scan.log_suffix {
            if suffix.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.log_suffix".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(precision) = config.report.precision {
            if precision > constants::MAX_PRECISION {
                return Err(ConfigError::ValidationFailed {
                    field: "report.precision".to_string(),
                    message: format!("must be at most {}", constants::MAX_PRECISION),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.runstat/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut RunstatConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: RunstatConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a `Some` value.
    fn merge(base: &mut RunstatConfig, other: &RunstatConfig) {
        // Scan
        if other.scan.log_dir.is_some() {
            base.scan.log_dir = other.scan.log_dir.clone();
        }
        if other.scan.pattern.is_some() {
            base.scan.pattern = other.scan.pattern.clone();
        }
        if other.scan.log_suffix.is_some() {
            base.scan.log_suffix = other.scan.log_suffix.clone();
        }
        if other.scan.parallel.is_some() {
            base.scan.parallel = other.scan.parallel;
        }
        if other.scan.threads.is_some() {
            base.scan.threads = other.scan.threads;
        }

        // Report
        if other.report.format.is_some() {
            base.report.format = other.report.format.clone();
        }
        if other.report.precision.is_some() {
            base.report.precision = other.report.precision;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `RUNSTAT_SCAN_PATTERN`, `RUNSTAT_REPORT_FORMAT`, etc.
    /// Values that fail to parse are ignored.
    fn apply_env_overrides(config: &mut RunstatConfig) {
        if let Some(val) = std::env::var_os("RUNSTAT_SCAN_LOG_DIR") {
            config.scan.log_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("RUNSTAT_SCAN_PATTERN") {
            config.scan.pattern = Some(val);
        }
        if let Ok(val) = std::env::var("RUNSTAT_SCAN_PARALLEL") {
            if let Ok(v) = val.parse::<bool>() {
                config.scan.parallel = Some(v);
            }
        }
        if let Ok(val) = std::env::var("RUNSTAT_SCAN_THREADS") {
            if let Ok(v) = val.parse::<usize>() {
                config.scan.threads = Some(v);
            }
        }
        if let Ok(val) = std::env::var("RUNSTAT_REPORT_FORMAT") {
            config.report.format = Some(val);
        }
        if let Ok(val) = std::env::var("RUNSTAT_REPORT_PRECISION") {
            if let Ok(v) = val.parse::<usize>() {
                config.report.precision = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut RunstatConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.log_dir {
            config.scan.log_dir = Some(v.clone());
        }
        if let Some(ref v) = cli.pattern {
            config.scan.pattern = Some(v.clone());
        }
        if let Some(ref v) = cli.log_suffix {
            config.scan.log_suffix = Some(v.clone());
        }
        if let Some(v) = cli.parallel {
            config.scan.parallel = Some(v);
        }
        if let Some(v) = cli.threads {
            config.scan.threads = Some(v);
        }
        if let Some(ref v) = cli.format {
            config.report.format = Some(v.clone());
        }
        if let Some(v) = cli.precision {
            config.report.precision = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level config directory: `~/.runstat/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".runstat"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
