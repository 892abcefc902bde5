//! Run file naming contract: `<tag>_dp<n>_tb<n>_tr<n>_run<n><suffix>`.
//!
//! The tag is free-form and ignored. `dp`, `tb`, `tr` form the
//! [`GroupKey`]; `run` only tells repeated trials apart. The pattern is
//! anchored at both ends, so anything between the run index and the suffix
//! rejects the name.

use regex::Regex;
use runstat_core::constants::DEFAULT_LOG_SUFFIX;
use runstat_core::errors::ConfigError;
use runstat_core::types::{GroupKey, RunName};

/// Parses run file basenames into grouping keys.
#[derive(Debug, Clone)]
pub struct ConfigKeyParser {
    name: Regex,
}

impl Default for ConfigKeyParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigKeyParser {
    /// Parser for the default `.log` suffix.
    pub fn new() -> Self {
        Self {
            name: Regex::new(&name_pattern(DEFAULT_LOG_SUFFIX))
                .expect("default naming pattern is valid"),
        }
    }

    /// Parser for a custom literal suffix (e.g. `.txt`).
    pub fn with_suffix(suffix: &str) -> Result<Self, ConfigError> {
        let name = Regex::new(&name_pattern(suffix)).map_err(|e| ConfigError::InvalidValue {
            field: "scan.log_suffix".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { name })
    }

    /// Grouping key for `basename`, or `None` if it breaks the contract.
    pub fn parse_key(&self, basename: &str) -> Option<GroupKey> {
        self.parse_name(basename).map(|n| n.key)
    }

    /// Full parse including the run index.
    pub fn parse_name(&self, basename: &str) -> Option<RunName> {
        let caps = self.name.captures(basename)?;
        let field = |name: &str| caps.name(name)?.as_str().parse::<u64>().ok();
        Some(RunName {
            key: GroupKey::new(field("dp")?, field("tb")?, field("tr")?),
            run: field("run")?,
        })
    }
}

fn name_pattern(suffix: &str) -> String {
    format!(
        r"^.*?_dp(?P<dp>[0-9]+)_tb(?P<tb>[0-9]+)_tr(?P<tr>[0-9]+)_run(?P<run>[0-9]+){}$",
        regex::escape(suffix)
    )
}
