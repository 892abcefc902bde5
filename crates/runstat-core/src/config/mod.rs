//! Configuration system for runstat.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod report_config;
pub mod runstat_config;
pub mod scan_config;

pub use report_config::ReportConfig;
pub use runstat_config::{CliOverrides, RunstatConfig};
pub use scan_config::ScanConfig;
