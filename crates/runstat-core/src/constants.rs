//! Shared constants for runstat.

/// Default glob used to select log files inside the log directory.
pub const DEFAULT_PATTERN: &str = "*.log";

/// Default literal suffix that closes the run file naming contract.
pub const DEFAULT_LOG_SUFFIX: &str = ".log";

/// Default number of decimal digits for floating statistics.
pub const DEFAULT_PRECISION: usize = 3;

/// Largest precision accepted by config validation.
pub const MAX_PRECISION: usize = 12;

/// Default number of threads for parallel extraction (0 = rayon default).
pub const DEFAULT_THREADS: usize = 0;

/// Default report format.
pub const DEFAULT_FORMAT: &str = "csv";

/// Project config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "runstat.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "RUNSTAT_LOG";

/// Fixed header of the CSV summary table.
pub const CSV_HEADER: &str =
    "dp,tame_bits,tame_ratio,runs,median_speed_MKeys,max_speed_MKeys,median_real_s,median_rss_kb";

/// Column names of the summary table, in output order.
pub const SUMMARY_COLUMNS: [&str; 8] = [
    "dp",
    "tame_bits",
    "tame_ratio",
    "runs",
    "median_speed_MKeys",
    "max_speed_MKeys",
    "median_real_s",
    "median_rss_kb",
];
