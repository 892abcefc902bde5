//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;
use runstat_core::config::CliOverrides;

#[derive(Parser, Debug)]
#[command(
    name = "runstat",
    version,
    about = "Summarize benchmark run logs: median/max throughput, wall-clock and RSS per configuration"
)]
pub struct Cli {
    /// Directory holding the run logs (`<tag>_dp<n>_tb<n>_tr<n>_run<n>.log`)
    pub log_dir: Option<PathBuf>,

    /// Glob selecting log files inside LOG_DIR [default: *.log]
    pub pattern: Option<String>,

    /// Output format: csv | json
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Decimal digits for floating statistics [default: 3]
    #[arg(long)]
    pub precision: Option<usize>,

    /// Literal file name suffix closing the naming contract [default: .log]
    #[arg(long)]
    pub suffix: Option<String>,

    /// Extract logs in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Worker threads for --parallel (0 = one per core)
    #[arg(long, requires = "parallel")]
    pub threads: Option<usize>,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            log_dir: self.log_dir.clone(),
            pattern: self.pattern.clone(),
            log_suffix: self.suffix.clone(),
            parallel: self.parallel.then_some(true),
            threads: self.threads,
            format: self.format.clone(),
            precision: self.precision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_dir_and_pattern() {
        let cli = Cli::try_parse_from(["runstat", "logs", "bench_*.log"]).unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.log_dir, Some(PathBuf::from("logs")));
        assert_eq!(overrides.pattern.as_deref(), Some("bench_*.log"));
        assert_eq!(overrides.parallel, None);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "runstat", "logs", "--format", "json", "--precision", "1", "--parallel", "--threads", "2",
        ])
        .unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.format.as_deref(), Some("json"));
        assert_eq!(overrides.precision, Some(1));
        assert_eq!(overrides.parallel, Some(true));
        assert_eq!(overrides.threads, Some(2));
    }

    #[test]
    fn test_threads_requires_parallel() {
        assert!(Cli::try_parse_from(["runstat", "logs", "--threads", "2"]).is_err());
    }

    #[test]
    fn test_dir_is_optional_at_parse_time() {
        let cli = Cli::try_parse_from(["runstat"]).unwrap();
        assert!(cli.log_dir.is_none());
    }
}
