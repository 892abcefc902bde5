//! `runstat` — summarize a directory of benchmark run logs.
//!
//! Usage: `runstat <LOG_DIR> [PATTERN] [--format csv|json]`
//!
//! Prints the summary table on stdout. Diagnostics go to stderr; a missing
//! directory argument exits 1, a directory with no matching logs exits 2.

mod cli;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use runstat_analysis::reporters;
use runstat_analysis::SummaryPipeline;
use runstat_core::config::RunstatConfig;
use runstat_core::errors::error_code::{EXIT_OK, EXIT_USAGE};
use runstat_core::errors::{ErrorCode, PipelineError};

use cli::Cli;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help / --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return exit_code(EXIT_USAGE);
        }
    };

    runstat_core::tracing::init_tracing();

    match run(&cli) {
        Ok(()) => exit_code(EXIT_OK),
        Err(e) => {
            eprintln!("runstat: {}", e.diagnostic());
            if matches!(e, PipelineError::MissingLogDir) {
                eprintln!("Usage: runstat <LOG_DIR> [PATTERN]");
            }
            exit_code(e.exit_status())
        }
    }
}

fn run(cli: &Cli) -> Result<(), PipelineError> {
    let root = std::env::current_dir().unwrap_or_default();
    let config = RunstatConfig::load(&root, Some(&cli.overrides()))?;

    // Resolve the reporter before touching any log.
    let reporter = reporters::reporter_for(&config.report)?;
    let pipeline = SummaryPipeline::new(&config)?;
    let result = pipeline.run_configured(&config)?;

    if !result.is_clean() {
        tracing::warn!(
            errors = result.error_count(),
            "some logs could not be read; they count as runs without metrics"
        );
    }

    let output = reporter.generate(&result.data.rows)?;
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout.write_all(output.as_bytes()).and_then(|()| stdout.flush()) {
        // Closed pipe (e.g. `| head`): nothing useful left to do.
        tracing::debug!(error = %e, "stdout closed");
    }
    Ok(())
}

fn exit_code(status: i32) -> ExitCode {
    ExitCode::from(u8::try_from(status).unwrap_or(1))
}
