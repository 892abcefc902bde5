//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the runstat tracing/logging system.
///
/// Reads the `RUNSTAT_LOG` environment variable for per-crate log levels.
/// Format: `RUNSTAT_LOG=runstat_analysis=debug,runstat_core=info`
///
/// Falls back to `warn` if `RUNSTAT_LOG` is not set or is invalid.
/// Output is written to stderr so it never interleaves with the report on
/// stdout. Calling this more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
