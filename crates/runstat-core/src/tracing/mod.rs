//! Observability for runstat.
//! `tracing` crate with `EnvFilter`; all log output goes to stderr.

pub mod setup;

pub use setup::init_tracing;
