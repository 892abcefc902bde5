//! # runstat-core
//!
//! Shared foundation for the runstat workspace: the metric and grouping
//! types, one error enum per subsystem, layered TOML configuration,
//! tracing setup, and compiled defaults.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
