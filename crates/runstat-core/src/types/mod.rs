//! Core types shared across the runstat pipeline.

pub mod collections;
pub mod metrics;
pub mod summary;

pub use metrics::{GroupKey, MetricSample, RunName};
pub use summary::{Stat, SummaryRow};
