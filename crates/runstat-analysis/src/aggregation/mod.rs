//! Grouped aggregation: keyed samples → one summary row per configuration.

pub mod aggregator;
pub mod stats;

pub use aggregator::Aggregator;
