//! # runstat-analysis
//!
//! The log-to-summary pipeline:
//! - [`extractor`]: free-text run log → [`MetricSample`](runstat_core::types::MetricSample)
//! - [`naming`]: run file name → [`GroupKey`](runstat_core::types::GroupKey)
//! - [`aggregation`]: keyed samples → per-configuration summary rows
//! - [`reporters`]: summary rows → CSV / JSON text
//! - [`scanner`]: log directory + glob → sorted candidate paths
//! - [`pipeline`]: the driver wiring the above together

pub mod aggregation;
pub mod extractor;
pub mod naming;
pub mod pipeline;
pub mod reporters;
pub mod scanner;

pub use aggregation::Aggregator;
pub use extractor::MetricExtractor;
pub use naming::ConfigKeyParser;
pub use pipeline::{Summary, SummaryPipeline};
