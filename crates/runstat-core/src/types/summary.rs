//! Aggregated per-configuration statistics.

use serde::{Deserialize, Serialize};

use super::metrics::GroupKey;

/// A computed statistic.
///
/// Integer series keep integer results where the math allows it (the odd-count
/// median of memory readings is one of the readings); everything else is a
/// float. The distinction drives rendering: integers print as-is, floats with
/// a fixed number of decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Stat {
    Int(u64),
    Float(f64),
}

impl Stat {
    /// Render for tabular output.
    pub fn render(&self, precision: usize) -> String {
        match *self {
            Self::Int(v) => v.to_string(),
            Self::Float(v) => format!("{v:.precision$}"),
        }
    }
}

/// One output row: the statistics for a single configuration.
/// Each statistic is `None` when no run in the bucket reported that metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub key: GroupKey,
    pub run_count: usize,
    pub median_throughput: Option<Stat>,
    pub max_throughput: Option<Stat>,
    pub median_wallclock: Option<Stat>,
    pub median_peak_memory: Option<Stat>,
}

impl SummaryRow {
    /// Row for a bucket in which nothing could be extracted.
    pub fn empty(key: GroupKey, run_count: usize) -> Self {
        Self {
            key,
            run_count,
            median_throughput: None,
            max_throughput: None,
            median_wallclock: None,
            median_peak_memory: None,
        }
    }
}
