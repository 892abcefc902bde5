//! Per-run metric and grouping identity types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Metrics extracted from one run log. Every field is independently optional:
/// a log may report some metrics and not others.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    /// Peak throughput in MKeys/s.
    pub throughput: Option<f64>,
    /// Wall-clock time in seconds.
    pub wallclock_seconds: Option<f64>,
    /// Peak resident set size in kilobytes.
    pub peak_memory_kb: Option<u64>,
}

impl MetricSample {
    /// A sample with no metrics at all.
    pub const EMPTY: Self = Self {
        throughput: None,
        wallclock_seconds: None,
        peak_memory_kb: None,
    };

    /// True when no field could be extracted.
    pub fn is_empty(&self) -> bool {
        self.throughput.is_none()
            && self.wallclock_seconds.is_none()
            && self.peak_memory_kb.is_none()
    }
}

/// Benchmark configuration identity: `(dp, tb, tr)`.
///
/// Field order matters: the derived `Ord` is lexicographic on
/// `(dp, tb, tr)`, which is the report ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct GroupKey {
    pub dp: u64,
    pub tb: u64,
    pub tr: u64,
}

impl GroupKey {
    pub fn new(dp: u64, tb: u64, tr: u64) -> Self {
        Self { dp, tb, tr }
    }
}

impl From<(u64, u64, u64)> for GroupKey {
    fn from((dp, tb, tr): (u64, u64, u64)) -> Self {
        Self { dp, tb, tr }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dp{}/tb{}/tr{}", self.dp, self.tb, self.tr)
    }
}

/// Everything a run file name encodes. `run` tells repeated trials of the
/// same configuration apart and is not part of the grouping identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunName {
    pub key: GroupKey,
    pub run: u64,
}
