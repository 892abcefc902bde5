//! Buckets samples by configuration and folds each bucket into a row.
//!
//! Buckets are created lazily, so a key never appears without at least one
//! sample. Each metric's present values are collected on their own: a run
//! missing its wall-clock footer still contributes its throughput. Medians
//! sort their input, so rows do not depend on insertion or merge order.

use runstat_core::types::collections::FxHashMap;
use runstat_core::types::{GroupKey, MetricSample, Stat, SummaryRow};

use super::stats::{max_f64, median_f64, median_u64};

#[derive(Debug, Default)]
struct Bucket {
    run_count: usize,
    throughputs: Vec<f64>,
    wallclocks: Vec<f64>,
    memories: Vec<u64>,
}

impl Bucket {
    fn push(&mut self, sample: &MetricSample) {
        self.run_count += 1;
        if let Some(v) = sample.throughput {
            self.throughputs.push(v);
        }
        if let Some(v) = sample.wallclock_seconds {
            self.wallclocks.push(v);
        }
        if let Some(v) = sample.peak_memory_kb {
            self.memories.push(v);
        }
    }

    fn absorb(&mut self, other: Bucket) {
        self.run_count += other.run_count;
        self.throughputs.extend(other.throughputs);
        self.wallclocks.extend(other.wallclocks);
        self.memories.extend(other.memories);
    }

    fn summarize(&self, key: GroupKey) -> SummaryRow {
        SummaryRow {
            key,
            run_count: self.run_count,
            median_throughput: median_f64(&self.throughputs).map(Stat::Float),
            max_throughput: max_f64(&self.throughputs).map(Stat::Float),
            median_wallclock: median_f64(&self.wallclocks).map(Stat::Float),
            median_peak_memory: median_u64(&self.memories),
        }
    }
}

/// Accumulates keyed samples. Use [`Aggregator::aggregate`] for a one-shot
/// fold, or `push`/`merge`/`finish` to build partitions separately.
#[derive(Debug, Default)]
pub struct Aggregator {
    buckets: FxHashMap<GroupKey, Bucket>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold an ordered sequence of keyed samples into summary rows.
    pub fn aggregate(samples: &[(GroupKey, MetricSample)]) -> FxHashMap<GroupKey, SummaryRow> {
        let mut aggregator = Self::new();
        for (key, sample) in samples {
            aggregator.push(*key, sample);
        }
        aggregator.finish()
    }

    pub fn push(&mut self, key: GroupKey, sample: &MetricSample) {
        self.buckets.entry(key).or_default().push(sample);
    }

    /// Append-only union with another partition.
    pub fn merge(&mut self, other: Aggregator) {
        for (key, bucket) in other.buckets {
            self.buckets.entry(key).or_default().absorb(bucket);
        }
    }

    /// Number of distinct configurations seen so far.
    pub fn group_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn finish(self) -> FxHashMap<GroupKey, SummaryRow> {
        self.buckets
            .into_iter()
            .map(|(key, bucket)| (key, bucket.summarize(key)))
            .collect()
    }
}
