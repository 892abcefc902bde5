//! The summary pipeline: discover → key → extract → aggregate.
//!
//! Only discovery can fail the run. Unkeyed files are skipped, unreadable
//! keyed files still count as a run with no metrics and are reported as
//! non-fatal errors.

use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use runstat_core::config::RunstatConfig;
use runstat_core::errors::{PipelineError, PipelineResult, ScanError};
use runstat_core::types::collections::FxHashMap;
use runstat_core::types::{GroupKey, MetricSample, RunName, SummaryRow};

use crate::aggregation::Aggregator;
use crate::extractor::MetricExtractor;
use crate::naming::ConfigKeyParser;
use crate::scanner;

/// Output of one pipeline run.
#[derive(Debug, Default)]
pub struct Summary {
    /// One row per configuration, unordered.
    pub rows: FxHashMap<GroupKey, SummaryRow>,
    /// Files matched by the glob.
    pub files_matched: usize,
    /// Matched files rejected by the naming contract.
    pub skipped: usize,
}

/// Owns the compiled patterns; build once, run as often as needed.
pub struct SummaryPipeline {
    extractor: MetricExtractor,
    key_parser: ConfigKeyParser,
    pattern: String,
    parallel: bool,
    threads: usize,
}

impl SummaryPipeline {
    pub fn new(config: &RunstatConfig) -> Result<Self, PipelineError> {
        Ok(Self {
            extractor: MetricExtractor::new(),
            key_parser: ConfigKeyParser::with_suffix(config.scan.effective_log_suffix())?,
            pattern: config.scan.effective_pattern().to_string(),
            parallel: config.scan.effective_parallel(),
            threads: config.scan.effective_threads(),
        })
    }

    /// Summarize the logs in the configured `scan.log_dir`.
    pub fn run_configured(
        &self,
        config: &RunstatConfig,
    ) -> Result<PipelineResult<Summary>, PipelineError> {
        let dir = config
            .scan
            .log_dir
            .as_deref()
            .ok_or(PipelineError::MissingLogDir)?;
        self.run(dir)
    }

    /// Summarize the logs in `dir`.
    pub fn run(&self, dir: &Path) -> Result<PipelineResult<Summary>, PipelineError> {
        let span = tracing::info_span!("summarize", dir = %dir.display(), pattern = %self.pattern);
        let _guard = span.enter();

        let start = Instant::now();
        let files = scanner::discover(dir, &self.pattern)?;
        let files_matched = files.len();
        tracing::info!(
            files_matched,
            discovery_duration = start.elapsed().as_millis() as u64,
            "discovery complete"
        );

        let keyed = self.key_files(files);
        let skipped = files_matched - keyed.len();
        tracing::info!(files_skipped = skipped, "naming contract applied");

        let start = Instant::now();
        let extracted = self.extract_all(&keyed);
        tracing::info!(
            extraction_duration = start.elapsed().as_millis() as u64,
            "extraction complete"
        );

        let start = Instant::now();
        let mut result = PipelineResult::default();
        let mut aggregator = Aggregator::new();
        for ((path, name), outcome) in keyed.iter().zip(extracted) {
            let sample = match outcome {
                Ok(sample) => {
                    if sample.is_empty() {
                        tracing::debug!(path = %path.display(), "no metrics found");
                    }
                    sample
                }
                Err(e) => {
                    tracing::warn!(error = %e, "counting unreadable log as a run without metrics");
                    result.add_error(e);
                    MetricSample::EMPTY
                }
            };
            tracing::trace!(key = %name.key, run = name.run, ?sample, "sample");
            aggregator.push(name.key, &sample);
        }
        let group_count = aggregator.group_count();
        let rows = aggregator.finish();
        tracing::info!(
            group_count,
            aggregation_duration = start.elapsed().as_millis() as u64,
            "aggregation complete"
        );

        result.data = Summary {
            rows,
            files_matched,
            skipped,
        };
        Ok(result)
    }

    /// Pair each path with its parsed name, dropping non-conforming files.
    fn key_files(&self, files: Vec<PathBuf>) -> Vec<(PathBuf, RunName)> {
        files
            .into_iter()
            .filter_map(|path| {
                let basename = path.file_name()?.to_string_lossy().into_owned();
                match self.key_parser.parse_name(&basename) {
                    Some(name) => Some((path, name)),
                    None => {
                        tracing::debug!(file = %basename, "name does not match run contract");
                        None
                    }
                }
            })
            .collect()
    }

    /// Extract every keyed file. Results come back in input order in both
    /// modes, so the aggregation sees the same sequence either way.
    fn extract_all(
        &self,
        keyed: &[(PathBuf, RunName)],
    ) -> Vec<Result<MetricSample, ScanError>> {
        if !self.parallel {
            return keyed
                .iter()
                .map(|(path, _)| self.extractor.extract_file(path))
                .collect();
        }

        let extract = || -> Vec<Result<MetricSample, ScanError>> {
            keyed
                .par_iter()
                .map(|(path, _)| self.extractor.extract_file(path))
                .collect()
        };

        if self.threads == 0 {
            return extract();
        }
        match rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
        {
            Ok(pool) => pool.install(extract),
            Err(e) => {
                tracing::warn!(error = %e, "falling back to the global rayon pool");
                extract()
            }
        }
    }
}
