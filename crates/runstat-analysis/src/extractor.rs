//! Metric extraction from free-text benchmark logs.
//!
//! A run log carries up to three metrics:
//! - `Speed: <n> MKeys/s` lines, one per iteration (warm-up included)
//! - a `/usr/bin/time` footer with `<[M:]SS.ss> real`
//! - the same footer's `<n>k RSS`
//!
//! Throughput takes the maximum over every line; warm-up passes are slower,
//! so the peak is the demonstrated rate. Wall-clock and RSS take the first
//! match in the whole text. Extraction never fails on content: undecodable
//! bytes are dropped and anything not found is `None`.

use std::path::Path;

use regex::Regex;
use runstat_core::errors::ScanError;
use runstat_core::types::MetricSample;

const SPEED_PATTERN: &str = r"(?i)Speed:\s*([0-9]+(?:\.[0-9]+)?)\s*MKeys/s";
const REAL_PATTERN: &str = r"((?:[0-9]+:)?[0-9]+\.[0-9]+)\s+real";
const RSS_PATTERN: &str = r"(?i)(?:^|\s)([0-9]+)k\s+RSS";

/// Compiled extraction patterns. Build once, share by reference.
#[derive(Debug, Clone)]
pub struct MetricExtractor {
    speed: Regex,
    real: Regex,
    rss: Regex,
}

impl Default for MetricExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricExtractor {
    pub fn new() -> Self {
        Self {
            speed: Regex::new(SPEED_PATTERN).expect("speed pattern is valid"),
            real: Regex::new(REAL_PATTERN).expect("real-time pattern is valid"),
            rss: Regex::new(RSS_PATTERN).expect("rss pattern is valid"),
        }
    }

    /// Extract all metrics from decoded log text.
    pub fn extract(&self, text: &str) -> MetricSample {
        MetricSample {
            throughput: self.peak_throughput(text),
            wallclock_seconds: self.wallclock_seconds(text),
            peak_memory_kb: self.peak_memory_kb(text),
        }
    }

    /// Extract from raw bytes, dropping invalid UTF-8 sequences.
    pub fn extract_bytes(&self, bytes: &[u8]) -> MetricSample {
        self.extract(&decode_lossy(bytes))
    }

    /// Read `path` in full and extract. Only I/O can fail.
    pub fn extract_file(&self, path: &Path) -> Result<MetricSample, ScanError> {
        let bytes = std::fs::read(path).map_err(|source| ScanError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.extract_bytes(&bytes))
    }

    /// Maximum `Speed:` value over all lines; first marker per line.
    pub fn peak_throughput(&self, text: &str) -> Option<f64> {
        text.split(['\n', '\r'])
            .filter_map(|line| self.speed.captures(line))
            .filter_map(|caps| caps[1].parse::<f64>().ok())
            .fold(None, |peak, v| match peak {
                Some(p) if p >= v => Some(p),
                _ => Some(v),
            })
    }

    /// First `<time> real` footer, in seconds.
    pub fn wallclock_seconds(&self, text: &str) -> Option<f64> {
        let caps = self.real.captures(text)?;
        parse_elapsed(&caps[1])
    }

    /// First `<n>k RSS` marker, in kilobytes.
    pub fn peak_memory_kb(&self, text: &str) -> Option<u64> {
        let caps = self.rss.captures(text)?;
        caps[1].parse().ok()
    }
}

/// `MM:SS.ss` or `SS.ss` → seconds.
fn parse_elapsed(s: &str) -> Option<f64> {
    match s.split_once(':') {
        Some((minutes, seconds)) => {
            let minutes: f64 = minutes.parse().ok()?;
            let seconds: f64 = seconds.parse().ok()?;
            Some(minutes * 60.0 + seconds)
        }
        None => s.parse().ok(),
    }
}

/// Decode UTF-8, skipping invalid sequences instead of substituting them.
fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> MetricExtractor {
        MetricExtractor::new()
    }

    #[test]
    fn test_peak_throughput_takes_max() {
        let log = "Speed: 812.5 MKeys/s\nSpeed: 1290 MKeys/s\nSpeed: 1288.25 MKeys/s\n";
        assert_eq!(extractor().peak_throughput(log), Some(1290.0));
    }

    #[test]
    fn test_throughput_case_insensitive() {
        let log = "GPU0 SPEED:1500.5 mkeys/s\n";
        assert_eq!(extractor().peak_throughput(log), Some(1500.5));
    }

    #[test]
    fn test_throughput_absent() {
        assert_eq!(extractor().peak_throughput("Speed: fast\n"), None);
        assert_eq!(extractor().peak_throughput(""), None);
    }

    #[test]
    fn test_throughput_only_first_marker_per_line() {
        let log = "Speed: 10 MKeys/s | Speed: 99 MKeys/s\n";
        assert_eq!(extractor().peak_throughput(log), Some(10.0));
    }

    #[test]
    fn test_throughput_does_not_span_lines() {
        let log = "Speed:\n42 MKeys/s\n";
        assert_eq!(extractor().peak_throughput(log), None);
        let log = "Speed:\r\n42 MKeys/s\r\nSpeed: 7 MKeys/s\r\n";
        assert_eq!(extractor().peak_throughput(log), Some(7.0));
    }

    #[test]
    fn test_wallclock_minutes_seconds() {
        assert_eq!(extractor().wallclock_seconds("1:05.50 real 204800k RSS"), Some(65.5));
    }

    #[test]
    fn test_wallclock_seconds_only() {
        assert_eq!(extractor().wallclock_seconds("12.34 real"), Some(12.34));
    }

    #[test]
    fn test_wallclock_first_match_wins() {
        let log = "0:10.00 real\n...\n0:20.00 real\n";
        assert_eq!(extractor().wallclock_seconds(log), Some(10.0));
    }

    #[test]
    fn test_wallclock_requires_fraction() {
        assert_eq!(extractor().wallclock_seconds("12 real"), None);
        assert_eq!(extractor().wallclock_seconds("12.0 REAL"), None);
    }

    #[test]
    fn test_memory_marker() {
        let log = "0:28.40 real  204800k RSS  0 in KB  8 out KB\n";
        assert_eq!(extractor().peak_memory_kb(log), Some(204800));
    }

    #[test]
    fn test_memory_at_start_of_text() {
        assert_eq!(extractor().peak_memory_kb("204800k RSS"), Some(204800));
        assert_eq!(extractor().peak_memory_kb("x 512K rss"), Some(512));
    }

    #[test]
    fn test_memory_glued_to_word_rejected() {
        assert_eq!(extractor().peak_memory_kb("x204800k RSS"), None);
    }

    #[test]
    fn test_memory_first_match_wins() {
        assert_eq!(extractor().peak_memory_kb(" 1k RSS\n 2k RSS"), Some(1));
    }

    #[test]
    fn test_memory_overflow_is_absent() {
        let log = " 99999999999999999999999k RSS";
        assert_eq!(extractor().peak_memory_kb(log), None);
    }

    #[test]
    fn test_extract_bytes_drops_invalid_utf8() {
        let mut bytes = b"Speed:".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe]);
        bytes.extend_from_slice(b" 33.5 MKeys/s\n\x80\x81 1:00.00 real 1024k RSS\n");
        let sample = extractor().extract_bytes(&bytes);
        assert_eq!(sample.throughput, Some(33.5));
        assert_eq!(sample.wallclock_seconds, Some(60.0));
        assert_eq!(sample.peak_memory_kb, Some(1024));
    }

    #[test]
    fn test_extract_garbage_yields_empty_sample() {
        let sample = extractor().extract_bytes(&[0u8, 159, 146, 150, 0xc3, 0x28]);
        assert!(sample.is_empty());
    }

    #[test]
    fn test_parse_elapsed() {
        assert_eq!(parse_elapsed("0:28.40"), Some(28.4));
        assert_eq!(parse_elapsed("2:00.25"), Some(120.25));
        assert_eq!(parse_elapsed("7.5"), Some(7.5));
    }
}
