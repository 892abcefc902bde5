//! Reporters — output formats for summary rows.
//!
//! Every reporter emits rows in ascending [`GroupKey`] order, whatever
//! order the aggregation map holds them in.

pub mod csv;
pub mod json;

use runstat_core::config::ReportConfig;
use runstat_core::errors::ReportError;
use runstat_core::types::collections::FxHashMap;
use runstat_core::types::{GroupKey, SummaryRow};

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, rows: &FxHashMap<GroupKey, SummaryRow>) -> Result<String, ReportError>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str, precision: usize) -> Option<Box<dyn Reporter>> {
    match format {
        "csv" => Some(Box::new(csv::CsvReporter::new(precision))),
        "json" => Some(Box::new(json::JsonReporter::new(precision))),
        _ => None,
    }
}

/// Reporter selected by `config`, or `UnknownFormat`.
pub fn reporter_for(config: &ReportConfig) -> Result<Box<dyn Reporter>, ReportError> {
    let format = config.effective_format();
    create_reporter(format, config.effective_precision()).ok_or_else(|| {
        ReportError::UnknownFormat {
            format: format.to_string(),
            available: available_formats().join(", "),
        }
    })
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["csv", "json"]
}

/// Rows in ascending key order.
pub fn sorted_rows(rows: &FxHashMap<GroupKey, SummaryRow>) -> Vec<&SummaryRow> {
    let mut sorted: Vec<&SummaryRow> = rows.values().collect();
    sorted.sort_by_key(|row| row.key);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reporter_known_formats() {
        for format in available_formats() {
            let reporter = create_reporter(format, 3).unwrap();
            assert_eq!(reporter.name(), *format);
        }
        assert!(create_reporter("xml", 3).is_none());
    }

    #[test]
    fn test_reporter_for_unknown_format() {
        let config = ReportConfig {
            format: Some("yaml".to_string()),
            precision: None,
        };
        match reporter_for(&config) {
            Err(ReportError::UnknownFormat { format, available }) => {
                assert_eq!(format, "yaml");
                assert_eq!(available, "csv, json");
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(r) => panic!("unexpected reporter: {}", r.name()),
        }
    }

    #[test]
    fn test_sorted_rows_numeric_order() {
        let mut rows = FxHashMap::default();
        for key in [
            GroupKey::new(10, 0, 0),
            GroupKey::new(9, 5, 0),
            GroupKey::new(9, 0, 12),
            GroupKey::new(9, 0, 3),
        ] {
            rows.insert(key, SummaryRow::empty(key, 1));
        }
        let keys: Vec<GroupKey> = sorted_rows(&rows).iter().map(|r| r.key).collect();
        assert_eq!(
            keys,
            vec![
                GroupKey::new(9, 0, 3),
                GroupKey::new(9, 0, 12),
                GroupKey::new(9, 5, 0),
                GroupKey::new(10, 0, 0),
            ]
        );
    }
}
