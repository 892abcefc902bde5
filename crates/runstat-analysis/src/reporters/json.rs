//! JSON reporter — structured output with the CSV column names.

use serde_json::{json, Value};

use runstat_core::constants::SUMMARY_COLUMNS;
use runstat_core::errors::ReportError;
use runstat_core::types::collections::FxHashMap;
use runstat_core::types::{GroupKey, Stat, SummaryRow};

use super::{sorted_rows, Reporter};

/// JSON reporter for machine-readable output. Floats are rounded to
/// `precision` decimals; absent statistics are `null`. Non-finite floats
/// are emitted as strings (`"inf"`) so they never read as absent.
pub struct JsonReporter {
    pub precision: usize,
}

impl JsonReporter {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    fn value(&self, stat: Option<Stat>) -> Value {
        match stat {
            None => Value::Null,
            Some(Stat::Int(v)) => json!(v),
            Some(Stat::Float(v)) if !v.is_finite() => json!(v.to_string()),
            Some(Stat::Float(v)) => {
                let scale = 10f64.powi(self.precision as i32);
                let scaled = v * scale;
                if scaled.is_finite() {
                    json!(scaled.round() / scale)
                } else {
                    json!(v)
                }
            }
        }
    }
}

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, rows: &FxHashMap<GroupKey, SummaryRow>) -> Result<String, ReportError> {
        let rows: Vec<Value> = sorted_rows(rows)
            .into_iter()
            .map(|r| {
                json!({
                    "dp": r.key.dp,
                    "tame_bits": r.key.tb,
                    "tame_ratio": r.key.tr,
                    "runs": r.run_count,
                    "median_speed_MKeys": self.value(r.median_throughput),
                    "max_speed_MKeys": self.value(r.max_throughput),
                    "median_real_s": self.value(r.median_wallclock),
                    "median_rss_kb": self.value(r.median_peak_memory),
                })
            })
            .collect();

        let output = json!({
            "columns": SUMMARY_COLUMNS,
            "group_count": rows.len(),
            "rows": rows,
        });

        serde_json::to_string_pretty(&output).map_err(|e| ReportError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_rows_sorted_with_nulls() {
        let mut table = FxHashMap::default();
        let a = GroupKey::new(8, 1, 1);
        let b = GroupKey::new(4, 1, 1);
        let mut row_a = SummaryRow::empty(a, 3);
        row_a.median_throughput = Some(Stat::Float(12.34567));
        row_a.median_peak_memory = Some(Stat::Int(2048));
        table.insert(a, row_a);
        table.insert(b, SummaryRow::empty(b, 1));

        let output = JsonReporter::new(3).generate(&table).unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["group_count"], 2);
        assert_eq!(parsed["columns"].as_array().unwrap().len(), 8);
        let rows = parsed["rows"].as_array().unwrap();
        assert_eq!(rows[0]["dp"], 4);
        assert!(rows[0]["median_speed_MKeys"].is_null());
        assert_eq!(rows[1]["dp"], 8);
        assert_eq!(rows[1]["runs"], 3);
        assert_eq!(rows[1]["median_speed_MKeys"], 12.346);
        assert_eq!(rows[1]["median_rss_kb"], 2048);
    }

    #[test]
    fn test_json_huge_and_infinite_floats_stay_present() {
        let mut table = FxHashMap::default();
        let key = GroupKey::new(1, 1, 1);
        let mut row = SummaryRow::empty(key, 1);
        row.median_throughput = Some(Stat::Float(f64::INFINITY));
        row.max_throughput = Some(Stat::Float(1e300));
        table.insert(key, row);

        let output = JsonReporter::new(12).generate(&table).unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();
        let row = &parsed["rows"][0];

        assert_eq!(row["median_speed_MKeys"], "inf");
        assert_eq!(row["max_speed_MKeys"], 1e300);
        assert!(row["median_real_s"].is_null());
    }
}
