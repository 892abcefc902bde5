//! CSV reporter — the fixed-header summary table.
//!
//! All values are numeric or empty, so no field ever needs quoting. Absent
//! statistics leave an empty field; every line has the same field count.

use runstat_core::constants::CSV_HEADER;
use runstat_core::errors::ReportError;
use runstat_core::types::collections::FxHashMap;
use runstat_core::types::{GroupKey, Stat, SummaryRow};

use super::{sorted_rows, Reporter};

pub struct CsvReporter {
    pub precision: usize,
}

impl CsvReporter {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    /// Header line followed by one line per row, ascending by key.
    pub fn lines(&self, rows: &FxHashMap<GroupKey, SummaryRow>) -> Vec<String> {
        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(CSV_HEADER.to_string());
        lines.extend(sorted_rows(rows).into_iter().map(|row| self.line(row)));
        lines
    }

    fn line(&self, row: &SummaryRow) -> String {
        format!(
            "{},{},{},{},{},{},{},{}",
            row.key.dp,
            row.key.tb,
            row.key.tr,
            row.run_count,
            self.cell(row.median_throughput),
            self.cell(row.max_throughput),
            self.cell(row.median_wallclock),
            self.cell(row.median_peak_memory),
        )
    }

    fn cell(&self, stat: Option<Stat>) -> String {
        stat.map(|s| s.render(self.precision)).unwrap_or_default()
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new(runstat_core::constants::DEFAULT_PRECISION)
    }
}

impl Reporter for CsvReporter {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn generate(&self, rows: &FxHashMap<GroupKey, SummaryRow>) -> Result<String, ReportError> {
        let mut output = self.lines(rows).join("\n");
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(items: Vec<SummaryRow>) -> FxHashMap<GroupKey, SummaryRow> {
        items.into_iter().map(|r| (r.key, r)).collect()
    }

    #[test]
    fn test_header_only_when_empty() {
        let lines = CsvReporter::default().lines(&FxHashMap::default());
        assert_eq!(lines, vec![CSV_HEADER.to_string()]);
    }

    #[test]
    fn test_full_row() {
        let key = GroupKey::new(4, 8, 2);
        let table = rows(vec![SummaryRow {
            key,
            run_count: 2,
            median_throughput: Some(Stat::Float(1500.0)),
            max_throughput: Some(Stat::Float(1600.25)),
            median_wallclock: Some(Stat::Float(65.5)),
            median_peak_memory: Some(Stat::Int(204800)),
        }]);
        let lines = CsvReporter::default().lines(&table);
        assert_eq!(lines[1], "4,8,2,2,1500.000,1600.250,65.500,204800");
    }

    #[test]
    fn test_absent_fields_keep_field_count() {
        let key = GroupKey::new(1, 2, 3);
        let table = rows(vec![SummaryRow::empty(key, 5)]);
        let lines = CsvReporter::default().lines(&table);
        assert_eq!(lines[1], "1,2,3,5,,,,");
        assert_eq!(lines[1].split(',').count(), CSV_HEADER.split(',').count());
    }

    #[test]
    fn test_even_memory_median_renders_as_float() {
        let key = GroupKey::new(1, 1, 1);
        let mut row = SummaryRow::empty(key, 2);
        row.median_peak_memory = Some(Stat::Float(150.5));
        let lines = CsvReporter::default().lines(&rows(vec![row]));
        assert_eq!(lines[1], "1,1,1,2,,,,150.500");
    }

    #[test]
    fn test_generate_orders_rows_and_ends_with_newline() {
        let table = rows(vec![
            SummaryRow::empty(GroupKey::new(10, 1, 1), 1),
            SummaryRow::empty(GroupKey::new(2, 1, 1), 1),
        ]);
        let output = CsvReporter::default().generate(&table).unwrap();
        assert_eq!(
            output,
            format!("{CSV_HEADER}\n2,1,1,1,,,,\n10,1,1,1,,,,\n")
        );
    }
}
