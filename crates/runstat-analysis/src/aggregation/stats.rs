//! Order statistics over present values.
//!
//! Even-length medians average the two middle values. Empty input has no
//! statistic at all rather than a zero or NaN.

use runstat_core::types::Stat;

/// Median of a float series.
pub fn median_f64(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Median of an integer series. Stays an integer when the count is odd.
pub fn median_u64(values: &[u64]) -> Option<Stat> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(Stat::Int(sorted[mid]))
    } else {
        Some(Stat::Float((sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0))
    }
}

/// Maximum of a float series.
pub fn max_f64(values: &[f64]) -> Option<f64> {
    values.iter().copied().max_by(f64::total_cmp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median_f64(&[30.0, 10.0, 20.0]), Some(20.0));
        assert_eq!(median_f64(&[20.0, 10.0]), Some(15.0));
        assert_eq!(median_f64(&[7.25]), Some(7.25));
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(median_f64(&[]), None);
        assert_eq!(median_u64(&[]), None);
        assert_eq!(max_f64(&[]), None);
    }

    #[test]
    fn test_integer_median_keeps_type_when_odd() {
        assert_eq!(median_u64(&[300, 100, 200]), Some(Stat::Int(200)));
        assert_eq!(median_u64(&[100, 201]), Some(Stat::Float(150.5)));
    }

    #[test]
    fn test_max() {
        assert_eq!(max_f64(&[10.0, 30.0, 20.0]), Some(30.0));
    }
}
