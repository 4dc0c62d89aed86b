//! Descriptive statistics over numeric columns.

use serde::Serialize;

/// Standard descriptive statistics for one numeric column's non-null values.
///
/// Quartiles use linear interpolation between closest ranks; `std` is the sample
/// standard deviation and is `None` (serialized as `null`) when fewer than two
/// values are present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveStats {
    /// Number of non-null values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator).
    pub std: Option<f64>,
    /// Minimum.
    pub min: f64,
    /// 25th percentile.
    pub p25: f64,
    /// Median.
    pub p50: f64,
    /// 75th percentile.
    pub p75: f64,
    /// Maximum.
    pub max: f64,
}

impl DescriptiveStats {
    /// Statistic labels, in the row order used by the stats CSV report.
    pub const LABELS: [&'static str; 8] =
        ["count", "mean", "std", "min", "p25", "p50", "p75", "max"];

    /// Statistic values as display strings, matching [`Self::LABELS`] order.
    pub fn labeled_values(&self) -> [String; 8] {
        [
            self.count.to_string(),
            format_stat(self.mean),
            self.std.map(format_stat).unwrap_or_default(),
            format_stat(self.min),
            format_stat(self.p25),
            format_stat(self.p50),
            format_stat(self.p75),
            format_stat(self.max),
        ]
    }
}

fn format_stat(v: f64) -> String {
    format!("{v}")
}

/// Compute [`DescriptiveStats`] over a slice of values.
///
/// Returns `None` for an empty slice.
pub fn describe(values: &[f64]) -> Option<DescriptiveStats> {
    if values.is_empty() {
        return None;
    }

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let std = if count > 1 {
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        Some(var.sqrt())
    } else {
        None
    };

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Some(DescriptiveStats {
        count,
        mean,
        std,
        min: sorted[0],
        p25: percentile(&sorted, 0.25),
        p50: percentile(&sorted, 0.50),
        p75: percentile(&sorted, 0.75),
        max: sorted[count - 1],
    })
}

/// Percentile by linear interpolation between closest ranks. `sorted` must be
/// non-empty and ascending.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let rank = p * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use super::describe;

    #[test]
    fn describe_three_evenly_spaced_values() {
        let stats = describe(&[10.0, 20.0, 30.0]).unwrap();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.mean, 20.0);
        assert_eq!(stats.std, Some(10.0));
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.p25, 15.0);
        assert_eq!(stats.p50, 20.0);
        assert_eq!(stats.p75, 25.0);
        assert_eq!(stats.max, 30.0);
    }

    #[test]
    fn describe_single_value_has_no_std() {
        let stats = describe(&[42.5]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.mean, 42.5);
        assert_eq!(stats.std, None);
        assert_eq!(stats.p25, 42.5);
        assert_eq!(stats.p75, 42.5);
    }

    #[test]
    fn describe_empty_is_none() {
        assert!(describe(&[]).is_none());
    }

    #[test]
    fn percentiles_interpolate_between_ranks() {
        let stats = describe(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(stats.p25, 1.75);
        assert_eq!(stats.p50, 2.5);
        assert_eq!(stats.p75, 3.25);
    }

    #[test]
    fn describe_is_order_independent() {
        let a = describe(&[3.0, 1.0, 2.0]).unwrap();
        let b = describe(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(a.min, b.min);
        assert_eq!(a.p50, b.p50);
        assert_eq!(a.max, b.max);
    }
}
