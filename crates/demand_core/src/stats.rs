//! Moment and percentile helpers for the aggregation and summary steps.

use serde::Serialize;

/// Arithmetic mean. Returns 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n − 1 denominator). Returns 0.0 for fewer
/// than two values.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance =
        values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Percentile with linear interpolation between order statistics.
/// `p` is in [0, 100]. Returns 0.0 for an empty slice.
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    // Fractional 0-based rank, interpolated between neighbours.
    let rank = p / 100.0 * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        let frac = rank - lower as f64;
        sorted[lower] * (1.0 - frac) + sorted[upper] * frac
    }
}

/// The four percentile cut points reported for a simulated sample.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PercentileSummary {
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p95: f64,
}

impl PercentileSummary {
    pub fn from_sample(sample: &[f64]) -> Self {
        Self {
            p25: percentile(sample, 25.0),
            p50: percentile(sample, 50.0),
            p75: percentile(sample, 75.0),
            p95: percentile(sample, 95.0),
        }
    }

    /// Percentiles paired with their display labels, in ascending order.
    pub fn labeled(&self) -> [(f64, &'static str); 4] {
        [
            (self.p25, "25th Percentile"),
            (self.p50, "50th Percentile (Median)"),
            (self.p75, "75th Percentile"),
            (self.p95, "95th Percentile"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    }

    #[test]
    fn std_dev_single_value_is_zero() {
        assert_eq!(sample_std_dev(&[5.0]), 0.0);
    }

    #[test]
    fn std_dev_known_values() {
        // Deviations from 91.4: squares sum to 81.2, /4 = 20.3.
        let totals = [89.0, 88.0, 89.0, 99.0, 92.0];
        let expected = (81.2f64 / 4.0).sqrt();
        assert!((sample_std_dev(&totals) - expected).abs() < 1e-12);
    }

    #[test]
    fn percentile_single() {
        assert_eq!(percentile(&[42.0], 50.0), 42.0);
        assert_eq!(percentile(&[42.0], 95.0), 42.0);
    }

    #[test]
    fn percentile_median_even() {
        assert!((percentile(&[4.0, 1.0, 3.0, 2.0], 50.0) - 2.5).abs() < 1e-10);
    }

    #[test]
    fn percentile_interpolates() {
        let vals: Vec<f64> = (1..=10).map(|v| v as f64).collect();
        // rank = 0.95 * 9 = 8.55 → between 9 and 10.
        assert!((percentile(&vals, 95.0) - 9.55).abs() < 1e-10);
    }

    #[test]
    fn percentile_endpoints() {
        let vals = [30.0, 10.0, 20.0];
        assert!((percentile(&vals, 0.0) - 10.0).abs() < 1e-10);
        assert!((percentile(&vals, 100.0) - 30.0).abs() < 1e-10);
    }

    #[test]
    fn summary_is_ordered() {
        let sample: Vec<f64> = (0..100).map(|v| (v * 37 % 100) as f64).collect();
        let summary = PercentileSummary::from_sample(&sample);
        assert!(summary.p25 <= summary.p50);
        assert!(summary.p50 <= summary.p75);
        assert!(summary.p75 <= summary.p95);
    }

    #[test]
    fn summary_collapses_on_constant_sample() {
        let sample = vec![7.0; 50];
        let summary = PercentileSummary::from_sample(&sample);
        assert_eq!(summary.p25, 7.0);
        assert_eq!(summary.p50, 7.0);
        assert_eq!(summary.p75, 7.0);
        assert_eq!(summary.p95, 7.0);
    }
}
