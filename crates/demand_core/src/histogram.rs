//! Equal-width binning of the simulated sample for rendering.

use serde::Serialize;

/// Default number of histogram bins.
pub const DEFAULT_NUM_BINS: usize = 30;

/// Counts of sample values bucketed into equal-width bins over [min, max].
#[derive(Debug, Clone, Serialize)]
pub struct Histogram {
    pub min: f64,
    pub max: f64,
    pub bin_width: f64,
    pub counts: Vec<u64>,
}

impl Histogram {
    /// Bin a sample. Returns None for an empty sample, a zero bin count, or
    /// a sample with no finite values.
    pub fn from_sample(sample: &[f64], num_bins: usize) -> Option<Self> {
        if num_bins == 0 {
            return None;
        }
        let finite = sample.iter().copied().filter(|v| v.is_finite());
        let (min, max) = finite.clone().fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })?;

        let bin_width = (max - min) / num_bins as f64;
        let mut counts = vec![0u64; num_bins];
        for v in finite {
            // Values equal to max land in the last bin; a degenerate
            // (min == max) sample collapses into bin 0.
            let idx = if bin_width > 0.0 {
                (((v - min) / bin_width) as usize).min(num_bins - 1)
            } else {
                0
            };
            counts[idx] += 1;
        }

        Some(Self {
            min,
            max,
            bin_width,
            counts,
        })
    }

    /// Midpoint of each bin, for bar placement.
    pub fn bin_centers(&self) -> Vec<f64> {
        (0..self.counts.len())
            .map(|i| self.min + self.bin_width * (i as f64 + 0.5))
            .collect()
    }
}
