//! Descriptive statistics over a sample sequence

use serde::Serialize;

/// Summary statistics of one channel's measurement samples
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleStats {
    pub mean: f64,
    /// Sample standard deviation (n-1 denominator); `None` below two
    /// samples, where the estimator is undefined
    pub std_dev: Option<f64>,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl SampleStats {
    /// Compute statistics over a sample sequence, `None` when empty
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let count = samples.len();
        let mean = samples.iter().sum::<f64>() / count as f64;

        let std_dev = if count > 1 {
            let sum_sq: f64 = samples.iter().map(|v| (v - mean).powi(2)).sum();
            Some((sum_sq / (count - 1) as f64).sqrt())
        } else {
            None
        };

        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            mean,
            std_dev,
            min,
            max,
            count,
        })
    }
}
