//! Summary statistics over an aggregated latency curve.
//!
//! Used for logging and the `--summary` output; the curve itself is
//! what gets written to disk.

use super::buckets::CountBucket;
use std::time::Duration;

/// Curve summary statistics
///
/// **Public** - returned from summarize_curve
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveSummary {
    /// Number of buckets in the curve
    pub bucket_count: usize,

    /// Buckets carrying latency from a sample
    pub observed_buckets: usize,

    /// Zero-valued buckets (gap filled or never reached)
    pub empty_buckets: usize,

    /// Highest count in the curve
    pub final_count: u64,

    /// Largest average latency across observed buckets
    pub peak_avg_latency: Duration,

    /// Mean of average latency across observed buckets
    pub mean_avg_latency: Duration,
}

/// Calculate summary statistics for a curve
///
/// **Public** - main entry point for curve metrics
///
/// # Arguments
/// * `buckets` - Output of `aggregate`
///
/// # Returns
/// Statistics over the curve; zero-valued buckets are excluded from the
/// latency figures
pub fn summarize_curve(buckets: &[CountBucket]) -> CurveSummary {
    if buckets.is_empty() {
        return CurveSummary::default();
    }

    let observed: Vec<Duration> = buckets
        .iter()
        .filter(|b| !b.is_empty())
        .map(|b| b.latency.avg)
        .collect();

    let peak_avg_latency = observed.iter().copied().max().unwrap_or_default();
    let mean_avg_latency = mean_duration(&observed);

    CurveSummary {
        bucket_count: buckets.len(),
        observed_buckets: observed.len(),
        empty_buckets: buckets.len() - observed.len(),
        final_count: buckets.iter().map(|b| b.count).max().unwrap_or(0),
        peak_avg_latency,
        mean_avg_latency,
    }
}

/// Mean of a set of durations, zero when empty
///
/// **Private** - sums in nanoseconds to avoid Duration overflow panics
fn mean_duration(values: &[Duration]) -> Duration {
    if values.is_empty() {
        return Duration::ZERO;
    }

    let total: u128 = values.iter().map(Duration::as_nanos).sum();
    let mean = total / values.len() as u128;
    Duration::from_nanos(u64::try_from(mean).unwrap_or(u64::MAX))
}

impl CurveSummary {
    /// Fraction of buckets that were gap filled, in percent
    pub fn empty_percentage(&self) -> f64 {
        if self.bucket_count == 0 {
            0.0
        } else {
            (self.empty_buckets as f64 / self.bucket_count as f64) * 100.0
        }
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Buckets: {} | Observed: {} | Empty: {} ({:.1}%) | Final count: {} | \
             Peak avg: {:.3}ms | Mean avg: {:.3}ms",
            self.bucket_count,
            self.observed_buckets,
            self.empty_buckets,
            self.empty_percentage(),
            self.final_count,
            self.peak_avg_latency.as_secs_f64() * 1000.0,
            self.mean_avg_latency.as_secs_f64() * 1000.0,
        )
    }
}
