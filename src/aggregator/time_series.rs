//! Raw load-test samples and the time series that holds them.
//!
//! A sample covers one sampling interval (typically one second) and records
//! how many requests completed in it plus the latency range seen.

use std::time::Duration;

/// Latency profile of one sampling interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LatencyStats {
    pub min: Duration,
    pub avg: Duration,
    pub max: Duration,
}

impl LatencyStats {
    /// Stats for a range where no request was observed
    pub const ZERO: LatencyStats = LatencyStats {
        min: Duration::ZERO,
        avg: Duration::ZERO,
        max: Duration::ZERO,
    };

    pub fn new(min: Duration, avg: Duration, max: Duration) -> Self {
        Self { min, avg, max }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// A single measurement taken during a load test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Instant the interval was recorded at (e.g. unix second)
    pub timestamp: i64,

    /// Latency observed in the interval
    pub latency: LatencyStats,

    /// Requests completed in the interval
    pub throughput: u64,
}

impl Sample {
    pub fn new(timestamp: i64, latency: LatencyStats, throughput: u64) -> Self {
        Self {
            timestamp,
            latency,
            throughput,
        }
    }
}

/// An unordered collection of samples
///
/// **Public** - produced by the parser, consumed by `aggregate`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeSeries {
    samples: Vec<Sample>,
}

impl TimeSeries {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// Order samples by timestamp, keeping input order among ties
    pub fn sort_by_timestamp(&mut self) {
        self.samples.sort_by_key(|s| s.timestamp);
    }

    /// Sum of throughput across every sample
    pub fn total_throughput(&self) -> u64 {
        self.samples
            .iter()
            .fold(0u64, |acc, s| acc.saturating_add(s.throughput))
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }
}

impl FromIterator<Sample> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for TimeSeries {
    type Item = Sample;
    type IntoIter = std::vec::IntoIter<Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}
