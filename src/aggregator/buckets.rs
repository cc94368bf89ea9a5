//! Resample a time series into cumulative request-count buckets.
//!
//! Samples are replayed in timestamp order while a running total of
//! completed requests is kept. Every time the total reaches the next
//! multiple of `unit`, a bucket is recorded at that multiple carrying the
//! latency of the sample that pushed it there.
//!
//! Example with `unit = 10`, `total_requests = 25`:
//! `[(t=1, 4 req, 5ms), (t=2, 8 req, 7ms)]` gives
//! `[(10, 7ms), (20, zero), (25, zero)]`.

use super::time_series::{LatencyStats, Sample, TimeSeries};
use crate::utils::error::AggregateError;
use log::debug;
use std::collections::BTreeMap;

/// Latency observed once cumulative throughput reached `count`
///
/// **Public** - output of `aggregate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountBucket {
    /// Cumulative request count boundary
    pub count: u64,

    /// Latency of the crossing sample, zero if nothing reached this count
    pub latency: LatencyStats,
}

impl CountBucket {
    pub fn new(count: u64, latency: LatencyStats) -> Self {
        Self { count, latency }
    }

    /// Bucket for a range with no observed throughput
    pub fn empty(count: u64) -> Self {
        Self::new(count, LatencyStats::ZERO)
    }

    pub fn is_empty(&self) -> bool {
        self.latency.is_zero()
    }
}

/// Aggregate samples into cumulative-count buckets
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `samples` - Samples in any order
/// * `unit` - Bucket width in requests, must be positive
/// * `total_requests` - Declared request total, must be non-negative
///
/// # Returns
/// Buckets in strictly ascending `count` order. Every count is a positive
/// multiple of `unit` or exactly `total_requests`.
///
/// # Errors
/// * `AggregateError::InvalidArgument` - non-positive `unit` or negative `total_requests`
pub fn aggregate(
    samples: impl IntoIterator<Item = Sample>,
    unit: i64,
    total_requests: i64,
) -> Result<Vec<CountBucket>, AggregateError> {
    let unit = u64::try_from(unit).ok().filter(|u| *u > 0).ok_or_else(|| {
        AggregateError::InvalidArgument(format!("unit must be positive, got {}", unit))
    })?;
    let total_requests = u64::try_from(total_requests).map_err(|_| {
        AggregateError::InvalidArgument(format!(
            "total requests must be non-negative, got {}",
            total_requests
        ))
    })?;

    let mut series: TimeSeries = samples.into_iter().collect();
    series.sort_by_timestamp();

    debug!(
        "Aggregating {} samples (unit {}, total requests {})",
        series.len(),
        unit,
        total_requests
    );

    let mut rows: BTreeMap<u64, LatencyStats> = BTreeMap::new();
    let max_key = walk_thresholds(&series, unit, &mut rows);
    fill_gaps(&mut rows, max_key, unit, total_requests);

    // "0 requests completed" has no latency
    rows.remove(&0);

    let buckets: Vec<CountBucket> = rows
        .into_iter()
        .map(|(count, latency)| CountBucket::new(count, latency))
        .collect();

    debug!("Produced {} buckets (last key {})", buckets.len(), max_key);

    Ok(buckets)
}

/// Replay samples and record a bucket at every reached multiple of `unit`
///
/// **Private** - returns the highest key created
///
/// A key `k` is recorded only once the running total is at least `k`.
/// A total that stops between two multiples leaves the upper one to gap
/// filling, so cumulative 12 with `unit = 10` records 10 but not 20, and
/// cumulative 35 records 10, 20 and 30 but not 40.
fn walk_thresholds(
    series: &TimeSeries,
    unit: u64,
    rows: &mut BTreeMap<u64, LatencyStats>,
) -> u64 {
    let mut cumulative: u64 = 0;
    let mut max_key: u64 = 0;

    for sample in series.samples() {
        cumulative = cumulative.saturating_add(sample.throughput);

        // One sample may reach several boundaries at once.
        // max_key never exceeds cumulative, so the subtraction cannot wrap.
        while cumulative - max_key >= unit {
            max_key = match max_key.checked_add(unit) {
                Some(next) => next,
                None => break,
            };
            rows.insert(max_key, sample.latency);
        }
    }

    max_key
}

/// Insert zero-valued buckets from `max_key` up to `total_requests`
///
/// **Private** - never overwrites a sample-triggered bucket
fn fill_gaps(
    rows: &mut BTreeMap<u64, LatencyStats>,
    max_key: u64,
    unit: u64,
    total_requests: u64,
) {
    let mut key = max_key;
    while key < total_requests {
        rows.entry(key).or_insert(LatencyStats::ZERO);
        key = match key.checked_add(unit) {
            Some(next) => next,
            None => break,
        };
    }
    rows.entry(total_requests).or_insert(LatencyStats::ZERO);
}
