//! Schema definitions for sample files and the latency curve report.

use crate::aggregator::CountBucket;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One sample as it appears in a JSON sample file
///
/// Latencies are milliseconds. Field aliases cover the naming used by
/// different load generators.
#[derive(Debug, Clone, Deserialize)]
pub struct SampleRecord {
    #[serde(alias = "unix_second", alias = "unixSecond")]
    pub timestamp: i64,

    #[serde(default, alias = "minLatencyMs")]
    pub min_latency_ms: f64,

    #[serde(default, alias = "avgLatencyMs")]
    pub avg_latency_ms: f64,

    #[serde(default, alias = "maxLatencyMs")]
    pub max_latency_ms: f64,

    #[serde(default, alias = "avg_throughput", alias = "avgThroughput")]
    pub throughput: u64,
}

/// Aggregated latency curve written to disk
///
/// **Public** - produced by `to_report`, read back by `validate`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LatencyCurveReport {
    /// Schema version
    pub version: String,

    /// Bucket width in requests
    pub unit: i64,

    /// Declared total request count
    pub total_requests: i64,

    /// Number of samples aggregated
    pub sample_count: usize,

    /// Sum of sample throughput
    pub observed_requests: u64,

    /// Curve points in ascending count order
    pub points: Vec<CurvePoint>,

    /// Generation timestamp, serialized as RFC 3339
    pub generated_at: DateTime<Utc>,
}

/// Serialized form of a count bucket
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurvePoint {
    pub count: u64,
    pub min_latency_ms: f64,
    pub avg_latency_ms: f64,
    pub max_latency_ms: f64,
}

impl From<&CountBucket> for CurvePoint {
    fn from(bucket: &CountBucket) -> Self {
        Self {
            count: bucket.count,
            min_latency_ms: to_millis(bucket.latency.min),
            avg_latency_ms: to_millis(bucket.latency.avg),
            max_latency_ms: to_millis(bucket.latency.max),
        }
    }
}

fn to_millis(d: Duration) -> f64 {
    d.as_nanos() as f64 / 1_000_000.0
}
