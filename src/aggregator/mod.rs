//! Aggregation of load-test samples into a cumulative latency curve.
//!
//! This module transforms a raw time series into:
//! - Count buckets (requests completed -> latency)
//! - Curve summary statistics

pub mod time_series;
pub mod buckets;
pub mod metrics;

// Re-export main types and functions
pub use time_series::{LatencyStats, Sample, TimeSeries};
pub use buckets::{aggregate, CountBucket};
pub use metrics::{summarize_curve, CurveSummary};
