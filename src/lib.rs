//! Latency Curve
//!
//! Turns the per-second latency/throughput time series recorded during a
//! load test into a cumulative "requests processed -> latency" curve.
//!
//! ## Getting Started
//!
//! ```bash
//! latency-curve aggregate --input timeseries.csv --unit 1000 --summary
//! ```
//!
//! As a library:
//!
//! ```
//! use latency_curve::aggregator::{aggregate, LatencyStats, Sample};
//!
//! let samples = vec![Sample::new(1, LatencyStats::ZERO, 1500)];
//! let buckets = aggregate(samples, 1000, 2000).unwrap();
//! assert_eq!(buckets.len(), 2);
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
