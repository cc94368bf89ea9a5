//! Configuration and constants for the CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default bucket width in requests
pub const DEFAULT_UNIT: i64 = 1000;

/// Rows printed by `--summary` before the table is truncated
pub const DEFAULT_TABLE_ROWS: usize = 20;

// Column layouts shared with dbtester-style CSV files
pub const TIME_SERIES_CSV_HEADER: &[&str] = &[
    "UNIX-SECOND",
    "MIN-LATENCY-MS",
    "AVG-LATENCY-MS",
    "MAX-LATENCY-MS",
    "AVG-THROUGHPUT",
];
pub const CURVE_CSV_HEADER: &[&str] = &[
    "KEYS",
    "MIN-LATENCY-MS",
    "AVG-LATENCY-MS",
    "MAX-LATENCY-MS",
];
