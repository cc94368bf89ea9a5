use std::path::PathBuf;
use crate::utils::config::{DEFAULT_TABLE_ROWS, DEFAULT_UNIT};

/// Arguments for the aggregate command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AggregateArgs {
    /// Sample file (JSON or CSV)
    pub input: PathBuf,

    /// Bucket width in requests
    pub unit: i64,

    /// Declared total requests (None = observed throughput)
    pub total_requests: Option<i64>,

    /// Output path for JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Output path for CSV curve (optional)
    pub output_csv: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Rows shown in the summary table
    pub table_rows: usize,
}

impl Default for AggregateArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("timeseries.csv"),
            unit: DEFAULT_UNIT,
            total_requests: None,
            output_json: Some(PathBuf::from("latency-curve.json")),
            output_csv: None,
            print_summary: false,
            table_rows: DEFAULT_TABLE_ROWS,
        }
    }
}
