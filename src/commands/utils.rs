use anyhow::Result;
use std::path::PathBuf;
use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Unit: {}", report.unit);
    println!("  Total Requests: {}", report.total_requests);
    println!("  Samples: {}", report.sample_count);
    println!("  Points: {}", report.points.len());
    println!("  Generated: {}", report.generated_at.to_rfc3339());

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Latency Curve Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  unit: number               - Bucket width in requests");
        println!("  total_requests: number     - Declared request total");
        println!("  sample_count: number       - Samples aggregated");
        println!("  observed_requests: number  - Sum of sample throughput");
        println!("  points: array              - Curve in ascending count order");
        println!("    count: number            - Cumulative request count");
        println!("    min_latency_ms: number   - Minimum latency (ms)");
        println!("    avg_latency_ms: number   - Average latency (ms)");
        println!("    max_latency_ms: number   - Maximum latency (ms)");
        println!("  generated_at: string       - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Latency Curve v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Aggregates load-test time series into request-count latency curves.");
}
