//! Aggregate command implementation.
//!
//! The aggregate command:
//! 1. Reads samples from a JSON or CSV file
//! 2. Aggregates them into count buckets
//! 3. Calculates curve statistics
//! 4. Writes output files

use super::models::AggregateArgs;
use crate::aggregator::{aggregate, summarize_curve};
use crate::output::{render_table, write_curve_csv, write_report};
use crate::parser::{read_samples, to_report, LatencyCurveReport};
use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the aggregate command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The generated report, so callers can inspect what was written
///
/// # Errors
/// * Sample file read or parse failures
/// * Invalid unit or total
/// * File write errors
pub fn execute_aggregate(args: AggregateArgs) -> Result<LatencyCurveReport> {
    let start_time = Instant::now();

    info!("Aggregating samples from: {}", args.input.display());

    // Step 1: Read samples
    info!("Step 1/3: Reading samples...");
    let series = read_samples(&args.input)
        .with_context(|| format!("Failed to read samples from {}", args.input.display()))?;

    if series.is_empty() {
        warn!("Sample file contains no samples; curve will be gap filled");
    }

    let observed = series.total_throughput();
    let total_requests = match args.total_requests {
        Some(total) => total,
        None => i64::try_from(observed).context("Observed throughput does not fit in i64")?,
    };

    let exceeds_total = i64::try_from(observed).map_or(true, |o| o > total_requests);
    if args.total_requests.is_some() && exceeds_total {
        warn!(
            "Observed throughput {} exceeds declared total {}",
            observed, total_requests
        );
    }

    // Step 2: Aggregate
    info!("Step 2/3: Aggregating into buckets of {} requests...", args.unit);
    let buckets = aggregate(series.samples().iter().copied(), args.unit, total_requests)
        .context("Failed to aggregate samples")?;

    let curve_summary = summarize_curve(&buckets);
    info!("Curve: {}", curve_summary.summary());

    debug!("First buckets:");
    for bucket in buckets.iter().take(3) {
        debug!("  {} -> avg {:?}", bucket.count, bucket.latency.avg);
    }

    // Step 3: Write outputs
    info!("Step 3/3: Writing output files...");
    let report = to_report(&series, &buckets, args.unit, total_requests);

    if let Some(json_path) = &args.output_json {
        write_report(&report, json_path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", json_path.display());
    }

    if let Some(csv_path) = &args.output_csv {
        write_curve_csv(&report.points, csv_path).context("Failed to write curve CSV")?;
        info!("✓ Curve CSV written to: {}", csv_path.display());
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(60));
        println!("LATENCY CURVE SUMMARY");
        println!("{}", "=".repeat(60));
        println!("Samples:        {}", series.len());
        println!("Observed:       {} requests", observed);
        println!("Total:          {} requests", total_requests);
        println!("Unit:           {} requests", args.unit);
        println!("{}", curve_summary.summary());
        println!("\n{}", render_table(&report.points, args.table_rows));
        println!("{}", "=".repeat(60));
    }

    let elapsed = start_time.elapsed();
    info!("Aggregation completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Validate aggregate arguments
///
/// **Public** - can be called before execute_aggregate for early validation
pub fn validate_args(args: &AggregateArgs) -> Result<()> {
    if !args.input.exists() {
        bail!("Input file does not exist: {}", args.input.display());
    }

    if args.unit <= 0 {
        bail!("Unit must be positive, got {}", args.unit);
    }

    if let Some(total) = args.total_requests {
        if total < 0 {
            bail!("Total requests must be non-negative, got {}", total);
        }
    }

    if args.output_json.is_none() && args.output_csv.is_none() && !args.print_summary {
        bail!("Nothing to do: specify --output, --csv or --summary");
    }

    Ok(())
}
