//! Latency Curve CLI
//!
//! Aggregates load-test time series into cumulative request-count
//! latency curves.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use latency_curve::commands::{
    display_schema, display_version, execute_aggregate, validate_args, validate_report_file,
    AggregateArgs,
};
use latency_curve::utils::config::{DEFAULT_TABLE_ROWS, DEFAULT_UNIT};

/// Latency Curve - cumulative latency curves from load-test samples
#[derive(Parser, Debug)]
#[command(name = "latency-curve")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate a sample file into a latency curve
    Aggregate {
        /// Sample file (.csv for dbtester time series, JSON otherwise)
        #[arg(short, long)]
        input: PathBuf,

        /// Bucket width in requests
        #[arg(short, long, default_value_t = DEFAULT_UNIT, allow_negative_numbers = true)]
        unit: i64,

        /// Declared total requests (defaults to observed throughput)
        #[arg(short, long, env = "LATENCY_CURVE_TOTAL_REQUESTS", allow_negative_numbers = true)]
        total_requests: Option<i64>,

        /// Output path for JSON report
        #[arg(short, long, default_value = "latency-curve.json")]
        output: PathBuf,

        /// Skip writing the JSON report
        #[arg(long)]
        no_json: bool,

        /// Output path for CSV curve (optional)
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Rows shown in the summary table
        #[arg(long, default_value_t = DEFAULT_TABLE_ROWS)]
        rows: usize,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Aggregate {
            input,
            unit,
            total_requests,
            output,
            no_json,
            csv,
            summary,
            rows,
        } => {
            let args = AggregateArgs {
                input,
                unit,
                total_requests,
                output_json: if no_json { None } else { Some(output) },
                output_csv: csv,
                print_summary: summary,
                table_rows: rows,
            };

            // Validate args first
            validate_args(&args)?;

            execute_aggregate(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
