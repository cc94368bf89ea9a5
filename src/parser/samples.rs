//! Sample file parser.
//!
//! Reads load-test time series from JSON or dbtester-style CSV into a
//! `TimeSeries`, and packages aggregated buckets into a report.

use super::schema::{CurvePoint, LatencyCurveReport, SampleRecord};
use crate::aggregator::{CountBucket, LatencyStats, Sample, TimeSeries};
use crate::utils::config::{SCHEMA_VERSION, TIME_SERIES_CSV_HEADER};
use crate::utils::error::ParseError;
use log::{debug, info};
use std::path::Path;
use std::time::Duration;

/// Detected sample file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    Json,
    Csv,
}

impl SampleFormat {
    /// Pick a format from the file extension, JSON unless it ends in `.csv`
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => SampleFormat::Csv,
            _ => SampleFormat::Json,
        }
    }
}

/// Read samples from a file
///
/// **Public** - main entry point for sample ingest
///
/// # Errors
/// * `ParseError::IoError` - file cannot be read
/// * `ParseError::JsonError` / `ParseError::InvalidFormat` - malformed content
pub fn read_samples(path: impl AsRef<Path>) -> Result<TimeSeries, ParseError> {
    let path = path.as_ref();
    let format = SampleFormat::from_path(path);

    debug!("Reading {:?} samples from: {}", format, path.display());

    let content = std::fs::read_to_string(path)?;
    let series = match format {
        SampleFormat::Json => parse_samples_json(&content)?,
        SampleFormat::Csv => parse_samples_csv(&content)?,
    };

    info!("Loaded {} samples from {}", series.len(), path.display());

    Ok(series)
}

/// Parse samples from JSON
///
/// **Public** - accepts a bare array or an object with a `samples` array
pub fn parse_samples_json(input: &str) -> Result<TimeSeries, ParseError> {
    let value: serde_json::Value = serde_json::from_str(input)?;

    let items = match value {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(mut map) => match map.remove("samples") {
            Some(serde_json::Value::Array(items)) => items,
            _ => {
                return Err(ParseError::InvalidFormat(
                    "Expected a 'samples' array in JSON object".to_string(),
                ))
            }
        },
        _ => {
            return Err(ParseError::InvalidFormat(
                "Expected a JSON array of samples".to_string(),
            ))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let location = format!("sample {}", index);
            let record: SampleRecord = serde_json::from_value(item)
                .map_err(|e| ParseError::InvalidFormat(format!("{}: {}", location, e)))?;
            to_sample(&record, &location)
        })
        .collect()
}

/// Parse samples from dbtester-style CSV
///
/// **Public** - columns are
/// `UNIX-SECOND,MIN-LATENCY-MS,AVG-LATENCY-MS,MAX-LATENCY-MS,AVG-THROUGHPUT`;
/// the header row is optional
pub fn parse_samples_csv(input: &str) -> Result<TimeSeries, ParseError> {
    let mut series = TimeSeries::default();
    let mut seen_row = false;

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();

        if !seen_row {
            seen_row = true;
            if is_header(&fields) {
                continue;
            }
        }

        if fields.len() != TIME_SERIES_CSV_HEADER.len() {
            return Err(ParseError::InvalidFormat(format!(
                "line {}: expected {} columns, found {}",
                line_no,
                TIME_SERIES_CSV_HEADER.len(),
                fields.len()
            )));
        }

        let record = SampleRecord {
            timestamp: parse_field(fields[0], line_no, TIME_SERIES_CSV_HEADER[0])?,
            min_latency_ms: parse_field(fields[1], line_no, TIME_SERIES_CSV_HEADER[1])?,
            avg_latency_ms: parse_field(fields[2], line_no, TIME_SERIES_CSV_HEADER[2])?,
            max_latency_ms: parse_field(fields[3], line_no, TIME_SERIES_CSV_HEADER[3])?,
            throughput: parse_field(fields[4], line_no, TIME_SERIES_CSV_HEADER[4])?,
        };

        series.push(to_sample(&record, &format!("line {}", line_no))?);
    }

    Ok(series)
}

/// Check whether a CSV row is the time-series header
///
/// **Private** - case-insensitive match on column names
fn is_header(fields: &[&str]) -> bool {
    fields.len() == TIME_SERIES_CSV_HEADER.len()
        && fields
            .iter()
            .zip(TIME_SERIES_CSV_HEADER)
            .all(|(field, expected)| field.eq_ignore_ascii_case(expected))
}

fn parse_field<T>(value: &str, line_no: usize, column: &str) -> Result<T, ParseError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e| {
        ParseError::InvalidFormat(format!(
            "line {}: invalid {} '{}': {}",
            line_no, column, value, e
        ))
    })
}

/// Convert a raw record into a sample
///
/// **Private** - validates latency values; `location` prefixes error messages
fn to_sample(record: &SampleRecord, location: &str) -> Result<Sample, ParseError> {
    let latency = LatencyStats::new(
        millis_to_duration(record.min_latency_ms, "min latency", location)?,
        millis_to_duration(record.avg_latency_ms, "avg latency", location)?,
        millis_to_duration(record.max_latency_ms, "max latency", location)?,
    );

    Ok(Sample::new(record.timestamp, latency, record.throughput))
}

/// Convert milliseconds to a Duration
///
/// **Private** - rejects negative, NaN and out-of-range values
fn millis_to_duration(ms: f64, name: &str, location: &str) -> Result<Duration, ParseError> {
    if !ms.is_finite() || ms < 0.0 {
        return Err(ParseError::InvalidFormat(format!(
            "{}: {} must be a non-negative number, got {}",
            location, name, ms
        )));
    }

    let nanos = (ms * 1_000_000.0).round();
    if nanos > u64::MAX as f64 {
        return Err(ParseError::InvalidFormat(format!(
            "{}: {} out of range: {}",
            location, name, ms
        )));
    }

    Ok(Duration::from_nanos(nanos as u64))
}

/// Build a report from an aggregated curve
///
/// **Public** - used by the aggregate command
pub fn to_report(
    series: &TimeSeries,
    buckets: &[CountBucket],
    unit: i64,
    total_requests: i64,
) -> LatencyCurveReport {
    use chrono::Utc;

    LatencyCurveReport {
        version: SCHEMA_VERSION.to_string(),
        unit,
        total_requests,
        sample_count: series.len(),
        observed_requests: series.total_throughput(),
        points: buckets.iter().map(CurvePoint::from).collect(),
        generated_at: Utc::now(),
    }
}
