use latency_curve::parser::{read_samples, parse_samples_json, SampleFormat};
use latency_curve::utils::ParseError;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tempfile::Builder;

const DBTESTER_CSV: &str = "\
UNIX-SECOND,MIN-LATENCY-MS,AVG-LATENCY-MS,MAX-LATENCY-MS,AVG-THROUGHPUT
1500000002,0.5,1.25,3.0,1800
1500000000,0.4,1.0,2.5,1200
1500000001,0.6,1.5,4.0,1500
";

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_read_csv_samples() {
    let file = write_temp(".csv", DBTESTER_CSV);
    let series = read_samples(file.path()).unwrap();

    assert_eq!(series.len(), 3);
    assert_eq!(series.total_throughput(), 4500);
    assert_eq!(series.samples()[0].latency.avg, Duration::from_micros(1250));
}

#[test]
fn test_read_json_samples() {
    let file = write_temp(
        ".json",
        r#"{"samples": [{"timestamp": 1, "min_latency_ms": 0.5, "avg_latency_ms": 2,
                         "max_latency_ms": 4, "throughput": 10}]}"#,
    );
    let series = read_samples(file.path()).unwrap();

    assert_eq!(series.len(), 1);
    assert_eq!(series.samples()[0].latency.min, Duration::from_micros(500));
}

#[test]
fn test_read_missing_file() {
    let result = read_samples(Path::new("/no/such/samples.json"));
    assert!(matches!(result, Err(ParseError::IoError(_))));
}

#[test]
fn test_read_malformed_json() {
    let file = write_temp(".json", "{not json");
    assert!(matches!(read_samples(file.path()), Err(ParseError::JsonError(_))));
}

#[test]
fn test_json_missing_timestamp() {
    let result = parse_samples_json(r#"[{"throughput": 3}]"#);
    assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
}

#[test]
fn test_json_negative_throughput_rejected() {
    let result = parse_samples_json(r#"[{"timestamp": 1, "throughput": -3}]"#);
    assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
}

#[test]
fn test_format_detection() {
    assert_eq!(SampleFormat::from_path(Path::new("a/b/timeseries.csv")), SampleFormat::Csv);
    assert_eq!(SampleFormat::from_path(Path::new("a/b/samples.json")), SampleFormat::Json);
}
