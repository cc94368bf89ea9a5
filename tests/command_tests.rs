use latency_curve::commands::{execute_aggregate, AggregateArgs};
use latency_curve::output::read_report;
use std::io::Write;
use tempfile::Builder;

const SAMPLES: &str = "\
UNIX-SECOND,MIN-LATENCY-MS,AVG-LATENCY-MS,MAX-LATENCY-MS,AVG-THROUGHPUT
2,1.0,7.0,12.0,8
1,1.0,5.0,10.0,4
";

fn sample_file() -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(SAMPLES.as_bytes()).unwrap();
    file
}

#[test]
fn test_execute_aggregate_writes_outputs() {
    let input = sample_file();
    let out_dir = tempfile::tempdir().unwrap();
    let json_path = out_dir.path().join("report.json");
    let csv_path = out_dir.path().join("curve.csv");

    let args = AggregateArgs {
        input: input.path().to_path_buf(),
        unit: 10,
        total_requests: Some(25),
        output_json: Some(json_path.clone()),
        output_csv: Some(csv_path.clone()),
        print_summary: true,
        table_rows: 5,
    };

    let report = execute_aggregate(args).unwrap();

    let counts: Vec<u64> = report.points.iter().map(|p| p.count).collect();
    assert_eq!(counts, vec![10, 20, 25]);
    assert_eq!(report.points[0].avg_latency_ms, 7.0);
    assert_eq!(report.observed_requests, 12);

    let loaded = read_report(&json_path).unwrap();
    assert_eq!(loaded.points.len(), 3);
    assert!(csv_path.exists());
}

#[test]
fn test_execute_aggregate_defaults_total_to_observed() {
    let input = sample_file();
    let args = AggregateArgs {
        input: input.path().to_path_buf(),
        unit: 5,
        total_requests: None,
        output_json: None,
        ..AggregateArgs::default()
    };

    let report = execute_aggregate(args).unwrap();

    assert_eq!(report.total_requests, 12);
    let counts: Vec<u64> = report.points.iter().map(|p| p.count).collect();
    assert_eq!(counts, vec![5, 10, 12]);
}

#[test]
fn test_execute_aggregate_rejects_zero_unit() {
    let input = sample_file();
    let args = AggregateArgs {
        input: input.path().to_path_buf(),
        unit: 0,
        output_json: None,
        ..AggregateArgs::default()
    };

    assert!(execute_aggregate(args).is_err());
}
