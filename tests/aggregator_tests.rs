use latency_curve::aggregator::{aggregate, summarize_curve, CountBucket, LatencyStats, Sample};
use latency_curve::utils::AggregateError;
use pretty_assertions::assert_eq;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn sample(timestamp: i64, throughput: u64, avg_ms: u64) -> Sample {
    Sample::new(timestamp, LatencyStats::new(ms(1), ms(avg_ms), ms(avg_ms + 10)), throughput)
}

fn load_test_samples() -> Vec<Sample> {
    vec![
        sample(5, 1200, 11),
        sample(1, 300, 4),
        sample(3, 0, 99),
        sample(2, 2600, 6),
        sample(4, 900, 8),
        sample(6, 50, 12),
    ]
}

fn keys(buckets: &[CountBucket]) -> Vec<u64> {
    buckets.iter().map(|b| b.count).collect()
}

#[test]
fn test_worked_example() {
    let samples = vec![sample(1, 4, 5), sample(2, 8, 7)];
    let buckets = aggregate(samples, 10, 25).unwrap();

    assert_eq!(
        buckets,
        vec![
            CountBucket::new(10, LatencyStats::new(ms(1), ms(7), ms(17))),
            CountBucket::empty(20),
            CountBucket::empty(25),
        ]
    );
}

#[test]
fn test_empty_samples_example() {
    let buckets = aggregate(Vec::new(), 5, 12).unwrap();
    assert_eq!(
        buckets,
        vec![CountBucket::empty(5), CountBucket::empty(10), CountBucket::empty(12)]
    );
}

#[test]
fn test_zero_unit_example() {
    assert!(matches!(
        aggregate(load_test_samples(), 0, 100),
        Err(AggregateError::InvalidArgument(_))
    ));
}

#[test]
fn test_order_independence() {
    let expected = aggregate(load_test_samples(), 500, 6000).unwrap();

    let mut reversed = load_test_samples();
    reversed.reverse();
    assert_eq!(aggregate(reversed, 500, 6000).unwrap(), expected);

    for shift in 1..load_test_samples().len() {
        let mut rotated = load_test_samples();
        rotated.rotate_left(shift);
        assert_eq!(aggregate(rotated, 500, 6000).unwrap(), expected);
    }
}

#[test]
fn test_determinism() {
    let first = aggregate(load_test_samples(), 700, 5000).unwrap();
    let second = aggregate(load_test_samples(), 700, 5000).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_keys_strictly_increasing_and_aligned() {
    for (unit, total) in [(1, 20), (7, 5050), (500, 4999), (1000, 10_000), (3000, 0)] {
        let buckets = aggregate(load_test_samples(), unit, total).unwrap();
        let unit = unit as u64;
        let total = total as u64;

        for pair in buckets.windows(2) {
            assert!(pair[0].count < pair[1].count);
        }
        for bucket in &buckets {
            assert!(bucket.count > 0);
            assert!(bucket.count % unit == 0 || bucket.count == total);
        }
        if total > 0 {
            assert!(buckets.iter().any(|b| b.count == total));
        }
    }
}

#[test]
fn test_walk_follows_time_order() {
    // cumulative: 300, 2900, 2900, 3800, 5000, 5050
    let buckets = aggregate(load_test_samples(), 1000, 6000).unwrap();

    assert_eq!(keys(&buckets), vec![1000, 2000, 3000, 4000, 5000, 6000]);
    assert_eq!(buckets[0].latency.avg, ms(6));
    assert_eq!(buckets[1].latency.avg, ms(6));
    // the zero-throughput sample at t=3 never reaches anything
    assert_eq!(buckets[2].latency.avg, ms(8));
    assert_eq!(buckets[3].latency.avg, ms(11));
    assert_eq!(buckets[4].latency.avg, ms(11));
    assert!(buckets[5].is_empty());
}

#[test]
fn test_gap_fill_between_walk_and_total() {
    let buckets = aggregate(vec![sample(1, 25, 3)], 10, 60).unwrap();

    assert_eq!(keys(&buckets), vec![10, 20, 30, 40, 50, 60]);
    assert!(!buckets[1].is_empty());
    assert!(buckets[2..].iter().all(CountBucket::is_empty));
}

#[test]
fn test_gap_fill_when_no_threshold_reached() {
    let buckets = aggregate(vec![sample(1, 9, 3)], 10, 35).unwrap();

    assert_eq!(keys(&buckets), vec![10, 20, 30, 35]);
    assert!(buckets.iter().all(CountBucket::is_empty));
}

#[test]
fn test_total_not_a_multiple_of_unit() {
    let buckets = aggregate(vec![sample(1, 40, 2)], 10, 45).unwrap();

    assert_eq!(keys(&buckets), vec![10, 20, 30, 40, 45]);
    assert!(buckets[4].is_empty());
}

#[test]
fn test_summary_over_aggregated_curve() {
    let buckets = aggregate(vec![sample(1, 20, 4), sample(2, 10, 8)], 10, 50).unwrap();
    let summary = summarize_curve(&buckets);

    assert_eq!(summary.bucket_count, 5);
    assert_eq!(summary.observed_buckets, 3);
    assert_eq!(summary.empty_buckets, 2);
    assert_eq!(summary.final_count, 50);
    assert_eq!(summary.peak_avg_latency, ms(8));
}
