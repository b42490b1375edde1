use binsearch::array_gen::MAX_ARRAY_SIZE;
use binsearch::harness::*;

fn quick_harness() -> PerformanceHarness {
    PerformanceHarness::new(3, 25)
        .expect("valid harness settings")
        .with_warmup_runs(10)
}

/// `lo <= hi`, allowing for rounding in the mean.
fn assert_ordered(lo: f64, hi: f64) {
    assert!(lo <= hi + 1e-9, "{lo} > {hi}");
}

#[test]
fn test_default_settings() {
    let harness = PerformanceHarness::default();
    assert_eq!(harness.batches(), 20);
    assert_eq!(harness.runs_per_batch(), 1000);
}

#[test]
fn test_rejects_zero_settings() {
    assert_eq!(
        PerformanceHarness::new(0, 10).unwrap_err(),
        HarnessError::ZeroBatches
    );
    assert_eq!(
        PerformanceHarness::new(10, 0).unwrap_err(),
        HarnessError::ZeroRuns
    );
}

#[test]
fn test_records_follow_input_order() {
    let results = quick_harness().run(&[100, 10, 1]).unwrap();
    let sizes: Vec<usize> = results.iter().map(|r| r.size).collect();
    assert_eq!(sizes, vec![100, 10, 1]);
}

#[test]
fn test_record_contents() {
    let results = quick_harness().run(&[10, 100]).unwrap();
    assert_eq!(results.len(), 2);

    for record in &results {
        assert_eq!(
            record.theoretical_comparisons,
            (record.size as f64).log2().ceil() as u32
        );
        assert!(record.memory_estimate.ends_with("KB") || record.memory_estimate.ends_with("MB"));

        // the target always sits at size/2, so every run compares the same way
        assert_eq!(record.iterative_comparisons, record.recursive_comparisons);
        assert!(record.iterative_comparisons >= 1.0);
        assert_eq!(record.iterative_comparisons.fract(), 0.0);

        assert_ordered(record.iterative_min_time, record.iterative_time_avg);
        assert_ordered(record.iterative_time_avg, record.iterative_max_time);
        assert_ordered(record.recursive_min_time, record.recursive_time_avg);
        assert_ordered(record.recursive_time_avg, record.recursive_max_time);
        assert!(record.iterative_time_std_dev >= 0.0);
        assert!(record.recursive_time_std_dev >= 0.0);
    }

    assert_eq!(results[0].iterative_comparisons, 3.0);
    assert_eq!(results[0].memory_estimate, "0.08 KB");
    assert_eq!(results[1].memory_estimate, "0.78 KB");
}

#[test]
fn test_single_batch_has_zero_spread() {
    let harness = PerformanceHarness::new(1, 5).unwrap().with_warmup_runs(0);
    let record = harness.measure(32).unwrap();
    assert_eq!(record.iterative_time_std_dev, 0.0);
    assert_eq!(record.recursive_time_std_dev, 0.0);
    assert_eq!(record.iterative_min_time, record.iterative_max_time);
}

#[test]
fn test_empty_size_is_rejected() {
    let harness = quick_harness();
    assert_eq!(harness.measure(0).unwrap_err(), HarnessError::EmptyArray);
    assert_eq!(harness.run(&[10, 0]).unwrap_err(), HarnessError::EmptyArray);
    assert!(harness.run(&[]).unwrap().is_empty());
}

#[test]
fn test_oversized_size_is_rejected_before_allocating() {
    let harness = quick_harness();
    let too_big = MAX_ARRAY_SIZE + 1;
    assert_eq!(
        harness.measure(too_big).unwrap_err(),
        HarnessError::ArrayTooLarge(too_big)
    );
    assert_eq!(
        harness.run(&[10, usize::MAX]).unwrap_err(),
        HarnessError::ArrayTooLarge(usize::MAX)
    );
}
