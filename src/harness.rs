use std::hint::black_box;
use std::time::Instant;

use crate::array_gen::{MAX_ARRAY_SIZE, generate_sorted_array};
use crate::data_models::PerformanceData;
use crate::search::SearchVariant;
use crate::stats::{Stats, calculate_stats};

pub const DEFAULT_BATCHES: usize = 20;
pub const DEFAULT_RUNS_PER_BATCH: usize = 1000;
pub const DEFAULT_WARMUP_RUNS: usize = 1000;

const BYTES_PER_ELEMENT: usize = 8;
const KIB: f64 = 1024.0;
const MIB: f64 = 1024.0 * 1024.0;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HarnessError {
    #[error("array size must be at least 1")]
    EmptyArray,

    #[error("array size {0} exceeds the maximum of {max}", max = MAX_ARRAY_SIZE)]
    ArrayTooLarge(usize),

    #[error("batches must be at least 1")]
    ZeroBatches,

    #[error("runsPerBatch must be at least 1")]
    ZeroRuns,
}

/// Timing summary of one search variant over all batches.
#[derive(Debug, Clone, Copy, PartialEq)]
struct VariantTiming {
    time: Stats,
    mean_comparisons: f64,
}

/// Times the fast search variants against each other across array sizes.
#[derive(Debug, Clone, Copy)]
pub struct PerformanceHarness {
    batches: usize,
    runs_per_batch: usize,
    warmup_runs: usize,
}

impl Default for PerformanceHarness {
    fn default() -> Self {
        Self {
            batches: DEFAULT_BATCHES,
            runs_per_batch: DEFAULT_RUNS_PER_BATCH,
            warmup_runs: DEFAULT_WARMUP_RUNS,
        }
    }
}

impl PerformanceHarness {
    pub fn new(batches: usize, runs_per_batch: usize) -> Result<Self, HarnessError> {
        if batches == 0 {
            return Err(HarnessError::ZeroBatches);
        }
        if runs_per_batch == 0 {
            return Err(HarnessError::ZeroRuns);
        }
        Ok(Self {
            batches,
            runs_per_batch,
            warmup_runs: DEFAULT_WARMUP_RUNS,
        })
    }

    pub fn with_warmup_runs(mut self, warmup_runs: usize) -> Self {
        self.warmup_runs = warmup_runs;
        self
    }

    pub fn batches(&self) -> usize {
        self.batches
    }

    pub fn runs_per_batch(&self) -> usize {
        self.runs_per_batch
    }

    /// Measures every size in order. Fails up front if any size is out of
    /// range, so no time is spent on a request that cannot complete.
    pub fn run(&self, sizes: &[usize]) -> Result<Vec<PerformanceData>, HarnessError> {
        for &size in sizes {
            check_size(size)?;
        }
        sizes.iter().map(|&size| self.measure(size)).collect()
    }

    pub fn measure(&self, size: usize) -> Result<PerformanceData, HarnessError> {
        check_size(size)?;
        let arr = generate_sorted_array(size);
        let target = arr[size / 2];

        for _ in 0..self.warmup_runs {
            for variant in SearchVariant::ALL {
                black_box(variant.count_comparisons(black_box(&arr), black_box(target)));
            }
        }

        let mut iterative = BatchSamples::with_capacity(self.batches);
        let mut recursive = BatchSamples::with_capacity(self.batches);
        for _ in 0..self.batches {
            iterative.record(self.time_batch(SearchVariant::Iterative, &arr, target));
            recursive.record(self.time_batch(SearchVariant::Recursive, &arr, target));
        }
        let iterative = iterative.summarize();
        let recursive = recursive.summarize();

        log::info!("Completed performance test for size: {size}");

        Ok(PerformanceData {
            size,
            iterative_time_avg: iterative.time.mean,
            recursive_time_avg: recursive.time.mean,
            iterative_comparisons: iterative.mean_comparisons,
            recursive_comparisons: recursive.mean_comparisons,
            iterative_time_std_dev: iterative.time.std_dev,
            recursive_time_std_dev: recursive.time.std_dev,
            iterative_min_time: iterative.time.min,
            iterative_max_time: iterative.time.max,
            recursive_min_time: recursive.time.min,
            recursive_max_time: recursive.time.max,
            theoretical_comparisons: theoretical_comparisons(size),
            memory_estimate: memory_estimate(size),
        })
    }

    /// Returns (mean microseconds per call, mean comparisons per call).
    fn time_batch(&self, variant: SearchVariant, arr: &[i64], target: i64) -> (f64, f64) {
        let mut comparisons = 0usize;
        let start = Instant::now();
        for _ in 0..self.runs_per_batch {
            comparisons += black_box(variant.count_comparisons(black_box(arr), black_box(target)));
        }
        let elapsed = start.elapsed();

        let runs = self.runs_per_batch as f64;
        let micros_per_call = elapsed.as_nanos() as f64 / runs / 1000.0;
        (micros_per_call, comparisons as f64 / runs)
    }
}

fn check_size(size: usize) -> Result<(), HarnessError> {
    match size {
        0 => Err(HarnessError::EmptyArray),
        s if s > MAX_ARRAY_SIZE => Err(HarnessError::ArrayTooLarge(s)),
        _ => Ok(()),
    }
}

struct BatchSamples {
    times: Vec<f64>,
    comparisons: Vec<f64>,
}

impl BatchSamples {
    fn with_capacity(batches: usize) -> Self {
        Self {
            times: Vec::with_capacity(batches),
            comparisons: Vec::with_capacity(batches),
        }
    }

    fn record(&mut self, (time, comparisons): (f64, f64)) {
        self.times.push(time);
        self.comparisons.push(comparisons);
    }

    fn summarize(&self) -> VariantTiming {
        let mean_comparisons = if self.comparisons.is_empty() {
            0.0
        } else {
            self.comparisons.iter().sum::<f64>() / self.comparisons.len() as f64
        };
        VariantTiming {
            time: calculate_stats(&self.times),
            mean_comparisons,
        }
    }
}

/// ceil(log2(size)). This underestimates the exact worst case,
/// ceil(log2(size + 1)), by one when size is a power of two; clients
/// compare against this value so it is kept as is.
pub fn theoretical_comparisons(size: usize) -> u32 {
    if size <= 1 {
        return 0;
    }
    (size as f64).log2().ceil() as u32
}

/// Footprint of `size` 8-byte elements, e.g. "7.81 KB" or "7.63 MB".
pub fn memory_estimate(size: usize) -> String {
    let bytes = (size * BYTES_PER_ELEMENT) as f64;
    if bytes >= MIB {
        format!("{:.2} MB", bytes / MIB)
    } else {
        format!("{:.2} KB", bytes / KIB)
    }
}

#[test]
fn test_theoretical_comparisons() {
    assert_eq!(theoretical_comparisons(1), 0);
    assert_eq!(theoretical_comparisons(2), 1);
    assert_eq!(theoretical_comparisons(10), 4);
    assert_eq!(theoretical_comparisons(100), 7);
    assert_eq!(theoretical_comparisons(1024), 10);
    assert_eq!(theoretical_comparisons(1025), 11);
    assert_eq!(theoretical_comparisons(1_000_000), 20);
}

#[test]
fn test_memory_estimate() {
    assert_eq!(memory_estimate(10), "0.08 KB");
    assert_eq!(memory_estimate(1000), "7.81 KB");
    assert_eq!(memory_estimate(131_071), "1023.99 KB");
    assert_eq!(memory_estimate(131_072), "1.00 MB");
    assert_eq!(memory_estimate(1_000_000), "7.63 MB");
}
