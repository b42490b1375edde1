use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One comparison of a binary search, captured for visualization.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchStep {
    pub left: usize,
    pub right: usize,
    pub mid: usize,
    pub comparing: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
}

impl SearchStep {
    pub fn new(left: usize, right: usize, mid: usize, comparing: i64) -> SearchStep {
        SearchStep {
            left,
            right,
            mid,
            comparing,
            depth: None,
        }
    }

    pub fn with_depth(mut self, depth: usize) -> SearchStep {
        self.depth = Some(depth);
        self
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub found: bool,
    /// Position of the target, or -1 when absent.
    pub index: i64,
    pub comparisons: usize,
    pub steps: Vec<SearchStep>,
    /// Wall-clock nanoseconds.
    pub execution_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl SearchResult {
    pub fn new(
        index: Option<usize>,
        comparisons: usize,
        steps: Vec<SearchStep>,
        elapsed: Duration,
    ) -> SearchResult {
        SearchResult {
            found: index.is_some(),
            index: index.map_or(-1, |i| i as i64),
            comparisons,
            steps,
            execution_time: elapsed.as_nanos() as f64,
            max_depth: None,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> SearchResult {
        self.max_depth = Some(max_depth);
        self
    }
}

/// Aggregated timings for one array size. Times are microseconds per call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceData {
    pub size: usize,
    pub iterative_time_avg: f64,
    pub recursive_time_avg: f64,
    pub iterative_comparisons: f64,
    pub recursive_comparisons: f64,
    pub iterative_time_std_dev: f64,
    pub recursive_time_std_dev: f64,
    pub iterative_min_time: f64,
    pub iterative_max_time: f64,
    pub recursive_min_time: f64,
    pub recursive_max_time: f64,
    pub theoretical_comparisons: u32,
    pub memory_estimate: String,
}
