use std::cmp::Ordering;
use std::time::Instant;

use crate::data_models::{SearchResult, SearchStep};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchVariant {
    Iterative,
    Recursive,
}

impl SearchVariant {
    pub const ALL: [SearchVariant; 2] = [SearchVariant::Iterative, SearchVariant::Recursive];

    pub fn name(self) -> &'static str {
        match self {
            SearchVariant::Iterative => "iterative",
            SearchVariant::Recursive => "recursive",
        }
    }

    /// Search with a full step trace.
    pub fn trace(self, arr: &[i64], target: i64) -> SearchResult {
        match self {
            SearchVariant::Iterative => binary_search_iterative(arr, target),
            SearchVariant::Recursive => binary_search_recursive(arr, target),
        }
    }

    /// Search without bookkeeping, returning only the comparison count.
    pub fn count_comparisons(self, arr: &[i64], target: i64) -> usize {
        match self {
            SearchVariant::Iterative => count_comparisons_iterative(arr, target),
            SearchVariant::Recursive => count_comparisons_recursive(arr, target),
        }
    }
}

/// Worst-case number of comparisons for a slice of `len` elements,
/// i.e. floor(log2(len)) + 1, or 0 for an empty slice.
pub fn max_comparisons(len: usize) -> usize {
    (usize::BITS - len.leading_zeros()) as usize
}

pub fn binary_search_iterative(arr: &[i64], target: i64) -> SearchResult {
    let start = Instant::now();
    let mut steps = Vec::with_capacity(max_comparisons(arr.len()));
    let mut comparisons = 0;
    let mut left: isize = 0;
    let mut right: isize = arr.len() as isize - 1;

    while left <= right {
        let mid = left + (right - left) / 2;
        let value = arr[mid as usize];
        comparisons += 1;
        steps.push(SearchStep::new(
            left as usize,
            right as usize,
            mid as usize,
            value,
        ));

        match value.cmp(&target) {
            Ordering::Equal => {
                return SearchResult::new(Some(mid as usize), comparisons, steps, start.elapsed());
            }
            Ordering::Less => left = mid + 1,
            Ordering::Greater => right = mid - 1,
        }
    }

    SearchResult::new(None, comparisons, steps, start.elapsed())
}

pub fn binary_search_recursive(arr: &[i64], target: i64) -> SearchResult {
    let start = Instant::now();
    let mut tracer = RecursiveTracer {
        arr,
        target,
        steps: Vec::with_capacity(max_comparisons(arr.len())),
        comparisons: 0,
        max_depth: 0,
    };
    let index = tracer.search(0, arr.len() as isize - 1, 0);
    let elapsed = start.elapsed();

    SearchResult::new(index, tracer.comparisons, tracer.steps, elapsed)
        .with_max_depth(tracer.max_depth)
}

struct RecursiveTracer<'a> {
    arr: &'a [i64],
    target: i64,
    steps: Vec<SearchStep>,
    comparisons: usize,
    max_depth: usize,
}

impl RecursiveTracer<'_> {
    fn search(&mut self, left: isize, right: isize, depth: usize) -> Option<usize> {
        if left > right {
            return None;
        }
        // only calls that compare count towards the depth
        self.max_depth = self.max_depth.max(depth);

        let mid = left + (right - left) / 2;
        let value = self.arr[mid as usize];
        self.comparisons += 1;
        self.steps.push(
            SearchStep::new(left as usize, right as usize, mid as usize, value).with_depth(depth),
        );

        match value.cmp(&self.target) {
            Ordering::Equal => Some(mid as usize),
            Ordering::Less => self.search(mid + 1, right, depth + 1),
            Ordering::Greater => self.search(left, mid - 1, depth + 1),
        }
    }
}

pub fn count_comparisons_iterative(arr: &[i64], target: i64) -> usize {
    let mut comparisons = 0;
    let mut left: isize = 0;
    let mut right: isize = arr.len() as isize - 1;

    while left <= right {
        let mid = left + (right - left) / 2;
        comparisons += 1;
        match arr[mid as usize].cmp(&target) {
            Ordering::Equal => return comparisons,
            Ordering::Less => left = mid + 1,
            Ordering::Greater => right = mid - 1,
        }
    }
    comparisons
}

pub fn count_comparisons_recursive(arr: &[i64], target: i64) -> usize {
    fn search(arr: &[i64], target: i64, left: isize, right: isize, comparisons: &mut usize) {
        if left > right {
            return;
        }
        let mid = left + (right - left) / 2;
        *comparisons += 1;
        match arr[mid as usize].cmp(&target) {
            Ordering::Equal => {}
            Ordering::Less => search(arr, target, mid + 1, right, comparisons),
            Ordering::Greater => search(arr, target, left, mid - 1, comparisons),
        }
    }

    let mut comparisons = 0;
    search(arr, target, 0, arr.len() as isize - 1, &mut comparisons);
    comparisons
}

#[test]
fn test_max_comparisons() {
    assert_eq!(max_comparisons(0), 0);
    assert_eq!(max_comparisons(1), 1);
    assert_eq!(max_comparisons(2), 2);
    assert_eq!(max_comparisons(3), 2);
    assert_eq!(max_comparisons(7), 3);
    assert_eq!(max_comparisons(8), 4);
    assert_eq!(max_comparisons(1_000_000), 20);
}

#[test]
fn test_recursive_trace_depths_follow_step_order() {
    let arr: Vec<i64> = (1..=15).collect();
    let result = binary_search_recursive(&arr, 1);

    assert!(result.found);
    assert_eq!(result.index, 0);
    let depths: Vec<_> = result.steps.iter().map(|s| s.depth).collect();
    assert_eq!(depths, vec![Some(0), Some(1), Some(2), Some(3)]);
    assert_eq!(result.max_depth, Some(3));
}
