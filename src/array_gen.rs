/// Largest array the service will materialize (800 MB of `i64`s).
pub const MAX_ARRAY_SIZE: usize = 100_000_000;

/// Returns `[1, 2, ..., size]`. Callers bound `size` by [`MAX_ARRAY_SIZE`].
pub fn generate_sorted_array(size: usize) -> Vec<i64> {
    (1..=size as i64).collect()
}

#[test]
fn test_generate_sorted_array() {
    assert_eq!(generate_sorted_array(5), vec![1, 2, 3, 4, 5]);
    assert!(generate_sorted_array(0).is_empty());
    assert_eq!(generate_sorted_array(1), vec![1]);

    let big = generate_sorted_array(10_000);
    assert_eq!(big.len(), 10_000);
    assert!(big.windows(2).all(|w| w[1] == w[0] + 1));
}
