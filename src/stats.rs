#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Stats {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub std_dev: f64,
}

/// Mean, extremes and sample standard deviation (n - 1 denominator).
///
/// Empty input yields all zeros. A single sample has no spread, so its
/// standard deviation is reported as zero instead of NaN.
pub fn calculate_stats(samples: &[f64]) -> Stats {
    let Some(&first) = samples.first() else {
        return Stats::default();
    };

    let (mut sum, mut min, mut max) = (0.0, first, first);
    for &v in samples {
        sum += v;
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    let mean = sum / samples.len() as f64;

    let std_dev = if samples.len() < 2 {
        0.0
    } else {
        let squared: f64 = samples.iter().map(|v| (v - mean).powi(2)).sum();
        (squared / (samples.len() - 1) as f64).sqrt()
    };

    Stats {
        mean,
        min,
        max,
        std_dev,
    }
}

#[test]
fn test_calculate_stats_known_values() {
    let stats = calculate_stats(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
    assert_eq!(stats.mean, 5.0);
    assert_eq!(stats.min, 2.0);
    assert_eq!(stats.max, 9.0);
    assert!((stats.std_dev - 2.138090).abs() < 1e-6, "got {}", stats.std_dev);
}

#[test]
fn test_calculate_stats_degenerate_inputs() {
    assert_eq!(calculate_stats(&[]), Stats::default());

    let single = calculate_stats(&[3.5]);
    assert_eq!(single.mean, 3.5);
    assert_eq!(single.min, 3.5);
    assert_eq!(single.max, 3.5);
    assert_eq!(single.std_dev, 0.0);

    let flat = calculate_stats(&[1.25; 6]);
    assert_eq!(flat.std_dev, 0.0);
}
