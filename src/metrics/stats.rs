pub(super) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation, divisor n-1. Zero for fewer than two values.
pub(super) fn sample_stdev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values);
    let squared_sum: f64 = values
        .iter()
        .map(|value| {
            let diff = value - avg;
            diff * diff
        })
        .sum();
    (squared_sum / values.len().saturating_sub(1) as f64).sqrt()
}
