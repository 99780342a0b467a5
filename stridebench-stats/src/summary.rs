//! Sample Summaries
//!
//! Basic aggregates over `f64` slices. Empty input degrades to 0.0 rather
//! than erroring; callers that must distinguish empty input check before.

/// Sum of all values.
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Arithmetic mean, 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        sum(values) / values.len() as f64
    }
}

/// Smallest value, 0.0 for empty input.
pub fn min(values: &[f64]) -> f64 {
    values
        .iter()
        .cloned()
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .unwrap_or(0.0)
}

/// Largest value, 0.0 for empty input.
pub fn max(values: &[f64]) -> f64 {
    values
        .iter()
        .cloned()
        .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .unwrap_or(0.0)
}

/// Ascending copy of `values`, suitable for the percentile estimator.
pub fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}
