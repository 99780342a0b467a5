//! Percentile Computation
//!
//! Linear interpolation between nearest ranks over an already-sorted slice.

/// Compute the percentile at `fraction` (0.0 to 1.0) of a sorted slice.
///
/// The rank is `(n - 1) * fraction`. When the rank lands exactly on an
/// element that element is returned; otherwise the two neighbouring ranks
/// are interpolated, weighted by the fractional distance between them.
///
/// Returns `None` for an empty slice.
///
/// # Examples
///
/// ```
/// # use stridebench_stats::percentile;
/// let samples = vec![1.0, 2.0, 3.0, 4.0];
/// assert_eq!(percentile(&samples, 0.5), Some(2.5));
/// assert_eq!(percentile(&[], 0.5), None);
/// ```
pub fn percentile(sorted: &[f64], fraction: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let n = sorted.len();
    let rank = (n - 1) as f64 * fraction;
    let lower = rank.floor() as usize;
    let upper = (rank.ceil() as usize).min(n - 1);

    if lower == upper {
        return Some(sorted[lower]);
    }

    let weight = rank - lower as f64;
    Some(sorted[lower] * (1.0 - weight) + sorted[upper] * weight)
}

/// Median of a sorted slice (`None` when empty).
pub fn median(sorted: &[f64]) -> Option<f64> {
    percentile(sorted, 0.5)
}
