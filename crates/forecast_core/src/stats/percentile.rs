//! Nearest-rank percentile selection.
//!
//! The forecast bands are reproducible across runs and platforms because
//! the percentile estimator returns an actual observed value from the
//! sorted sample: index `floor(p * n)`, clamped to `n - 1`. No
//! interpolation between observations.

/// Selects the nearest-rank percentile from an ascending-sorted sample.
///
/// For `n` values and percentile `p` in `[0, 1]`, returns the element at
/// sorted index `floor(p * n)`, clamped to `n - 1`. With `n = 1000`,
/// `p = 0.05` picks index 50 and `p = 0.50` picks index 500 — exactly, as
/// the band contract requires.
///
/// The caller supplies the slice already sorted; sorting lives with the
/// aggregation loop so one sort serves all five ranks.
///
/// # Panics
///
/// Debug builds assert the sample is non-empty.
#[inline]
pub fn nearest_rank(sorted: &[f64], percentile: f64) -> f64 {
    debug_assert!(!sorted.is_empty(), "percentile of empty sample");
    let index = (percentile * sorted.len() as f64).floor() as usize;
    sorted[index.min(sorted.len() - 1)]
}
