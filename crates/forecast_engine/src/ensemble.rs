//! Path ensemble storage.
//!
//! # Memory layout
//!
//! All paths live in one flat row-major buffer:
//! `prices[path_idx * (days + 1) + step_idx]`, with `step_idx = 0` holding
//! the start price. Contiguous storage keeps the per-path generation loop
//! and the per-timestep cross-section reads cache-friendly, instead of
//! allocating a `Vec` per simulated path.
//!
//! The ensemble is created and consumed within a single forecast run;
//! aggregation reduces it to percentile bands and only a small sample of
//! raw paths survives for inspection.

use rayon::prelude::*;

/// Number of raw paths retained in a [`Forecast`](crate::engine::Forecast)
/// for inspection after aggregation.
pub const SAMPLE_PATHS: usize = 5;

/// Ensemble of simulated price paths sharing one start price, drift,
/// volatility and horizon.
///
/// # Examples
///
/// ```rust
/// use forecast_engine::ensemble::PathEnsemble;
/// use forecast_engine::gbm::GbmParams;
/// use forecast_engine::simulate::simulate_paths_seeded;
///
/// let ensemble = simulate_paths_seeded(GbmParams::default(), 10, 100, 42).unwrap();
/// assert_eq!(ensemble.num_paths(), 100);
/// assert_eq!(ensemble.path(0).len(), 11);
/// ```
pub struct PathEnsemble {
    /// Flat row-major price buffer, num_paths x (days + 1).
    prices: Vec<f64>,
    num_paths: usize,
    days: usize,
}

impl PathEnsemble {
    /// Allocates a zero-filled ensemble.
    pub(crate) fn zeroed(num_paths: usize, days: usize) -> Self {
        Self {
            prices: vec![0.0; num_paths * (days + 1)],
            num_paths,
            days,
        }
    }

    /// Returns the number of independent paths.
    #[inline]
    pub fn num_paths(&self) -> usize {
        self.num_paths
    }

    /// Returns the simulated horizon in days.
    #[inline]
    pub fn days(&self) -> usize {
        self.days
    }

    /// Returns the length of each path (`days + 1`, day 0 included).
    #[inline]
    pub fn path_len(&self) -> usize {
        self.days + 1
    }

    /// Returns one path as a slice of `days + 1` prices.
    #[inline]
    pub fn path(&self, path_idx: usize) -> &[f64] {
        let len = self.path_len();
        &self.prices[path_idx * len..(path_idx + 1) * len]
    }

    /// Mutable per-path rows, for the generation loop.
    #[inline]
    pub(crate) fn paths_mut(&mut self) -> std::slice::ChunksMut<'_, f64> {
        let len = self.path_len();
        self.prices.chunks_mut(len)
    }

    /// Parallel mutable per-path rows, for the Rayon generation branch.
    #[inline]
    pub(crate) fn par_paths_mut(&mut self) -> rayon::slice::ChunksMut<'_, f64> {
        let len = self.path_len();
        self.prices.par_chunks_mut(len)
    }

    /// Gathers the cross-section of all paths at one day index into `out`.
    ///
    /// `out` is cleared and refilled; reusing one scratch buffer across
    /// timesteps keeps aggregation allocation-light.
    pub fn cross_section_into(&self, step: usize, out: &mut Vec<f64>) {
        debug_assert!(step < self.path_len());
        out.clear();
        out.extend((0..self.num_paths).map(|p| self.prices[p * self.path_len() + step]));
    }

    /// Copies out the first [`SAMPLE_PATHS`] paths for inspection.
    ///
    /// Everything else is discarded when the ensemble is dropped after
    /// aggregation.
    pub fn sample_paths(&self) -> Vec<Vec<f64>> {
        (0..self.num_paths.min(SAMPLE_PATHS))
            .map(|p| self.path(p).to_vec())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ensemble_with_ramp(num_paths: usize, days: usize) -> PathEnsemble {
        // path p, step t holds p * 1000 + t for addressing checks.
        let mut ensemble = PathEnsemble::zeroed(num_paths, days);
        for (p, path) in ensemble.paths_mut().enumerate() {
            for (t, price) in path.iter_mut().enumerate() {
                *price = (p * 1000 + t) as f64;
            }
        }
        ensemble
    }

    #[test]
    fn dimensions() {
        let ensemble = PathEnsemble::zeroed(10, 5);
        assert_eq!(ensemble.num_paths(), 10);
        assert_eq!(ensemble.days(), 5);
        assert_eq!(ensemble.path_len(), 6);
    }

    #[test]
    fn path_addressing_is_row_major() {
        let ensemble = ensemble_with_ramp(4, 3);
        assert_eq!(ensemble.path(0), &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(ensemble.path(2)[1], 2001.0);
    }

    #[test]
    fn cross_section_gathers_one_step_from_every_path() {
        let ensemble = ensemble_with_ramp(4, 3);
        let mut section = Vec::new();
        ensemble.cross_section_into(2, &mut section);
        assert_eq!(section, vec![2.0, 1002.0, 2002.0, 3002.0]);
    }

    #[test]
    fn cross_section_reuses_scratch_buffer() {
        let ensemble = ensemble_with_ramp(3, 2);
        let mut section = vec![99.0; 50];
        ensemble.cross_section_into(0, &mut section);
        assert_eq!(section.len(), 3);
    }

    #[test]
    fn sample_paths_caps_at_five() {
        let ensemble = ensemble_with_ramp(8, 2);
        let samples = ensemble.sample_paths();
        assert_eq!(samples.len(), SAMPLE_PATHS);
        assert_eq!(samples[4][0], 4000.0);
    }

    #[test]
    fn sample_paths_with_fewer_paths_than_cap() {
        let ensemble = ensemble_with_ramp(2, 2);
        assert_eq!(ensemble.sample_paths().len(), 2);
    }

    #[test]
    fn zero_day_horizon_has_single_point_paths() {
        let ensemble = PathEnsemble::zeroed(3, 0);
        assert_eq!(ensemble.path_len(), 1);
        assert_eq!(ensemble.path(2).len(), 1);
    }
}
