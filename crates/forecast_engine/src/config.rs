//! Forecast engine configuration.

use crate::error::ConfigError;
use crate::gbm::DEFAULT_DRIFT;

/// Maximum number of simulated paths per run.
pub const MAX_PATHS: usize = 1_000_000;

/// Maximum forecast horizon in trading days.
pub const MAX_DAYS: usize = 10_000;

/// Default ensemble size.
pub const DEFAULT_PATHS: usize = 1_000;

/// Engine-level configuration shared by every run of a
/// [`ForecastEngine`](crate::engine::ForecastEngine).
///
/// Per-run inputs (price history, live price, horizon, stress multiplier)
/// travel in [`ForecastRequest`](crate::engine::ForecastRequest) instead;
/// one configured engine serves many instruments and horizons.
///
/// # Examples
///
/// ```rust
/// use forecast_engine::config::ForecastConfig;
///
/// let config = ForecastConfig::default().with_paths(10_000).with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForecastConfig {
    /// Number of Monte Carlo paths per run.
    pub num_paths: usize,
    /// Annualised drift applied to every run.
    pub drift: f64,
    /// Fixed run seed. `None` draws a fresh entropy seed per run; the
    /// drawn seed is recorded in the forecast for replay.
    pub seed: Option<u64>,
}

impl ForecastConfig {
    /// Sets the ensemble size.
    #[inline]
    pub fn with_paths(mut self, num_paths: usize) -> Self {
        self.num_paths = num_paths;
        self
    }

    /// Overrides the annualised drift.
    #[inline]
    pub fn with_drift(mut self, drift: f64) -> Self {
        self.drift = drift;
        self
    }

    /// Pins the run seed for reproducible output.
    #[inline]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPathCount`] when the path count is
    /// zero or above [`MAX_PATHS`], and [`ConfigError::InvalidDrift`] when
    /// the drift is NaN or infinite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_paths == 0 || self.num_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.num_paths));
        }
        if !self.drift.is_finite() {
            return Err(ConfigError::InvalidDrift(self.drift));
        }
        Ok(())
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            num_paths: DEFAULT_PATHS,
            drift: DEFAULT_DRIFT,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ForecastConfig::default();
        assert_eq!(config.num_paths, DEFAULT_PATHS);
        assert_eq!(config.drift, DEFAULT_DRIFT);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_chains() {
        let config = ForecastConfig::default()
            .with_paths(5_000)
            .with_drift(0.05)
            .with_seed(7);
        assert_eq!(config.num_paths, 5_000);
        assert_eq!(config.drift, 0.05);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn rejects_zero_paths() {
        let config = ForecastConfig::default().with_paths(0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidPathCount(0)));
    }

    #[test]
    fn rejects_oversized_path_count() {
        let config = ForecastConfig::default().with_paths(MAX_PATHS + 1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPathCount(_))
        ));
    }

    #[test]
    fn rejects_non_finite_drift() {
        let config = ForecastConfig::default().with_drift(f64::NAN);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidDrift(_))));

        let config = ForecastConfig::default().with_drift(f64::INFINITY);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidDrift(_))));
    }

    #[test]
    fn negative_finite_drift_is_valid() {
        let config = ForecastConfig::default().with_drift(-0.2);
        assert!(config.validate().is_ok());
    }
}
