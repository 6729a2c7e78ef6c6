//! Error types for the forecast simulation kernel.
//!
//! Two families: [`ConfigError`] for construction-time validation of
//! engine configuration, [`EngineError`] for per-run contract violations.
//! Insufficient price history is deliberately not represented here — it
//! resolves to a zero volatility estimate, not an error.

use thiserror::Error;

use crate::config::{MAX_DAYS, MAX_PATHS};

/// Configuration error for the forecast engine.
///
/// These errors occur during construction when invalid parameters are
/// provided.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Path count outside the valid range.
    #[error("invalid path count {0}: must be in range [1, {MAX_PATHS}]")]
    InvalidPathCount(usize),

    /// Forecast horizon beyond the supported maximum.
    #[error("invalid horizon of {0} days: must be at most {MAX_DAYS}")]
    InvalidHorizon(usize),

    /// Drift is NaN or infinite.
    #[error("invalid drift {0}: must be finite")]
    InvalidDrift(f64),
}

/// Runtime error for a single forecast run.
///
/// A non-positive start price makes the log-normal step ill-defined, so
/// the engine fails fast with a descriptive error rather than silently
/// producing degenerate output.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Start price must be positive and finite.
    #[error("invalid start price {0}: must be positive and finite")]
    InvalidStartPrice(f64),

    /// Volatility must be non-negative and finite.
    #[error("invalid volatility {0}: must be non-negative and finite")]
    InvalidVolatility(f64),

    /// Volatility stress multiplier must be positive and finite.
    #[error("invalid volatility multiplier {0}: must be positive and finite")]
    InvalidMultiplier(f64),

    /// Invalid simulation dimensions supplied at run time.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::InvalidPathCount(0);
        assert!(err.to_string().contains("invalid path count 0"));

        let err = ConfigError::InvalidHorizon(20_000);
        assert!(err.to_string().contains("20000 days"));
    }

    #[test]
    fn engine_error_display() {
        let err = EngineError::InvalidStartPrice(-1.5);
        assert!(err.to_string().contains("-1.5"));

        let err = EngineError::InvalidVolatility(f64::NAN);
        assert!(err.to_string().contains("volatility"));
    }

    #[test]
    fn config_error_converts_into_engine_error() {
        let err: EngineError = ConfigError::InvalidPathCount(0).into();
        assert!(matches!(
            err,
            EngineError::Config(ConfigError::InvalidPathCount(0))
        ));
    }
}
