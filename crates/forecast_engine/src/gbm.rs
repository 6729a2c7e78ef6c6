//! Geometric Brownian Motion parameters and the daily evolution step.
//!
//! GBM models an asset price whose logarithm follows Brownian motion with
//! drift:
//! ```text
//! dS = mu * S * dt + sigma * S * dW
//! ```
//!
//! ## Log-space formulation
//!
//! Paths evolve with the exact solution, not an Euler discretisation, so
//! there is no systematic discretisation bias:
//! ```text
//! S(t+dt) = S(t) * exp((mu - 0.5*sigma^2)*dt + sigma*sqrt(dt)*Z)
//! ```
//! with one daily step `dt = 1/252` and `Z` a standard-normal variate.

use forecast_core::TRADING_DAYS_PER_YEAR;

use crate::error::EngineError;

/// Daily time step in years. One trading day, fixed.
pub const DT: f64 = 1.0 / TRADING_DAYS_PER_YEAR;

/// Default annualised drift: 10% expected yearly return.
///
/// An uncalibrated modelling assumption carried over from the source
/// model, not an estimate from the instrument's own history. Override via
/// the engine configuration when a calibrated figure is available.
pub const DEFAULT_DRIFT: f64 = 0.10;

/// GBM simulation parameters.
///
/// # Examples
///
/// ```rust
/// use forecast_engine::gbm::GbmParams;
///
/// let params = GbmParams::new(100.0, 0.2);
/// assert!(params.validate().is_ok());
/// assert_eq!(params.drift, 0.10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    /// Start price (S0). The live market price, not the last daily close.
    pub start_price: f64,
    /// Annualised drift (mu).
    pub drift: f64,
    /// Annualised volatility (sigma), after any stress multiplier.
    pub volatility: f64,
}

impl GbmParams {
    /// Creates parameters with the default drift.
    #[inline]
    pub fn new(start_price: f64, volatility: f64) -> Self {
        Self {
            start_price,
            drift: DEFAULT_DRIFT,
            volatility,
        }
    }

    /// Overrides the annualised drift.
    #[inline]
    pub fn with_drift(mut self, drift: f64) -> Self {
        self.drift = drift;
        self
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidStartPrice`] unless the start price is
    /// positive and finite, and [`EngineError::InvalidVolatility`] unless
    /// volatility is non-negative and finite. Zero volatility is valid and
    /// yields a deterministic drift-only path.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.start_price.is_finite() && self.start_price > 0.0) {
            return Err(EngineError::InvalidStartPrice(self.start_price));
        }
        if !(self.volatility.is_finite() && self.volatility >= 0.0) {
            return Err(EngineError::InvalidVolatility(self.volatility));
        }
        Ok(())
    }

    /// Precomputes the per-step constants `(drift_dt, vol_sqrt_dt)`.
    ///
    /// `drift_dt = (mu - 0.5*sigma^2)*dt` and `vol_sqrt_dt = sigma*sqrt(dt)`
    /// are loop invariants of path evolution.
    #[inline]
    pub(crate) fn step_terms(&self) -> (f64, f64) {
        let drift_dt = (self.drift - 0.5 * self.volatility * self.volatility) * DT;
        let vol_sqrt_dt = self.volatility * DT.sqrt();
        (drift_dt, vol_sqrt_dt)
    }

    /// Price after `step` days with every shock forced to zero.
    ///
    /// With zero volatility this is the exact path; otherwise it is the
    /// drift-only skeleton tests compare against.
    #[inline]
    pub fn deterministic_price(&self, step: usize) -> f64 {
        let (drift_dt, _) = self.step_terms();
        self.start_price * (drift_dt * step as f64).exp()
    }
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            start_price: 100.0,
            drift: DEFAULT_DRIFT,
            volatility: 0.2,
        }
    }
}

/// Advances one price by one daily GBM step given a normal shock `z`.
#[inline]
pub(crate) fn evolve(price: f64, drift_dt: f64, vol_sqrt_dt: f64, z: f64) -> f64 {
    price * (drift_dt + vol_sqrt_dt * z).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_params_are_valid() {
        assert!(GbmParams::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_start_price() {
        assert!(matches!(
            GbmParams::new(0.0, 0.2).validate(),
            Err(EngineError::InvalidStartPrice(_))
        ));
        assert!(matches!(
            GbmParams::new(-100.0, 0.2).validate(),
            Err(EngineError::InvalidStartPrice(_))
        ));
        assert!(matches!(
            GbmParams::new(f64::NAN, 0.2).validate(),
            Err(EngineError::InvalidStartPrice(_))
        ));
    }

    #[test]
    fn rejects_negative_or_non_finite_volatility() {
        assert!(matches!(
            GbmParams::new(100.0, -0.1).validate(),
            Err(EngineError::InvalidVolatility(_))
        ));
        assert!(matches!(
            GbmParams::new(100.0, f64::INFINITY).validate(),
            Err(EngineError::InvalidVolatility(_))
        ));
    }

    #[test]
    fn zero_volatility_is_valid() {
        assert!(GbmParams::new(100.0, 0.0).validate().is_ok());
    }

    #[test]
    fn evolve_without_shock_applies_drift_only() {
        let params = GbmParams::new(100.0, 0.2);
        let (drift_dt, vol_sqrt_dt) = params.step_terms();

        let next = evolve(100.0, drift_dt, vol_sqrt_dt, 0.0);
        let expected = 100.0 * ((0.10 - 0.5 * 0.04) * DT).exp();
        assert_relative_eq!(next, expected, epsilon = 1e-12);
    }

    #[test]
    fn positive_shock_raises_price_negative_lowers() {
        let params = GbmParams::new(100.0, 0.2);
        let (drift_dt, vol_sqrt_dt) = params.step_terms();

        assert!(evolve(100.0, drift_dt, vol_sqrt_dt, 1.0) > 100.0);
        assert!(evolve(100.0, drift_dt, vol_sqrt_dt, -1.0) < 100.0);
    }

    #[test]
    fn deterministic_price_compounds_daily_drift() {
        let params = GbmParams::new(100.0, 0.0);
        // With zero volatility: S(t) = S0 * exp(mu * dt * t).
        let expected = 100.0 * (0.10 * DT * 30.0).exp();
        assert_relative_eq!(params.deterministic_price(30), expected, epsilon = 1e-12);
    }

    #[test]
    fn deterministic_price_at_step_zero_is_start() {
        let params = GbmParams::default();
        assert_eq!(params.deterministic_price(0), 100.0);
    }
}
