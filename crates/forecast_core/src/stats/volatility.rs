//! Annualised volatility estimation from daily closes.
//!
//! The estimator is the classical close-to-close historical volatility:
//! log returns of consecutive closes, Bessel-corrected sample standard
//! deviation, scaled to a one-year horizon by `sqrt(252)`.
//!
//! Degenerate input is not an error. A series too short to form two valid
//! log returns estimates to `0.0`, and the simulation layer then produces a
//! deterministic drift-only forecast. Callers that consider short histories
//! untrustworthy impose their own minimum-sample policy.

/// Trading days per year used for annualisation.
///
/// A fixed constant of the model, not a configuration knob.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Computes log returns `ln(P_t / P_{t-1})` of consecutive closes.
///
/// Pairs whose earlier price is non-positive are skipped rather than
/// treated as fatal; a bad tick must not poison the whole estimate.
pub fn log_returns(prices: &[f64]) -> Vec<f64> {
    prices
        .windows(2)
        .filter(|pair| pair[0] > 0.0)
        .map(|pair| (pair[1] / pair[0]).ln())
        .collect()
}

/// Estimates annualised volatility from an ordered close series.
///
/// Returns the sample standard deviation (Bessel's correction, `n - 1`
/// denominator) of the log returns, annualised by `sqrt(252)`.
///
/// Returns `0.0` whenever fewer than two valid log returns exist — empty
/// and single-point series included — so the result is always a defined,
/// non-negative scalar. Pure function of its input; nothing is cached.
///
/// # Examples
///
/// ```rust
/// use forecast_core::stats::annualised_volatility;
///
/// assert_eq!(annualised_volatility(&[]), 0.0);
/// assert_eq!(annualised_volatility(&[100.0]), 0.0);
/// assert!(annualised_volatility(&[100.0, 102.0, 101.0]) > 0.0);
/// ```
pub fn annualised_volatility(prices: &[f64]) -> f64 {
    let returns = log_returns(prices);
    if returns.len() < 2 {
        return 0.0;
    }

    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);

    variance.sqrt() * TRADING_DAYS_PER_YEAR.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn empty_series_yields_zero() {
        assert_eq!(annualised_volatility(&[]), 0.0);
    }

    #[test]
    fn single_point_yields_zero() {
        assert_eq!(annualised_volatility(&[100.0]), 0.0);
    }

    #[test]
    fn single_return_yields_zero() {
        // One valid return cannot feed a (n - 1) variance denominator.
        assert_eq!(annualised_volatility(&[100.0, 105.0]), 0.0);
    }

    #[test]
    fn constant_series_yields_zero() {
        assert_eq!(annualised_volatility(&[50.0, 50.0, 50.0, 50.0]), 0.0);
    }

    #[test]
    fn known_series_matches_hand_computation() {
        // Worked by hand: the six log returns have mean 0.0097115 and
        // sample standard deviation 0.0150471, which annualises to
        // 0.0150471 * sqrt(252) = 0.238866.
        let prices = [100.0, 102.0, 101.0, 103.0, 105.0, 104.0, 106.0];
        assert_relative_eq!(annualised_volatility(&prices), 0.238866, epsilon = 1e-4);
    }

    #[test]
    fn non_positive_predecessor_is_skipped() {
        // The pair (0.0 -> 100.0) is dropped; remaining returns still count.
        let with_bad_tick = [100.0, 102.0, 0.0, 100.0, 102.0, 101.0];
        let vol = annualised_volatility(&with_bad_tick);
        assert!(vol.is_finite());
        assert!(vol >= 0.0);
    }

    #[test]
    fn log_returns_skip_only_bad_pairs() {
        // The filter is on the earlier price: (0 -> 50) is dropped,
        // (100 -> 0) is not.
        let returns = log_returns(&[100.0, 0.0, 50.0, 55.0]);
        assert_eq!(returns.len(), 2);
        assert_relative_eq!(returns[1], (55.0_f64 / 50.0).ln(), epsilon = 1e-15);
    }

    proptest! {
        #[test]
        fn volatility_is_non_negative(prices in proptest::collection::vec(0.01f64..10_000.0, 0..64)) {
            prop_assert!(annualised_volatility(&prices) >= 0.0);
        }

        #[test]
        fn volatility_is_scale_invariant(
            prices in proptest::collection::vec(1.0f64..1_000.0, 3..32),
            scale in 0.1f64..100.0,
        ) {
            let base = annualised_volatility(&prices);
            let scaled: Vec<f64> = prices.iter().map(|p| p * scale).collect();
            let rescaled = annualised_volatility(&scaled);
            prop_assert!((base - rescaled).abs() <= 1e-9 * base.max(1.0));
        }
    }
}
