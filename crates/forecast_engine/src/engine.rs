//! Forecast orchestration.
//!
//! One [`ForecastEngine`] run estimates annualised volatility from the
//! close history, applies the stress multiplier, simulates a GBM ensemble
//! anchored at the live price and reduces it to percentile bands. The
//! forecast joins the history at a bridge point — the last historical
//! index at the live price — so a charted fan is continuous with the
//! series it extends.

use tracing::debug;

use forecast_core::annualised_volatility;

use crate::bands::{aggregate, PercentileBands};
use crate::config::ForecastConfig;
use crate::error::{ConfigError, EngineError};
use crate::gbm::GbmParams;
use crate::simulate::simulate_paths_seeded;

/// Annualised volatility below which an instrument counts as stable.
pub const STABLE_VOLATILITY_CEILING: f64 = 0.15;

/// Annualised volatility at or above which an instrument counts as
/// aggressive.
pub const AGGRESSIVE_VOLATILITY_FLOOR: f64 = 0.35;

/// Where the forecast fan joins the historical series.
///
/// `index` is the position of the last historical close; `price` is the
/// live price the fan originates from. When the history is empty, the
/// bridge sits at index 0.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BridgePoint {
    /// Index of the last historical close.
    pub index: usize,
    /// Live price the forecast originates from.
    pub price: f64,
}

/// Directional read of the median path over the horizon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outlook {
    /// Median terminal price at or above the start price.
    Accumulate,
    /// Median terminal price below the start price.
    Caution,
}

impl Outlook {
    /// Display label.
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            Outlook::Accumulate => "ACCUMULATE",
            Outlook::Caution => "CAUTION",
        }
    }
}

/// Volatility regime classification of the raw (unstressed) estimate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VolatilityRegime {
    /// Below [`STABLE_VOLATILITY_CEILING`].
    Stable,
    /// Between the stable ceiling and the aggressive floor.
    Balanced,
    /// At or above [`AGGRESSIVE_VOLATILITY_FLOOR`].
    Aggressive,
}

impl VolatilityRegime {
    /// Classifies an annualised volatility.
    #[inline]
    pub fn from_volatility(volatility: f64) -> Self {
        if volatility < STABLE_VOLATILITY_CEILING {
            VolatilityRegime::Stable
        } else if volatility < AGGRESSIVE_VOLATILITY_FLOOR {
            VolatilityRegime::Balanced
        } else {
            VolatilityRegime::Aggressive
        }
    }

    /// Display label.
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            VolatilityRegime::Stable => "STABLE",
            VolatilityRegime::Balanced => "BALANCED",
            VolatilityRegime::Aggressive => "AGGRESSIVE",
        }
    }
}

/// Per-run forecast inputs.
///
/// The close history feeds the volatility estimate only; paths originate
/// at `live_price`, which may differ from the last close intraday.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForecastRequest {
    /// Historical daily closes, oldest first.
    pub closes: Vec<f64>,
    /// Current live price, the anchor of every simulated path.
    pub live_price: f64,
    /// Forecast horizon in trading days.
    pub days: usize,
    /// Volatility stress multiplier. 1.0 leaves the estimate untouched;
    /// observed dashboard usage ranges over [0.5, 3.0].
    pub volatility_multiplier: f64,
}

impl ForecastRequest {
    /// Creates a request with no volatility stress.
    pub fn new(closes: Vec<f64>, live_price: f64, days: usize) -> Self {
        Self {
            closes,
            live_price,
            days,
            volatility_multiplier: 1.0,
        }
    }

    /// Sets the volatility stress multiplier.
    #[inline]
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.volatility_multiplier = multiplier;
        self
    }
}

/// A completed forecast run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Forecast {
    /// Live price every path started from.
    pub start_price: f64,
    /// Raw annualised volatility estimated from the close history.
    pub volatility: f64,
    /// Volatility actually simulated, after the stress multiplier.
    pub stressed_volatility: f64,
    /// Annualised drift used for the run.
    pub drift: f64,
    /// Per-day percentile bands, day 0 through the horizon.
    pub bands: PercentileBands,
    /// Up to [`SAMPLE_PATHS`](crate::ensemble::SAMPLE_PATHS) raw paths
    /// retained for inspection.
    pub sample_paths: Vec<Vec<f64>>,
    /// Seed the run used; replaying with this seed reproduces the
    /// forecast exactly.
    pub seed: u64,
    /// Join point between the history and the forecast fan.
    pub bridge: BridgePoint,
    /// Directional read of the median path.
    pub outlook: Outlook,
    /// Regime classification of the raw volatility estimate.
    pub regime: VolatilityRegime,
}

impl Forecast {
    /// Median price at the end of the horizon.
    #[inline]
    pub fn median_terminal(&self) -> f64 {
        self.bands.p50.last().copied().unwrap_or(self.start_price)
    }
}

/// Stochastic price forecast engine.
///
/// Holds the run-invariant configuration; feed it one
/// [`ForecastRequest`] per instrument and horizon.
///
/// # Examples
///
/// ```rust
/// use forecast_engine::config::ForecastConfig;
/// use forecast_engine::engine::{ForecastEngine, ForecastRequest};
///
/// let engine = ForecastEngine::new(ForecastConfig::default().with_seed(42)).unwrap();
/// let closes = vec![100.0, 101.0, 99.5, 102.0, 103.0];
/// let forecast = engine.run(ForecastRequest::new(closes, 103.4, 30)).unwrap();
/// assert_eq!(forecast.bands.len(), 31);
/// assert_eq!(forecast.bridge.index, 4);
/// ```
pub struct ForecastEngine {
    config: ForecastConfig,
}

impl ForecastEngine {
    /// Creates an engine from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from
    /// [`ForecastConfig::validate`] unchanged.
    pub fn new(config: ForecastConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the engine configuration.
    #[inline]
    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Runs one forecast.
    ///
    /// Volatility is estimated from the request's close history, stressed
    /// by the multiplier, then simulated from the live price. Fewer than
    /// two usable closes yield a zero volatility estimate and a
    /// deterministic drift-only fan, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidMultiplier`] for a non-positive or
    /// non-finite stress multiplier, plus anything
    /// [`simulate_paths_seeded`] rejects (non-positive live price,
    /// oversized horizon).
    pub fn run(&self, request: ForecastRequest) -> Result<Forecast, EngineError> {
        let multiplier = request.volatility_multiplier;
        if !(multiplier.is_finite() && multiplier > 0.0) {
            return Err(EngineError::InvalidMultiplier(multiplier));
        }

        let volatility = {
            let _span = tracing::debug_span!("estimate", closes = request.closes.len()).entered();
            annualised_volatility(&request.closes)
        };
        let stressed_volatility = volatility * multiplier;
        debug!(volatility, stressed_volatility, "estimated annualised volatility");

        let params = GbmParams::new(request.live_price, stressed_volatility)
            .with_drift(self.config.drift);
        let seed = self.config.seed.unwrap_or_else(rand::random);

        debug!(
            seed,
            num_paths = self.config.num_paths,
            days = request.days,
            "simulating path ensemble"
        );
        let ensemble = {
            let _span = tracing::debug_span!("simulate", seed).entered();
            simulate_paths_seeded(params, request.days, self.config.num_paths, seed)?
        };

        let bands = aggregate(&ensemble);
        let sample_paths = ensemble.sample_paths();
        debug!(days = bands.len() - 1, "aggregated percentile bands");

        let median_terminal = bands.p50.last().copied().unwrap_or(request.live_price);
        let outlook = if median_terminal >= request.live_price {
            Outlook::Accumulate
        } else {
            Outlook::Caution
        };

        Ok(Forecast {
            start_price: request.live_price,
            volatility,
            stressed_volatility,
            drift: self.config.drift,
            bands,
            sample_paths,
            seed,
            bridge: BridgePoint {
                index: request.closes.len().saturating_sub(1),
                price: request.live_price,
            },
            outlook,
            regime: VolatilityRegime::from_volatility(volatility),
        })
    }
}
