//! # Forecast Engine
//!
//! Stochastic price-forecasting kernel: Geometric Brownian Motion Monte
//! Carlo simulation reduced to per-day percentile bands.
//!
//! ## Pipeline
//!
//! 1. Estimate annualised volatility from the historical daily closes
//!    (`forecast_core`)
//! 2. Apply the volatility stress multiplier
//! 3. Simulate an ensemble of GBM paths anchored at the live price
//!    ([`simulate`])
//! 4. Reduce the ensemble to p05/p25/p50/p75/p95 bands per day ([`bands`])
//!
//! The [`engine::ForecastEngine`] orchestrates the pipeline; the stage
//! modules are public for callers that need one piece in isolation.
//!
//! ## Reproducibility
//!
//! Every run is driven by a single `u64` seed. Seeded runs are bit-exact
//! regardless of thread count: each path derives its own generator from
//! the run seed, so Rayon scheduling cannot reorder any path's shocks.
//! Unseeded runs draw one entropy seed and record it in the forecast for
//! later replay.
//!
//! ## Usage Example
//!
//! ```rust
//! use forecast_engine::config::ForecastConfig;
//! use forecast_engine::engine::{ForecastEngine, ForecastRequest};
//!
//! let engine = ForecastEngine::new(ForecastConfig::default().with_seed(42))?;
//!
//! let closes = vec![100.0, 102.0, 101.0, 103.0, 105.0];
//! let forecast = engine.run(ForecastRequest::new(closes, 104.8, 30))?;
//!
//! assert_eq!(forecast.bands.len(), 31);
//! println!("30-day median: {:.2}", forecast.median_terminal());
//! # Ok::<(), forecast_engine::error::EngineError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod bands;
pub mod config;
pub mod engine;
pub mod ensemble;
pub mod error;
pub mod gbm;
pub mod rng;
pub mod simulate;

pub use bands::{aggregate, BandRow, PercentileBands, PERCENTILES};
pub use config::ForecastConfig;
pub use engine::{BridgePoint, Forecast, ForecastEngine, ForecastRequest, Outlook, VolatilityRegime};
pub use error::{ConfigError, EngineError};
pub use gbm::GbmParams;
pub use simulate::{simulate_paths_seeded, simulate_paths_with};
