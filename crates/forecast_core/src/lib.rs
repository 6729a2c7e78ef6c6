//! # forecast_core: Foundation Layer for the Forecast Workspace
//!
//! ## Layer role
//!
//! forecast_core is the bottom layer of the workspace, providing:
//! - Daily price-series types: `PricePoint`, `PriceSeries` (`types::series`)
//! - Volatility estimation from close series (`stats::volatility`)
//! - Nearest-rank percentile selection (`stats::percentile`)
//! - Error types: `SeriesError` (`types::error`)
//!
//! ## Zero dependency principle
//!
//! The foundation layer has no dependencies on other forecast_* crates, with
//! minimal external dependencies:
//! - chrono: date arithmetic for trading-day series
//! - thiserror: structured error types
//! - serde: serialisation support (optional)
//!
//! ## Usage examples
//!
//! ```rust
//! use forecast_core::stats::annualised_volatility;
//!
//! let closes = [100.0, 102.0, 101.0, 103.0];
//! let sigma = annualised_volatility(&closes);
//! assert!(sigma > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod stats;
pub mod types;

pub use stats::{annualised_volatility, nearest_rank, TRADING_DAYS_PER_YEAR};
pub use types::{PricePoint, PriceSeries, SeriesError};
