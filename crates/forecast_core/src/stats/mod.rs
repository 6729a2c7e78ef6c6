//! Statistical primitives for the forecast engine.
//!
//! Two concerns live here:
//! - [`volatility`]: annualised volatility of a daily close series
//! - [`percentile`]: nearest-rank percentile selection on sorted samples

pub mod percentile;
pub mod volatility;

pub use percentile::nearest_rank;
pub use volatility::{annualised_volatility, log_returns, TRADING_DAYS_PER_YEAR};
