//! Core value types for daily price history.

pub mod error;
pub mod series;

pub use error::SeriesError;
pub use series::{PricePoint, PriceSeries};
