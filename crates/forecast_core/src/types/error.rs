//! Error types for price-series construction.

use chrono::NaiveDate;
use thiserror::Error;

/// Categorised price-series errors.
///
/// These errors occur when a history series violates the append-only,
/// chronological contract. Statistical functions never return them: a
/// degenerate series yields a degenerate (zero) estimate instead.
///
/// # Examples
/// ```
/// use forecast_core::types::SeriesError;
///
/// let err = SeriesError::NonFinitePrice { index: 3 };
/// assert!(format!("{}", err).contains("index 3"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeriesError {
    /// Dates are not strictly increasing.
    #[error("price points out of chronological order at index {index}: {date} does not follow {previous}")]
    OutOfOrder {
        /// Index of the offending point.
        index: usize,
        /// Date at the offending index.
        date: NaiveDate,
        /// Date of the preceding point.
        previous: NaiveDate,
    },

    /// A price field is NaN or infinite.
    #[error("non-finite price at index {index}")]
    NonFinitePrice {
        /// Index of the offending point.
        index: usize,
    },
}
