//! Daily price history types.
//!
//! A [`PriceSeries`] is the ordered `(date, open, close)` record sequence
//! delivered by a history provider: chronological, oldest first, and
//! append-only. The statistical layer consumes only the close column via
//! [`PriceSeries::closes`].

use chrono::NaiveDate;

use super::error::SeriesError;

/// One trading day of a price history.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricePoint {
    /// Trading date.
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Closing price.
    pub close: f64,
}

impl PricePoint {
    /// Creates a new price point.
    #[inline]
    pub fn new(date: NaiveDate, open: f64, close: f64) -> Self {
        Self { date, open, close }
    }

    /// Returns `true` if both prices are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.open.is_finite() && self.close.is_finite()
    }
}

/// Chronological, append-only daily price history.
///
/// Invariants enforced at construction and on append:
/// - dates strictly increasing (oldest first)
/// - all prices finite
///
/// A series with fewer than 2 points is valid; it simply cannot produce a
/// log return, and downstream statistics resolve to zero rather than error.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use forecast_core::types::{PricePoint, PriceSeries};
///
/// let points = vec![
///     PricePoint::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 99.5, 100.0),
///     PricePoint::new(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(), 100.0, 102.0),
/// ];
/// let series = PriceSeries::from_points(points).unwrap();
/// assert_eq!(series.closes(), vec![100.0, 102.0]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Creates an empty series.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a series from points, validating order and finiteness.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::OutOfOrder`] if dates are not strictly
    /// increasing, or [`SeriesError::NonFinitePrice`] on NaN/infinite
    /// prices.
    pub fn from_points(points: Vec<PricePoint>) -> Result<Self, SeriesError> {
        let mut series = Self::new();
        for point in points {
            series.push(point)?;
        }
        Ok(series)
    }

    /// Appends a point, enforcing the chronological invariant.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::OutOfOrder`] if the date does not follow the
    /// last point, or [`SeriesError::NonFinitePrice`] on NaN/infinite
    /// prices.
    pub fn push(&mut self, point: PricePoint) -> Result<(), SeriesError> {
        let index = self.points.len();
        if !point.is_finite() {
            return Err(SeriesError::NonFinitePrice { index });
        }
        if let Some(last) = self.points.last() {
            if point.date <= last.date {
                return Err(SeriesError::OutOfOrder {
                    index,
                    date: point.date,
                    previous: last.date,
                });
            }
        }
        self.points.push(point);
        Ok(())
    }

    /// Returns the number of trading days in the series.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the series holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the ordered points.
    #[inline]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Returns the most recent point, if any.
    #[inline]
    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Extracts the close column, oldest first.
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn from_points_preserves_order() {
        let series = PriceSeries::from_points(vec![
            PricePoint::new(date(2), 99.0, 100.0),
            PricePoint::new(date(3), 100.0, 101.0),
            PricePoint::new(date(4), 101.0, 99.5),
        ])
        .unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.closes(), vec![100.0, 101.0, 99.5]);
        assert_eq!(series.last().unwrap().date, date(4));
    }

    #[test]
    fn rejects_out_of_order_dates() {
        let result = PriceSeries::from_points(vec![
            PricePoint::new(date(5), 99.0, 100.0),
            PricePoint::new(date(3), 100.0, 101.0),
        ]);

        assert!(matches!(
            result,
            Err(SeriesError::OutOfOrder { index: 1, .. })
        ));
    }

    #[test]
    fn rejects_duplicate_dates() {
        let mut series = PriceSeries::new();
        series.push(PricePoint::new(date(2), 99.0, 100.0)).unwrap();
        let result = series.push(PricePoint::new(date(2), 100.0, 101.0));
        assert!(matches!(result, Err(SeriesError::OutOfOrder { .. })));
    }

    #[test]
    fn rejects_non_finite_prices() {
        let result = PriceSeries::from_points(vec![PricePoint::new(date(2), f64::NAN, 100.0)]);
        assert!(matches!(
            result,
            Err(SeriesError::NonFinitePrice { index: 0 })
        ));
    }

    #[test]
    fn empty_series_is_valid() {
        let series = PriceSeries::new();
        assert!(series.is_empty());
        assert!(series.closes().is_empty());
        assert!(series.last().is_none());
    }
}
