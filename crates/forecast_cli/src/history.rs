//! Price history loading from CSV exports.
//!
//! Expected columns: `date,open,close` with ISO dates, oldest row first,
//! matching the shape a daily history provider exports.

use std::path::Path;

use serde::Deserialize;

use forecast_core::{PricePoint, PriceSeries};

use crate::{CliError, Result};

/// Minimum close points accepted for a volatility estimate.
///
/// Below this the estimate is too noisy to chart; the engine itself
/// tolerates any history length, so the floor is enforced here at the
/// boundary.
pub const MIN_HISTORY_POINTS: usize = 10;

#[derive(Debug, Deserialize)]
struct HistoryRow {
    date: chrono::NaiveDate,
    open: f64,
    close: f64,
}

/// Loads and validates a daily price history.
///
/// # Errors
///
/// Fails on a missing file, malformed CSV, out-of-order or non-finite
/// rows, or fewer than [`MIN_HISTORY_POINTS`] rows.
pub fn load_history(path: &Path) -> Result<PriceSeries> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut series = PriceSeries::new();
    for row in reader.deserialize() {
        let row: HistoryRow = row?;
        series.push(PricePoint::new(row.date, row.open, row.close))?;
    }

    if series.len() < MIN_HISTORY_POINTS {
        return Err(CliError::InsufficientHistory {
            found: series.len(),
            minimum: MIN_HISTORY_POINTS,
        });
    }
    Ok(series)
}
