//! Percentile band aggregation over a path ensemble.
//!
//! The ensemble collapses to five per-day percentile series. At each day
//! index the cross-section of all paths is sorted and the nearest-rank
//! percentile is read off — no interpolation, every band value is a price
//! some simulated path actually reached.
//!
//! Timesteps are independent of one another, so aggregation parallelises
//! over the day axis.

use rayon::prelude::*;

use forecast_core::nearest_rank;

use crate::ensemble::PathEnsemble;

/// The five reported percentiles, in band order.
pub const PERCENTILES: [f64; 5] = [0.05, 0.25, 0.50, 0.75, 0.95];

/// Per-day percentile band series, each of length `days + 1`.
///
/// Index 0 is the start of the forecast; every series holds the same price
/// there since all paths share one start price.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PercentileBands {
    /// 5th percentile (lower edge of the outer cone).
    pub p05: Vec<f64>,
    /// 25th percentile.
    pub p25: Vec<f64>,
    /// Median.
    pub p50: Vec<f64>,
    /// 75th percentile.
    pub p75: Vec<f64>,
    /// 95th percentile (upper edge of the outer cone).
    pub p95: Vec<f64>,
}

/// One day of the band fan, for row-oriented output.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BandRow {
    /// Day offset from the start of the forecast.
    pub day: usize,
    /// 5th percentile price.
    pub p05: f64,
    /// 25th percentile price.
    pub p25: f64,
    /// Median price.
    pub p50: f64,
    /// 75th percentile price.
    pub p75: f64,
    /// 95th percentile price.
    pub p95: f64,
}

impl PercentileBands {
    /// Number of days covered, including day 0.
    #[inline]
    pub fn len(&self) -> usize {
        self.p50.len()
    }

    /// Returns `true` if the bands cover no days.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.p50.is_empty()
    }

    /// Returns the band fan for one day.
    #[inline]
    pub fn row(&self, day: usize) -> BandRow {
        BandRow {
            day,
            p05: self.p05[day],
            p25: self.p25[day],
            p50: self.p50[day],
            p75: self.p75[day],
            p95: self.p95[day],
        }
    }

    /// Iterates the band fan day by day.
    pub fn rows(&self) -> impl Iterator<Item = BandRow> + '_ {
        (0..self.len()).map(|day| self.row(day))
    }
}

/// Reduces an ensemble to its per-day percentile bands.
///
/// Each day's cross-section is sorted ascending with [`f64::total_cmp`]
/// (simulated prices are always finite, but a total order keeps the sort
/// well-defined regardless) and the five percentiles are taken at their
/// nearest ranks.
pub fn aggregate(ensemble: &PathEnsemble) -> PercentileBands {
    let fans: Vec<[f64; 5]> = (0..ensemble.path_len())
        .into_par_iter()
        .map(|step| {
            let mut section = Vec::with_capacity(ensemble.num_paths());
            ensemble.cross_section_into(step, &mut section);
            section.sort_by(f64::total_cmp);

            let mut fan = [0.0; 5];
            for (slot, &percentile) in fan.iter_mut().zip(PERCENTILES.iter()) {
                *slot = nearest_rank(&section, percentile);
            }
            fan
        })
        .collect();

    let mut bands = PercentileBands {
        p05: Vec::with_capacity(fans.len()),
        p25: Vec::with_capacity(fans.len()),
        p50: Vec::with_capacity(fans.len()),
        p75: Vec::with_capacity(fans.len()),
        p95: Vec::with_capacity(fans.len()),
    };
    for fan in fans {
        bands.p05.push(fan[0]);
        bands.p25.push(fan[1]);
        bands.p50.push(fan[2]);
        bands.p75.push(fan[3]);
        bands.p95.push(fan[4]);
    }
    bands
}
