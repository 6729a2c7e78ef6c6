//! GBM ensemble simulation.
//!
//! Paths are mutually independent, which makes path generation the natural
//! parallelisation axis. Every path draws from its own generator derived
//! from the run seed, so a seeded run produces identical output whether it
//! executes sequentially or across the Rayon pool — thread scheduling can
//! never reorder the stream a path sees.
//!
//! # Algorithm
//!
//! 1. Precompute `drift_dt = (mu - 0.5*sigma^2)*dt` and
//!    `vol_sqrt_dt = sigma*sqrt(dt)`
//! 2. For each path, set `path[0] = start_price`
//! 3. For each day, `path[t+1] = path[t] * exp(drift_dt + vol_sqrt_dt * Z)`

use rayon::prelude::*;

use crate::config::{MAX_DAYS, MAX_PATHS};
use crate::ensemble::PathEnsemble;
use crate::error::{ConfigError, EngineError};
use crate::gbm::{evolve, GbmParams};
use crate::rng::{GaussianSource, NormalSource};

/// Path count at which generation moves onto the Rayon pool.
///
/// Below this the per-path generator setup outweighs the parallel win.
pub const PARALLEL_PATH_THRESHOLD: usize = 256;

/// Derives the seed for one path's generator from the run seed.
///
/// The index is spread by the SplitMix64 golden-ratio increment before
/// the xor, so nearby run seeds never share a path stream (a plain
/// `run_seed + path_idx` would make seed `s` path `i` collide with seed
/// `s + 1` path `i - 1`). `StdRng::seed_from_u64` then mixes the result
/// further.
#[inline]
fn path_seed(run_seed: u64, path_idx: usize) -> u64 {
    run_seed ^ (path_idx as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

fn validate_dimensions(num_paths: usize, days: usize) -> Result<(), ConfigError> {
    if num_paths == 0 || num_paths > MAX_PATHS {
        return Err(ConfigError::InvalidPathCount(num_paths));
    }
    if days > MAX_DAYS {
        return Err(ConfigError::InvalidHorizon(days));
    }
    Ok(())
}

/// Evolves one path in place from its start price.
#[inline]
fn fill_path<S: NormalSource>(
    path: &mut [f64],
    start_price: f64,
    drift_dt: f64,
    vol_sqrt_dt: f64,
    source: &mut S,
) {
    path[0] = start_price;
    for t in 1..path.len() {
        path[t] = evolve(path[t - 1], drift_dt, vol_sqrt_dt, source.next_normal());
    }
}

/// Simulates an ensemble, drawing every shock from one injected source.
///
/// Sequential: all paths consume the same stream in path order. This is the
/// seam for tests that script the exact shock sequence; production runs go
/// through [`simulate_paths_seeded`] instead.
///
/// A horizon of `days = 0` is valid and yields single-point paths equal to
/// the start price. (A negative horizon is unrepresentable by type.)
///
/// # Errors
///
/// Fails fast on invalid parameters or dimensions; see
/// [`GbmParams::validate`] and [`ConfigError`].
pub fn simulate_paths_with<S: NormalSource>(
    params: GbmParams,
    days: usize,
    num_paths: usize,
    source: &mut S,
) -> Result<PathEnsemble, EngineError> {
    params.validate()?;
    validate_dimensions(num_paths, days)?;

    let (drift_dt, vol_sqrt_dt) = params.step_terms();
    let mut ensemble = PathEnsemble::zeroed(num_paths, days);
    for path in ensemble.paths_mut() {
        fill_path(path, params.start_price, drift_dt, vol_sqrt_dt, source);
    }
    Ok(ensemble)
}

/// Simulates an ensemble from a run seed, in parallel for large ensembles.
///
/// Each path owns a [`GaussianSource`] derived from `(run_seed, path_idx)`,
/// so the output depends only on the seed and dimensions: a given path's
/// prices are identical whatever the ensemble size, the thread count, or
/// the scheduling order.
///
/// # Errors
///
/// Fails fast on invalid parameters or dimensions.
pub fn simulate_paths_seeded(
    params: GbmParams,
    days: usize,
    num_paths: usize,
    run_seed: u64,
) -> Result<PathEnsemble, EngineError> {
    params.validate()?;
    validate_dimensions(num_paths, days)?;

    let (drift_dt, vol_sqrt_dt) = params.step_terms();
    let mut ensemble = PathEnsemble::zeroed(num_paths, days);

    if num_paths >= PARALLEL_PATH_THRESHOLD {
        ensemble
            .par_paths_mut()
            .enumerate()
            .for_each(|(path_idx, path)| {
                let mut source = GaussianSource::from_seed(path_seed(run_seed, path_idx));
                fill_path(path, params.start_price, drift_dt, vol_sqrt_dt, &mut source);
            });
    } else {
        for (path_idx, path) in ensemble.paths_mut().enumerate() {
            let mut source = GaussianSource::from_seed(path_seed(run_seed, path_idx));
            fill_path(path, params.start_price, drift_dt, vol_sqrt_dt, &mut source);
        }
    }
    Ok(ensemble)
}
