//! Forecast command implementation.
//!
//! Loads a close history, runs the engine and renders the percentile fan
//! as a table or JSON.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tracing::info;

use forecast_engine::{BandRow, Forecast, ForecastConfig, ForecastEngine, ForecastRequest};

use crate::history::load_history;
use crate::{CliError, Result};

/// Arguments for the forecast command.
#[derive(Args, Debug)]
pub struct ForecastArgs {
    /// Path to the price history CSV (columns: date,open,close)
    #[arg(long)]
    pub history: PathBuf,

    /// Current live price the forecast originates from
    #[arg(long)]
    pub live_price: f64,

    /// Forecast horizon in trading days
    #[arg(long, default_value = "30")]
    pub days: usize,

    /// Number of Monte Carlo paths
    #[arg(long, default_value = "1000")]
    pub paths: usize,

    /// Volatility stress multiplier
    #[arg(long, default_value = "1.0")]
    pub vol_multiplier: f64,

    /// Fixed seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format (table, json)
    #[arg(long, default_value = "table")]
    pub format: String,
}

/// JSON report shape: summary fields plus the per-day band rows.
#[derive(Serialize)]
struct JsonReport {
    start_price: f64,
    volatility: f64,
    stressed_volatility: f64,
    drift: f64,
    regime: &'static str,
    outlook: &'static str,
    seed: u64,
    bridge_index: usize,
    bands: Vec<BandRow>,
}

impl JsonReport {
    fn from_forecast(forecast: &Forecast) -> Self {
        Self {
            start_price: forecast.start_price,
            volatility: forecast.volatility,
            stressed_volatility: forecast.stressed_volatility,
            drift: forecast.drift,
            regime: forecast.regime.label(),
            outlook: forecast.outlook.label(),
            seed: forecast.seed,
            bridge_index: forecast.bridge.index,
            bands: forecast.bands.rows().collect(),
        }
    }
}

/// Run the forecast command.
pub fn run(args: &ForecastArgs) -> Result<()> {
    info!("Loading history: {}", args.history.display());
    let series = load_history(&args.history)?;
    info!("  {} close points loaded", series.len());

    let mut config = ForecastConfig::default().with_paths(args.paths);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let engine = ForecastEngine::new(config)?;

    let request = ForecastRequest::new(series.closes(), args.live_price, args.days)
        .with_multiplier(args.vol_multiplier);
    let forecast = engine.run(request)?;

    match args.format.as_str() {
        "json" => {
            let report = JsonReport::from_forecast(&forecast);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "table" => {
            print!("{}", render_table(&forecast));
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {other}. Supported: table, json"
            )));
        }
    }

    info!("Forecast complete (seed {})", forecast.seed);
    Ok(())
}

/// Renders the band fan and run summary as a box-drawn table.
fn render_table(forecast: &Forecast) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "\n┌───────┬────────────┬────────────┬────────────┬────────────┬────────────┐"
    );
    let _ = writeln!(
        out,
        "│ Day   │ p05        │ p25        │ p50        │ p75        │ p95        │"
    );
    let _ = writeln!(
        out,
        "├───────┼────────────┼────────────┼────────────┼────────────┼────────────┤"
    );
    for row in forecast.bands.rows() {
        let _ = writeln!(
            out,
            "│ {:>5} │ {:>10.2} │ {:>10.2} │ {:>10.2} │ {:>10.2} │ {:>10.2} │",
            row.day, row.p05, row.p25, row.p50, row.p75, row.p95
        );
    }
    let _ = writeln!(
        out,
        "└───────┴────────────┴────────────┴────────────┴────────────┴────────────┘"
    );

    let _ = writeln!(out, "Start price:          {:.2}", forecast.start_price);
    let _ = writeln!(
        out,
        "Annualised volatility: {:.2}% ({})",
        forecast.volatility * 100.0,
        forecast.regime.label()
    );
    if (forecast.stressed_volatility - forecast.volatility).abs() > f64::EPSILON {
        let _ = writeln!(
            out,
            "Stressed volatility:  {:.2}%",
            forecast.stressed_volatility * 100.0
        );
    }
    let _ = writeln!(out, "Outlook:              {}", forecast.outlook.label());
    let _ = writeln!(out, "Seed:                 {}", forecast.seed);
    out
}
