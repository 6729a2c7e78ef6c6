//! Coneview forecast CLI.
//!
//! Runs a stochastic price forecast from a daily close history and prints
//! the percentile band fan.
//!
//! # Usage
//!
//! ```bash
//! forecast --history closes.csv --live-price 104.8 --days 30 --seed 42
//! forecast --history closes.csv --live-price 104.8 --format json
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod history;

pub use error::{CliError, Result};

/// Stochastic price forecast CLI
#[derive(Parser)]
#[command(name = "forecast")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(flatten)]
    args: commands::forecast::ForecastArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing; -v forces debug level over the env filter.
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::from_default_env()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    commands::forecast::run(&cli.args)
}
