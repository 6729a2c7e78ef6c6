//! CLI error type.

use thiserror::Error;

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the `forecast` binary.
#[derive(Error, Debug)]
pub enum CliError {
    /// Input file does not exist.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// Invalid command-line argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// History holds too few closes to estimate volatility sensibly.
    #[error("insufficient history: {found} close points, need at least {minimum}")]
    InsufficientHistory {
        /// Close points found in the file.
        found: usize,
        /// Required minimum.
        minimum: usize,
    },

    /// History file violated series constraints.
    #[error("invalid history: {0}")]
    History(#[from] forecast_core::SeriesError),

    /// Engine configuration rejected.
    #[error(transparent)]
    Config(#[from] forecast_engine::ConfigError),

    /// Forecast run failed.
    #[error(transparent)]
    Engine(#[from] forecast_engine::EngineError),

    /// CSV parsing failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialisation failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Underlying I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
