//! CLI command implementations.

pub mod forecast;
