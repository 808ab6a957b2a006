//! Error types for the demo driver.

use thiserror::Error;

/// Errors raised while configuring or running a valuation.
#[derive(Debug, Error)]
pub enum CliError {
    /// The scenario file could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The scenario file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configured date is outside the supported range.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A valuation failed.
    #[error(transparent)]
    Pricing(#[from] qlval::core::Error),
}

/// Result type for the driver.
pub type Result<T> = std::result::Result<T, CliError>;
