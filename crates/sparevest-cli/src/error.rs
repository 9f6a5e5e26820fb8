//! CLI error types.

use std::path::PathBuf;

use sparevest_portfolio::AllocatorError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Config file could not be read.
    #[error("Cannot read {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Config file could not be parsed.
    #[error("Configuration error in {path}: {message}")]
    Config {
        /// File that failed.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// Invalid amount argument.
    #[error("Invalid amount: {0}. Must be a finite number.")]
    InvalidAmount(f64),

    /// Portfolio rejected or rebalance infeasible.
    #[error(transparent)]
    Portfolio(#[from] AllocatorError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
