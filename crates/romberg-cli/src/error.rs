//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Function name not in the catalogue.
    #[error("Unknown function: {0}. Run `romberg functions` for the list.")]
    UnknownFunction(String),

    /// Invalid numeric argument.
    #[error("Invalid {name}: {value}. {reason}")]
    InvalidArgument {
        /// Argument name.
        name: &'static str,
        /// Rejected value.
        value: String,
        /// What is expected instead.
        reason: &'static str,
    },

    /// Configuration file could not be loaded.
    #[error("Configuration error in {path}: {reason}")]
    Config {
        /// File path.
        path: PathBuf,
        /// Description of the problem.
        reason: String,
    },

    /// Engine error.
    #[error("Calculation error: {0}")]
    Calculation(#[from] romberg_math::QuadratureError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
