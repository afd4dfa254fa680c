//! Error types for quadrature operations.

use thiserror::Error;

/// A specialized Result type for quadrature operations.
pub type QuadratureResult<T> = Result<T, QuadratureError>;

/// Boxed error raised by a fallible integrand.
pub type IntegrandError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while setting up or running a Romberg integration.
#[derive(Error, Debug)]
pub enum QuadratureError {
    /// The integration interval is empty, reversed or not finite.
    #[error("Invalid interval: lower bound {lower} must be finite and strictly below upper bound {upper}")]
    InvalidInterval {
        /// Lower bound of the interval.
        lower: f64,
        /// Upper bound of the interval.
        upper: f64,
    },

    /// The convergence tolerance is not a positive finite number.
    #[error("Invalid tolerance: {tolerance:.2e} (must be positive and finite)")]
    InvalidTolerance {
        /// The rejected tolerance.
        tolerance: f64,
    },

    /// Engine configuration is inconsistent.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// A refinement level beyond the supported depth was requested.
    #[error("Refinement level {level} exceeds the maximum supported level {max}")]
    LevelTooDeep {
        /// Requested level.
        level: u32,
        /// Maximum supported level.
        max: u32,
    },

    /// The integrand failed at a sample point.
    #[error("Integrand evaluation failed at x = {x}: {source}")]
    Evaluation {
        /// The sample point.
        x: f64,
        /// The error raised by the integrand.
        #[source]
        source: IntegrandError,
    },

    /// The integrand returned NaN or an infinity.
    #[error("Integrand returned a non-finite value {value} at x = {x}")]
    NonFiniteValue {
        /// The sample point.
        x: f64,
        /// The offending value.
        value: f64,
    },

    /// The recursive driver hit its row cap without meeting the tolerance.
    #[error("Romberg iteration did not converge after {rows} rows (estimate: {estimate}, delta: {error_estimate:.2e})")]
    ConvergenceFailed {
        /// Number of table rows built.
        rows: u32,
        /// Best available diagonal estimate.
        estimate: f64,
        /// Difference between the last two diagonal entries.
        error_estimate: f64,
    },
}

impl QuadratureError {
    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Wraps an integrand failure at `x`.
    #[must_use]
    pub fn evaluation(x: f64, source: impl Into<IntegrandError>) -> Self {
        Self::Evaluation {
            x,
            source: source.into(),
        }
    }

    /// Returns true for errors raised while evaluating the integrand.
    #[must_use]
    pub fn is_evaluation_error(&self) -> bool {
        matches!(self, Self::Evaluation { .. } | Self::NonFiniteValue { .. })
    }
}
