//! Romberg integration engine.
//!
//! [`Romberg`] holds an immutable integration request (interval, tolerance,
//! integrand) and offers two traversal policies over the same extrapolation
//! table:
//!
//! - [`Romberg::recursive`]: adds rows until two successive diagonal entries
//!   agree to within the tolerance, or the row cap is reached
//! - [`Romberg::dynamic_programming`]: builds a fixed number of rows and
//!   returns the last diagonal entry unconditionally
//!
//! Both drivers share [`TrapezoidalRefinement`] and
//! [`ExtrapolationTable::push_trapezoid`], so every entry reached by both is
//! bit-identical.
//!
//! # Choosing a Driver
//!
//! | Driver | Cost | Termination | Use when |
//! |--------|------|-------------|----------|
//! | `recursive` | As low as the integrand allows | Tolerance or row cap | Accuracy target known |
//! | `dynamic_programming` | `2^N + 1` evaluations | Always `N + 1` rows | Fixed order wanted |
//!
//! # Example
//!
//! ```rust
//! use romberg_math::romberg::Romberg;
//!
//! let engine = Romberg::new(0.0, std::f64::consts::PI, 1e-10, |x: f64| x.sin()).unwrap();
//!
//! let adaptive = engine.recursive().unwrap();
//! let fixed = engine.dynamic_programming(12).unwrap();
//!
//! assert!((adaptive - 2.0).abs() < 1e-9);
//! assert!((adaptive - fixed).abs() < 1e-8);
//! ```
//!
//! [`TrapezoidalRefinement`]: crate::trapezoid::TrapezoidalRefinement
//! [`ExtrapolationTable::push_trapezoid`]: crate::extrapolation::ExtrapolationTable::push_trapezoid

mod recursive;
mod tabulated;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{QuadratureError, QuadratureResult};
use crate::integrand::Integrand;
use crate::trapezoid::{TrapezoidalRefinement, MAX_LEVEL};

/// Default convergence tolerance between successive diagonal entries.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default row cap for the recursive driver.
pub const DEFAULT_MAX_ROWS: u32 = 25;

/// Default number of rows required before the convergence test may pass.
pub const DEFAULT_MIN_ROWS: u32 = 2;

/// Configuration for the Romberg engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RombergConfig {
    /// Convergence tolerance on `|R[i][i] - R[i-1][i-1]|`.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Maximum number of rows the recursive driver builds.
    #[serde(default = "default_max_rows")]
    pub max_rows: u32,
    /// Rows that must exist before convergence can be declared.
    #[serde(default = "default_min_rows")]
    pub min_rows: u32,
    /// Treat NaN or infinite integrand values as evaluation errors.
    #[serde(default = "default_true")]
    pub reject_non_finite: bool,
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_max_rows() -> u32 {
    DEFAULT_MAX_ROWS
}

fn default_min_rows() -> u32 {
    DEFAULT_MIN_ROWS
}

fn default_true() -> bool {
    true
}

impl Default for RombergConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_rows: DEFAULT_MAX_ROWS,
            min_rows: DEFAULT_MIN_ROWS,
            reject_non_finite: true,
        }
    }
}

impl RombergConfig {
    /// Creates a configuration with the given tolerance and row cap.
    #[must_use]
    pub fn new(tolerance: f64, max_rows: u32) -> Self {
        Self {
            tolerance,
            max_rows,
            ..Self::default()
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the row cap.
    #[must_use]
    pub fn with_max_rows(mut self, max_rows: u32) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Sets the minimum row count for convergence.
    #[must_use]
    pub fn with_min_rows(mut self, min_rows: u32) -> Self {
        self.min_rows = min_rows;
        self
    }

    /// Enables or disables rejection of non-finite samples.
    #[must_use]
    pub fn with_reject_non_finite(mut self, reject: bool) -> Self {
        self.reject_non_finite = reject;
        self
    }

    /// Checks the configuration for consistency.
    pub fn validate(&self) -> QuadratureResult<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(QuadratureError::InvalidTolerance {
                tolerance: self.tolerance,
            });
        }

        let row_limit = MAX_LEVEL + 1;
        if self.max_rows < 2 || self.max_rows > row_limit {
            return Err(QuadratureError::invalid_config(format!(
                "max_rows must be between 2 and {row_limit}, got {}",
                self.max_rows
            )));
        }

        if self.min_rows < 2 || self.min_rows > self.max_rows {
            return Err(QuadratureError::invalid_config(format!(
                "min_rows must be between 2 and max_rows ({}), got {}",
                self.max_rows, self.min_rows
            )));
        }

        Ok(())
    }
}

/// Outcome of the recursive driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RombergReport {
    /// Best diagonal estimate.
    pub value: f64,
    /// Whether the tolerance was met before the row cap.
    pub converged: bool,
    /// Number of table rows built.
    pub rows: u32,
    /// `|R[n][n] - R[n-1][n-1]|` for the last two rows built.
    pub error_estimate: f64,
    /// Integrand evaluations performed.
    pub evaluations: u64,
}

impl RombergReport {
    /// Returns the report if converged, otherwise a [`QuadratureError::ConvergenceFailed`].
    pub fn into_converged(self) -> QuadratureResult<Self> {
        if self.converged {
            Ok(self)
        } else {
            Err(QuadratureError::ConvergenceFailed {
                rows: self.rows,
                estimate: self.value,
                error_estimate: self.error_estimate,
            })
        }
    }
}

/// Romberg integrator over a fixed interval and integrand.
///
/// Immutable after construction; every driver call builds its own table, so
/// a single instance can be shared across threads when `F: Sync`.
#[derive(Clone)]
pub struct Romberg<F> {
    lower: f64,
    upper: f64,
    config: RombergConfig,
    integrand: F,
}

impl<F> fmt::Debug for Romberg<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Romberg")
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<F> Romberg<F>
where
    F: Integrand,
{
    /// Creates an engine with the given tolerance and default settings otherwise.
    ///
    /// Fails if `lower >= upper`, a bound or the width is not finite, or `tolerance <= 0`.
    pub fn new(lower: f64, upper: f64, tolerance: f64, integrand: F) -> QuadratureResult<Self> {
        Self::with_config(
            lower,
            upper,
            RombergConfig::default().with_tolerance(tolerance),
            integrand,
        )
    }

    /// Creates an engine with a full configuration.
    pub fn with_config(
        lower: f64,
        upper: f64,
        config: RombergConfig,
        integrand: F,
    ) -> QuadratureResult<Self> {
        let width = upper - lower;
        if !(lower.is_finite() && upper.is_finite() && lower < upper && width.is_finite()) {
            return Err(QuadratureError::InvalidInterval { lower, upper });
        }
        config.validate()?;

        Ok(Self {
            lower,
            upper,
            config,
            integrand,
        })
    }

    /// Lower integration bound.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper integration bound.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Convergence tolerance.
    pub fn tolerance(&self) -> f64 {
        self.config.tolerance
    }

    /// Engine configuration.
    pub fn config(&self) -> &RombergConfig {
        &self.config
    }

    /// The integrand.
    pub fn integrand(&self) -> &F {
        &self.integrand
    }

    /// Level-0 trapezoid state for this request.
    fn refinement(&self) -> QuadratureResult<TrapezoidalRefinement<'_, F>> {
        TrapezoidalRefinement::start_with(
            &self.integrand,
            self.lower,
            self.upper,
            self.config.reject_non_finite,
        )
    }
}

/// Integrates `f` over `[a, b]` with the recursive driver.
///
/// # Arguments
///
/// * `f` - The integrand
/// * `a` - Lower integration bound
/// * `b` - Upper integration bound
/// * `config` - Engine configuration
///
/// # Returns
///
/// The best diagonal estimate with convergence statistics, or an error if
/// the interval or configuration is invalid or the integrand fails.
///
/// # Example
///
/// ```rust
/// use romberg_math::romberg::{romberg, RombergConfig};
///
/// let report = romberg(|x: f64| x.exp(), 0.0, 1.0, &RombergConfig::default()).unwrap();
/// assert!(report.converged);
/// assert!((report.value - (std::f64::consts::E - 1.0)).abs() < 1e-9);
/// ```
pub fn romberg<F>(f: F, a: f64, b: f64, config: &RombergConfig) -> QuadratureResult<RombergReport>
where
    F: Integrand,
{
    Romberg::with_config(a, b, *config, f)?.recursive_report()
}
