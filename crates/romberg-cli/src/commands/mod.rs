//! CLI command implementations.

pub mod check;
pub mod functions;
pub mod integrate;
pub mod table;

// Re-export submodules for convenience
pub use check::CheckArgs;
pub use functions::FunctionsArgs;
pub use integrate::IntegrateArgs;
pub use table::TableArgs;

use clap::Args;

use crate::error::{CliError, CliResult};

/// Integrand and interval shared by the integrating commands.
#[derive(Args, Debug, Clone)]
pub struct IntervalArgs {
    /// Catalogue function name (see `romberg functions`)
    #[arg(long = "function", value_name = "NAME")]
    pub function: String,

    /// Lower integration bound
    #[arg(short = 'a', long, allow_negative_numbers = true)]
    pub lower: f64,

    /// Upper integration bound
    #[arg(short = 'b', long, allow_negative_numbers = true)]
    pub upper: f64,
}

impl IntervalArgs {
    /// Validates the bounds before they reach the engine.
    pub fn bounds(&self) -> CliResult<(f64, f64)> {
        if !self.lower.is_finite() {
            return Err(CliError::InvalidArgument {
                name: "lower bound",
                value: self.lower.to_string(),
                reason: "Must be a finite number.",
            });
        }
        if !(self.upper.is_finite() && self.upper > self.lower) {
            return Err(CliError::InvalidArgument {
                name: "upper bound",
                value: self.upper.to_string(),
                reason: "Must be finite and greater than the lower bound.",
            });
        }
        Ok((self.lower, self.upper))
    }
}
