//! # Romberg Math
//!
//! Romberg quadrature for real functions over finite intervals.
//!
//! This crate provides:
//!
//! - **Integrands**: [`Integrand`] for plain closures and fallible functions
//! - **Trapezoid**: Composite trapezoidal rule with incremental refinement
//! - **Extrapolation**: Richardson steps and the triangular Romberg table
//! - **Romberg**: Tolerance-driven and fixed-depth drivers over that table
//!
//! ## Design Philosophy
//!
//! - **Shared primitives**: Both drivers build the same table entries
//! - **No silent failures**: Non-convergence is reported, evaluation errors propagate
//! - **Generic**: Any `Fn(f64) -> f64` integrates without boxing
//!
//! ## Example
//!
//! ```rust
//! use romberg_math::prelude::*;
//!
//! let engine = Romberg::new(0.0, 1.0, 1e-10, |x: f64| x * x).unwrap();
//! let report = engine.recursive_report().unwrap();
//!
//! assert!(report.converged);
//! assert!((report.value - 1.0 / 3.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod extrapolation;
pub mod integrand;
pub mod romberg;
pub mod trapezoid;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{QuadratureError, QuadratureResult};
    pub use crate::extrapolation::{richardson, ExtrapolationTable};
    pub use crate::integrand::{Fallible, Integrand};
    pub use crate::romberg::{romberg, Romberg, RombergConfig, RombergReport};
    pub use crate::trapezoid::{trapezoid, TrapezoidalRefinement};
}

pub use error::{QuadratureError, QuadratureResult};
