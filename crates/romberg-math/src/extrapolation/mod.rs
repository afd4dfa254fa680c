//! Richardson extrapolation.
//!
//! The trapezoidal rule has an error expansion in even powers of the step:
//!
//! ```text
//! T(h) = I + c_1 h^2 + c_2 h^4 + c_3 h^6 + ...
//! ```
//!
//! Combining two estimates whose steps differ by a factor of two cancels the
//! leading remaining term. Applied column by column this builds the Romberg
//! triangle, where column `j` is exact for polynomials of degree `2j + 1`.
//!
//! # Example
//!
//! ```rust
//! use romberg_math::extrapolation::{richardson, ExtrapolationTable};
//!
//! // Trapezoid estimates of ∫₀¹ x² dx with 1 and 2 subintervals
//! let coarse = 0.5;
//! let fine = 0.375;
//! assert!((richardson(fine, coarse, 1) - 1.0 / 3.0).abs() < 1e-15);
//!
//! let mut table = ExtrapolationTable::new();
//! table.push_trapezoid(coarse);
//! table.push_trapezoid(fine);
//! assert_eq!(table.get(1, 1), Some(richardson(fine, coarse, 1)));
//! ```

mod table;

pub use table::ExtrapolationTable;

/// Returns `4^column - 1`, the Richardson denominator for `column`.
#[inline]
pub fn richardson_denominator(column: usize) -> f64 {
    4.0_f64.powi(column as i32) - 1.0
}

/// One Richardson step: `R[i][j] = R[i][j-1] + (R[i][j-1] - R[i-1][j-1]) / (4^j - 1)`.
///
/// `finer` is `R[i][j-1]`, `coarser` is `R[i-1][j-1]`. `column` must be at
/// least 1; column 0 is the raw trapezoid and is never extrapolated.
#[inline]
pub fn richardson(finer: f64, coarser: f64, column: usize) -> f64 {
    debug_assert!(column >= 1, "column 0 is not an extrapolated column");
    finer + (finer - coarser) / richardson_denominator(column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_denominators() {
        assert_relative_eq!(richardson_denominator(1), 3.0);
        assert_relative_eq!(richardson_denominator(2), 15.0);
        assert_relative_eq!(richardson_denominator(3), 63.0);
    }

    #[test]
    fn test_first_column_is_simpson() {
        // Simpson's rule on [0, 2] for x^3 with one panel is exact: 4
        let f = |x: f64| x * x * x;
        let t0 = 1.0 * (f(0.0) + f(2.0));
        let t1 = 0.5 * t0 + 1.0 * f(1.0);
        assert_relative_eq!(richardson(t1, t0, 1), 4.0, epsilon = 1e-14);
    }

    #[test]
    fn test_equal_inputs_are_fixed_point() {
        assert_relative_eq!(richardson(1.25, 1.25, 3), 1.25);
    }
}
