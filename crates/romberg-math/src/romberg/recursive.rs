//! Tolerance-driven Romberg driver.

use log::{debug, warn};

use super::{Romberg, RombergReport};
use crate::error::QuadratureResult;
use crate::extrapolation::ExtrapolationTable;
use crate::integrand::Integrand;

impl<F> Romberg<F>
where
    F: Integrand,
{
    /// Integrates until two successive diagonal entries differ by less than the tolerance.
    ///
    /// If the row cap is reached first, the last diagonal entry is returned
    /// anyway and a warning is logged. Use [`recursive_report`](Self::recursive_report)
    /// to see whether the tolerance was actually met.
    ///
    /// # Example
    ///
    /// ```rust
    /// use romberg_math::romberg::Romberg;
    ///
    /// let engine = Romberg::new(1.0, 2.0, 1e-10, |x: f64| 1.0 / x).unwrap();
    /// let value = engine.recursive().unwrap();
    /// assert!((value - std::f64::consts::LN_2).abs() < 1e-9);
    /// ```
    pub fn recursive(&self) -> QuadratureResult<f64> {
        self.recursive_report().map(|report| report.value)
    }

    /// Runs the recursive driver and reports convergence details.
    pub fn recursive_report(&self) -> QuadratureResult<RombergReport> {
        let config = &self.config;
        let mut rule = self.refinement()?;
        let mut table = ExtrapolationTable::with_capacity(config.max_rows as usize);

        // Row 0 has nothing to compare against.
        let mut previous = table.push_trapezoid(rule.estimate());
        let mut delta = f64::INFINITY;

        for row in 1..config.max_rows {
            let trapezoid = rule.refine()?;
            let diagonal = table.push_trapezoid(trapezoid);
            delta = (diagonal - previous).abs();

            debug!(
                "romberg row {}: trapezoid={:.15e} diagonal={:.15e} delta={:.3e}",
                row, trapezoid, diagonal, delta
            );

            if row + 1 >= config.min_rows && delta < config.tolerance {
                return Ok(RombergReport {
                    value: diagonal,
                    converged: true,
                    rows: row + 1,
                    error_estimate: delta,
                    evaluations: rule.evaluations(),
                });
            }

            previous = diagonal;
        }

        warn!(
            "romberg did not converge on [{}, {}] within {} rows (delta {:.3e} >= tolerance {:.3e})",
            self.lower, self.upper, config.max_rows, delta, config.tolerance
        );

        Ok(RombergReport {
            value: previous,
            converged: false,
            rows: config.max_rows,
            error_estimate: delta,
            evaluations: rule.evaluations(),
        })
    }
}
