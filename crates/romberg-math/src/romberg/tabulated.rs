//! Fixed-depth Romberg driver.

use log::trace;

use super::Romberg;
use crate::error::{QuadratureError, QuadratureResult};
use crate::extrapolation::ExtrapolationTable;
use crate::integrand::Integrand;
use crate::trapezoid::MAX_LEVEL;

impl<F> Romberg<F>
where
    F: Integrand,
{
    /// Builds rows `0..=maximum_step` unconditionally and returns `R[N][N]`.
    ///
    /// `maximum_step = 0` returns the single-trapezoid estimate with no
    /// extrapolation. Cost is exactly `2^N + 1` integrand evaluations.
    ///
    /// # Example
    ///
    /// ```rust
    /// use romberg_math::romberg::Romberg;
    ///
    /// let engine = Romberg::new(0.0, 1.0, 1e-10, |x: f64| x.powi(4) + 2.0 * x * x + 1.0).unwrap();
    /// let value = engine.dynamic_programming(20).unwrap();
    /// assert!((value - 28.0 / 15.0).abs() < 1e-8);
    /// ```
    pub fn dynamic_programming(&self, maximum_step: u32) -> QuadratureResult<f64> {
        self.tabulate(maximum_step).map(|(_, diagonal)| diagonal)
    }

    /// Builds and returns the full extrapolation table with `maximum_step + 1` rows.
    pub fn table(&self, maximum_step: u32) -> QuadratureResult<ExtrapolationTable> {
        self.tabulate(maximum_step).map(|(table, _)| table)
    }

    fn tabulate(&self, maximum_step: u32) -> QuadratureResult<(ExtrapolationTable, f64)> {
        if maximum_step > MAX_LEVEL {
            return Err(QuadratureError::LevelTooDeep {
                level: maximum_step,
                max: MAX_LEVEL,
            });
        }

        trace!(
            "romberg table on [{}, {}] with {} rows",
            self.lower,
            self.upper,
            maximum_step + 1
        );

        let mut rule = self.refinement()?;
        let mut table = ExtrapolationTable::with_capacity(maximum_step as usize + 1);
        let mut diagonal = table.push_trapezoid(rule.estimate());

        for _ in 0..maximum_step {
            diagonal = table.push_trapezoid(rule.refine()?);
        }

        Ok((table, diagonal))
    }
}
