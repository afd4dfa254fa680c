//! Composite trapezoidal rule with incremental refinement.
//!
//! Level `k` uses `2^k` equal subintervals of `[a, b]`. Moving from level
//! `k - 1` to `k` halves the step and only samples the `2^(k-1)` new
//! midpoints:
//!
//! ```text
//! T_0 = (b - a) / 2 * (f(a) + f(b))
//! T_k = T_(k-1) / 2 + h_k * sum_{m=1}^{2^(k-1)} f(a + (2m - 1) h_k),   h_k = (b - a) / 2^k
//! ```
//!
//! Reaching level `k` therefore costs `2^k + 1` evaluations in total.

use crate::error::{QuadratureError, QuadratureResult};
use crate::integrand::{sample, Integrand};

/// Deepest supported refinement level (`2^30` subintervals).
pub const MAX_LEVEL: u32 = 30;

/// Running state of the composite trapezoidal rule over a fixed interval.
#[derive(Debug)]
pub struct TrapezoidalRefinement<'a, F: ?Sized> {
    f: &'a F,
    a: f64,
    b: f64,
    level: u32,
    estimate: f64,
    evaluations: u64,
    reject_non_finite: bool,
}

impl<'a, F> TrapezoidalRefinement<'a, F>
where
    F: Integrand + ?Sized,
{
    /// Evaluates the level-0 estimate (a single trapezoid over `[a, b]`).
    pub fn start(f: &'a F, a: f64, b: f64) -> QuadratureResult<Self> {
        Self::start_with(f, a, b, true)
    }

    /// Same as [`start`](Self::start) with explicit control over non-finite sample checks.
    pub fn start_with(f: &'a F, a: f64, b: f64, reject_non_finite: bool) -> QuadratureResult<Self> {
        if !(b - a).is_finite() {
            return Err(QuadratureError::InvalidInterval { lower: a, upper: b });
        }

        let fa = sample(f, a, reject_non_finite)?;
        let fb = sample(f, b, reject_non_finite)?;

        Ok(Self {
            f,
            a,
            b,
            level: 0,
            estimate: 0.5 * (b - a) * (fa + fb),
            evaluations: 2,
            reject_non_finite,
        })
    }

    /// Advances one level and returns the new estimate.
    pub fn refine(&mut self) -> QuadratureResult<f64> {
        let next = self.level + 1;
        if next > MAX_LEVEL {
            return Err(QuadratureError::LevelTooDeep {
                level: next,
                max: MAX_LEVEL,
            });
        }

        let new_points = 1_u64 << (next - 1);
        let h = (self.b - self.a) / (1_u64 << next) as f64;

        let mut sum = 0.0;
        for m in 1..=new_points {
            let x = self.a + (2 * m - 1) as f64 * h;
            sum += sample(self.f, x, self.reject_non_finite)?;
        }

        self.estimate = 0.5 * self.estimate + h * sum;
        self.level = next;
        self.evaluations += new_points;
        Ok(self.estimate)
    }

    /// Current refinement level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Estimate at the current level.
    pub fn estimate(&self) -> f64 {
        self.estimate
    }

    /// Number of integrand evaluations performed so far.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }
}

/// Composite trapezoidal estimate of `∫f` over `[a, b]` with `2^level` subintervals.
///
/// # Arguments
///
/// * `f` - The integrand
/// * `a` - Lower integration bound
/// * `b` - Upper integration bound
/// * `level` - Refinement level, at most [`MAX_LEVEL`]
///
/// # Returns
///
/// The level-`level` estimate, or an error if the level is too deep, the
/// interval width is not finite, or a sample fails.
///
/// # Example
///
/// ```rust
/// use romberg_math::trapezoid::trapezoid;
///
/// // Trapezoids are exact for straight lines.
/// let t = trapezoid(&|x: f64| 3.0 * x + 1.0, 0.0, 2.0, 0).unwrap();
/// assert!((t - 8.0).abs() < 1e-15);
/// ```
pub fn trapezoid<F>(f: &F, a: f64, b: f64, level: u32) -> QuadratureResult<f64>
where
    F: Integrand + ?Sized,
{
    if level > MAX_LEVEL {
        return Err(QuadratureError::LevelTooDeep {
            level,
            max: MAX_LEVEL,
        });
    }

    let mut rule = TrapezoidalRefinement::start(f, a, b)?;
    while rule.level() < level {
        rule.refine()?;
    }
    Ok(rule.estimate())
}
