//! Integrand abstraction.
//!
//! Any `Fn(f64) -> f64` is an [`Integrand`]. Integrands that can fail
//! (domain errors, lookups, external models) are wrapped in [`Fallible`]
//! so their errors propagate out of the engine unchanged.

use crate::error::{QuadratureError, QuadratureResult};

/// A real-valued function of one real variable.
///
/// Implementations must be pure: the engine may sample the same point
/// more than once and expects the same answer each time.
pub trait Integrand {
    /// Evaluates the function at `x`.
    fn evaluate(&self, x: f64) -> QuadratureResult<f64>;
}

impl<F> Integrand for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn evaluate(&self, x: f64) -> QuadratureResult<f64> {
        Ok(self(x))
    }
}

/// Adapter for integrands returning `Result`.
///
/// # Example
///
/// ```rust
/// use romberg_math::integrand::{Fallible, Integrand};
///
/// #[derive(Debug)]
/// struct Negative;
/// impl std::fmt::Display for Negative {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "negative argument")
///     }
/// }
/// impl std::error::Error for Negative {}
///
/// let sqrt = Fallible(|x: f64| if x < 0.0 { Err(Negative) } else { Ok(x.sqrt()) });
/// assert_eq!(sqrt.evaluate(4.0).unwrap(), 2.0);
/// assert!(sqrt.evaluate(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> Integrand for Fallible<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    fn evaluate(&self, x: f64) -> QuadratureResult<f64> {
        (self.0)(x).map_err(|e| QuadratureError::evaluation(x, e))
    }
}

/// Evaluates `f` at `x`, rejecting NaN and infinities when `reject_non_finite` is set.
pub(crate) fn sample<F>(f: &F, x: f64, reject_non_finite: bool) -> QuadratureResult<f64>
where
    F: Integrand + ?Sized,
{
    let value = f.evaluate(x)?;
    if reject_non_finite && !value.is_finite() {
        return Err(QuadratureError::NonFiniteValue { x, value });
    }
    Ok(value)
}
