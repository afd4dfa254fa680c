//! Property-based tests for Romberg invariants.
//!
//! These tests verify properties that should hold for any input:
//! - Column j of the table is exact for polynomials of degree <= 2j + 1
//! - The fixed-depth driver at step 0 is the plain trapezoid
//! - Both drivers agree on smooth integrands
//! - Repeated calls are bit-identical
//! - Integration is linear in the integrand

use proptest::prelude::*;
use romberg_math::prelude::*;

// =============================================================================
// HELPERS
// =============================================================================

/// Evaluates `sum c_k x^k`.
fn poly(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Exact integral of the polynomial over `[a, b]`.
fn poly_integral(coeffs: &[f64], a: f64, b: f64) -> f64 {
    let antiderivative = |x: f64| {
        coeffs
            .iter()
            .enumerate()
            .map(|(k, &c)| c * x.powi(k as i32 + 1) / (k as f64 + 1.0))
            .sum::<f64>()
    };
    antiderivative(b) - antiderivative(a)
}

fn interval() -> impl Strategy<Value = (f64, f64)> {
    (-3.0..3.0_f64, 0.1..4.0_f64).prop_map(|(a, width)| (a, a + width))
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_column_exact_for_polynomials(
        column in 0_usize..4,
        coeffs in prop::collection::vec(-5.0..5.0_f64, 8),
        (a, b) in interval(),
    ) {
        let degree = 2 * column + 1;
        let coeffs = coeffs[..=degree].to_vec();
        let exact = poly_integral(&coeffs, a, b);

        let f = |x: f64| poly(&coeffs, x);
        let engine = Romberg::new(a, b, 1e-10, f).unwrap();
        let table = engine.table(6).unwrap();

        let scale = 1.0 + exact.abs() + coeffs.iter().map(|c| c.abs()).sum::<f64>() * (1.0 + a.abs().max(b.abs())).powi(degree as i32 + 1);
        for i in column..=6 {
            let entry = table.get(i, column).unwrap();
            prop_assert!(
                (entry - exact).abs() <= 1e-11 * scale,
                "R[{}][{}] = {} vs exact {}", i, column, entry, exact
            );
        }
    }

    #[test]
    fn prop_step_zero_is_trapezoid(
        (a, b) in interval(),
        k in 0.1..3.0_f64,
    ) {
        let f = |x: f64| (k * x).sin() + x * x;
        let engine = Romberg::new(a, b, 1e-10, f).unwrap();

        let expected = 0.5 * (b - a) * (f(a) + f(b));
        prop_assert_eq!(engine.dynamic_programming(0).unwrap(), expected);
    }

    #[test]
    fn prop_drivers_agree_on_smooth_integrands(
        (a, b) in interval(),
        k in 0.1..2.0_f64,
        which in 0_u8..4,
    ) {
        let f = move |x: f64| match which {
            0 => (k * x).sin(),
            1 => (k * x).cos(),
            2 => (k * x).exp(),
            _ => x.powi(4) - k * x * x + 1.0,
        };
        let engine = Romberg::new(a, b, 1e-10, f).unwrap();

        let report = engine.recursive_report().unwrap();
        prop_assume!(report.converged);

        let tabulated = engine.dynamic_programming(20).unwrap();
        let scale = 1.0_f64.max(tabulated.abs());
        prop_assert!((report.value - tabulated).abs() < 1e-8 * scale);
    }

    #[test]
    fn prop_repeated_calls_identical(
        (a, b) in interval(),
        k in 0.1..3.0_f64,
        step in 0_u32..10,
    ) {
        let engine = Romberg::new(a, b, 1e-10, move |x: f64| (k * x).cos() / (1.0 + x * x)).unwrap();

        prop_assert_eq!(
            engine.recursive().unwrap().to_bits(),
            engine.recursive().unwrap().to_bits()
        );
        prop_assert_eq!(
            engine.dynamic_programming(step).unwrap().to_bits(),
            engine.dynamic_programming(step).unwrap().to_bits()
        );
    }

    #[test]
    fn prop_linear_in_integrand(
        (a, b) in interval(),
        alpha in -3.0..3.0_f64,
        step in 0_u32..8,
    ) {
        let f = |x: f64| x.sin();
        let g = |x: f64| x.exp();
        let combined = move |x: f64| alpha * f(x) + g(x);

        let value = |h: &dyn Fn(f64) -> f64| {
            Romberg::new(a, b, 1e-10, h).unwrap().dynamic_programming(step).unwrap()
        };

        let lhs = value(&combined);
        let rhs = alpha * value(&f) + value(&g);
        prop_assert!((lhs - rhs).abs() < 1e-10 * (1.0 + lhs.abs()));
    }

    #[test]
    fn prop_reversed_interval_rejected(
        (a, b) in interval(),
    ) {
        let result = Romberg::new(b, a, 1e-10, |x: f64| x);
        let rejected = matches!(result, Err(QuadratureError::InvalidInterval { .. }));
        prop_assert!(rejected);
    }
}
