//! Built-in integrands selectable by name.

use romberg_math::integrand::{Fallible, Integrand};
use romberg_math::QuadratureResult;
use serde::Serialize;
use thiserror::Error;

use crate::error::{CliError, CliResult};

/// Raised by catalogue functions evaluated outside their domain.
#[derive(Debug, Error)]
#[error("{function} is undefined at x = {x}")]
pub struct DomainError {
    function: &'static str,
    x: f64,
}

#[derive(Debug, Clone, Copy)]
enum Body {
    Plain(fn(f64) -> f64),
    Partial(fn(f64) -> Result<f64, DomainError>),
}

/// A named integrand with an optional closed-form antiderivative.
#[derive(Debug, Clone, Copy)]
pub struct Function {
    /// Catalogue name.
    pub name: &'static str,
    /// Human-readable formula.
    pub formula: &'static str,
    body: Body,
    antiderivative: Option<fn(f64) -> f64>,
}

impl Function {
    /// Exact integral over `[a, b]` when an antiderivative is known.
    pub fn exact(&self, a: f64, b: f64) -> Option<f64> {
        self.antiderivative.map(|big_f| big_f(b) - big_f(a))
    }

    /// True if the function can report domain errors.
    pub fn is_partial(&self) -> bool {
        matches!(self.body, Body::Partial(_))
    }
}

impl Integrand for Function {
    fn evaluate(&self, x: f64) -> QuadratureResult<f64> {
        match self.body {
            Body::Plain(f) => Ok(f(x)),
            Body::Partial(f) => Fallible(f).evaluate(x),
        }
    }
}

fn sqrt(x: f64) -> Result<f64, DomainError> {
    if x < 0.0 {
        Err(DomainError {
            function: "sqrt",
            x,
        })
    } else {
        Ok(x.sqrt())
    }
}

fn ln(x: f64) -> Result<f64, DomainError> {
    if x <= 0.0 {
        Err(DomainError { function: "ln", x })
    } else {
        Ok(x.ln())
    }
}

const fn known(antiderivative: fn(f64) -> f64) -> Option<fn(f64) -> f64> {
    Some(antiderivative)
}

const FUNCTIONS: &[Function] = &[
    Function {
        name: "one",
        formula: "1",
        body: Body::Plain(|_: f64| 1.0),
        antiderivative: known(|x: f64| x),
    },
    Function {
        name: "x",
        formula: "x",
        body: Body::Plain(|x: f64| x),
        antiderivative: known(|x: f64| 0.5 * x * x),
    },
    Function {
        name: "x2",
        formula: "x^2",
        body: Body::Plain(|x: f64| x * x),
        antiderivative: known(|x: f64| x * x * x / 3.0),
    },
    Function {
        name: "x3",
        formula: "x^3",
        body: Body::Plain(|x: f64| x * x * x),
        antiderivative: known(|x: f64| x.powi(4) / 4.0),
    },
    Function {
        name: "quartic",
        formula: "x^4 + 2x^2 + 1",
        body: Body::Plain(|x: f64| x.powi(4) + 2.0 * x * x + 1.0),
        antiderivative: known(|x: f64| x.powi(5) / 5.0 + 2.0 * x.powi(3) / 3.0 + x),
    },
    Function {
        name: "sin",
        formula: "sin(x)",
        body: Body::Plain(f64::sin),
        antiderivative: known(|x: f64| -x.cos()),
    },
    Function {
        name: "cos",
        formula: "cos(x)",
        body: Body::Plain(f64::cos),
        antiderivative: known(f64::sin),
    },
    Function {
        name: "sincos",
        formula: "sin(x) cos(x)",
        body: Body::Plain(|x: f64| x.sin() * x.cos()),
        antiderivative: known(|x: f64| 0.5 * x.sin().powi(2)),
    },
    Function {
        name: "exp",
        formula: "e^x",
        body: Body::Plain(f64::exp),
        antiderivative: known(f64::exp),
    },
    Function {
        name: "recip",
        formula: "1 / x",
        body: Body::Plain(|x: f64| 1.0 / x),
        antiderivative: known(|x: f64| x.abs().ln()),
    },
    Function {
        name: "gauss",
        formula: "e^(-x^2)",
        body: Body::Plain(|x: f64| (-x * x).exp()),
        antiderivative: None,
    },
    Function {
        name: "runge",
        formula: "1 / (1 + 25x^2)",
        body: Body::Plain(|x: f64| 1.0 / (1.0 + 25.0 * x * x)),
        antiderivative: known(|x: f64| (5.0 * x).atan() / 5.0),
    },
    Function {
        name: "sqrt",
        formula: "sqrt(x), x >= 0",
        body: Body::Partial(sqrt),
        antiderivative: known(|x: f64| 2.0 / 3.0 * x.max(0.0).powf(1.5)),
    },
    Function {
        name: "ln",
        formula: "ln(x), x > 0",
        body: Body::Partial(ln),
        antiderivative: known(|x: f64| x * x.ln() - x),
    },
];

/// All catalogue entries.
pub fn all() -> &'static [Function] {
    FUNCTIONS
}

/// Looks up a function by name (case-insensitive).
pub fn lookup(name: &str) -> CliResult<Function> {
    FUNCTIONS
        .iter()
        .find(|f| f.name.eq_ignore_ascii_case(name))
        .copied()
        .ok_or_else(|| CliError::UnknownFunction(name.to_string()))
}

/// Catalogue row for display.
#[derive(Debug, Serialize, tabled::Tabled)]
pub struct FunctionRow {
    #[tabled(rename = "Name")]
    pub name: &'static str,
    #[tabled(rename = "Formula")]
    pub formula: &'static str,
    #[tabled(rename = "Exact")]
    pub exact_known: bool,
    #[tabled(rename = "Domain Checked")]
    pub partial: bool,
}

impl From<&Function> for FunctionRow {
    fn from(f: &Function) -> Self {
        Self {
            name: f.name,
            formula: f.formula,
            exact_known: f.antiderivative.is_some(),
            partial: f.is_partial(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use romberg_math::QuadratureError;

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("sin").unwrap().name, "sin");
        assert_eq!(lookup("SIN").unwrap().name, "sin");
        assert!(matches!(lookup("tan"), Err(CliError::UnknownFunction(_))));
    }

    #[test]
    fn test_names_unique() {
        let mut names: Vec<_> = all().iter().map(|f| f.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), all().len());
    }

    #[test]
    fn test_exact_values() {
        let quartic = lookup("quartic").unwrap();
        assert!((quartic.exact(0.0, 1.0).unwrap() - 28.0 / 15.0).abs() < 1e-15);

        let recip = lookup("recip").unwrap();
        assert!((recip.exact(1.0, 2.0).unwrap() - std::f64::consts::LN_2).abs() < 1e-15);

        assert!(lookup("gauss").unwrap().exact(0.0, 1.0).is_none());
    }

    #[test]
    fn test_partial_function_reports_domain_error() {
        let sqrt = lookup("sqrt").unwrap();
        assert!(sqrt.is_partial());
        assert_eq!(sqrt.evaluate(4.0).unwrap(), 2.0);

        let err = sqrt.evaluate(-1.0).unwrap_err();
        assert!(matches!(err, QuadratureError::Evaluation { .. }));
        assert!(err.to_string().contains("sqrt is undefined"));
    }
}
