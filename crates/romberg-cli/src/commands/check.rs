//! Check command implementation.
//!
//! Runs a fixed set of reference integrals through both drivers and
//! compares the results with their known values.

use std::f64::consts::{E, FRAC_PI_2, LN_2, PI};

use anyhow::{bail, Result};
use clap::Args;
use romberg_math::romberg::{Romberg, RombergConfig};
use serde::Serialize;
use tabled::Tabled;
use tracing::{debug, warn};

use crate::catalogue;
use crate::cli::OutputFormat;
use crate::commands::integrate::Method;
use crate::config::{CliConfig, EngineArgs};
use crate::output::{format_error, print_header, print_output, print_success, status_marker};

/// Arguments for the check command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Only show failing scenarios
    #[arg(long)]
    pub failures_only: bool,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// A reference integral with its expected value.
#[derive(Debug, Clone, Copy)]
struct Scenario {
    name: &'static str,
    function: &'static str,
    lower: f64,
    upper: f64,
    method: Method,
    max_step: u32,
    expected: f64,
    tolerance: f64,
}

const fn recursive(
    name: &'static str,
    function: &'static str,
    lower: f64,
    upper: f64,
    expected: f64,
) -> Scenario {
    Scenario {
        name,
        function,
        lower,
        upper,
        method: Method::Recursive,
        max_step: 0,
        expected,
        tolerance: 1e-9,
    }
}

const fn tabulated(
    name: &'static str,
    function: &'static str,
    lower: f64,
    upper: f64,
    expected: f64,
) -> Scenario {
    Scenario {
        name,
        function,
        lower,
        upper,
        method: Method::Tabulated,
        max_step: 20,
        expected,
        tolerance: 1e-8,
    }
}

const SCENARIOS: &[Scenario] = &[
    recursive("constant", "one", 0.0, 1.0, 1.0),
    recursive("linear", "x", 0.0, 1.0, 0.5),
    recursive("quadratic", "x2", 0.0, 1.0, 1.0 / 3.0),
    recursive("cubic", "x3", 0.0, 1.0, 0.25),
    recursive("sine", "sin", 0.0, PI, 2.0),
    recursive("cosine", "cos", 0.0, FRAC_PI_2, 1.0),
    recursive("exponential", "exp", 0.0, 1.0, E - 1.0),
    recursive("reciprocal ln2", "recip", 1.0, 2.0, LN_2),
    recursive("reciprocal to e", "recip", 1.0, E, 1.0),
    tabulated("quartic polynomial", "quartic", 0.0, 1.0, 28.0 / 15.0),
    tabulated("sine cosine product", "sincos", 0.0, PI, 0.0),
    tabulated("tabulated quadratic", "x2", 0.0, 1.0, 1.0 / 3.0),
    tabulated("tabulated sine", "sin", 0.0, PI, 2.0),
];

/// Outcome of one scenario.
#[derive(Debug, Serialize, Tabled)]
pub struct CheckRow {
    #[tabled(rename = "Scenario")]
    pub scenario: &'static str,
    #[tabled(rename = "Method")]
    pub method: String,
    #[tabled(rename = "Expected")]
    pub expected: f64,
    #[tabled(rename = "Actual")]
    pub actual: f64,
    #[tabled(rename = "Error")]
    pub error: String,
    #[tabled(rename = "Status")]
    #[serde(skip)]
    pub status: String,
    #[tabled(skip)]
    pub passed: bool,
}

/// Execute the check command.
pub fn execute(
    args: CheckArgs,
    config: &CliConfig,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let engine_config = args.engine.resolve(&config.engine);

    let mut rows = Vec::with_capacity(SCENARIOS.len());
    for scenario in SCENARIOS {
        rows.push(run(scenario, engine_config)?);
    }

    let failed = rows.iter().filter(|r| !r.passed).count();
    let shown: Vec<CheckRow> = rows
        .into_iter()
        .filter(|r| !args.failures_only || !r.passed)
        .collect();

    if format == OutputFormat::Table {
        print_header("Reference Scenarios");
    }
    print_output(&shown, format)?;

    if failed > 0 {
        bail!("{failed} reference scenario(s) failed");
    }
    if !quiet && format == OutputFormat::Table {
        print_success(&format!("All {} reference scenarios passed", SCENARIOS.len()));
    }
    Ok(())
}

fn run(scenario: &Scenario, config: RombergConfig) -> Result<CheckRow> {
    let function = catalogue::lookup(scenario.function)?;
    let engine = Romberg::with_config(scenario.lower, scenario.upper, config, function)?;

    let actual = match scenario.method {
        Method::Recursive => engine.recursive()?,
        Method::Tabulated => engine.dynamic_programming(scenario.max_step)?,
    };
    let error = (actual - scenario.expected).abs();
    let passed = error <= scenario.tolerance;

    if passed {
        debug!(scenario = scenario.name, actual, error, "scenario passed");
    } else {
        warn!(
            scenario = scenario.name,
            actual,
            expected = scenario.expected,
            error,
            "scenario failed"
        );
    }

    Ok(CheckRow {
        scenario: scenario.name,
        method: format!("{:?}", scenario.method).to_lowercase(),
        expected: scenario.expected,
        actual,
        error: format_error(error),
        status: status_marker(passed),
        passed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenarios_use_catalogue_functions() {
        for scenario in SCENARIOS {
            assert!(
                catalogue::lookup(scenario.function).is_ok(),
                "{} uses unknown function {}",
                scenario.name,
                scenario.function
            );
        }
    }

    #[test]
    fn test_all_scenarios_pass_with_defaults() {
        for scenario in SCENARIOS {
            let row = run(scenario, RombergConfig::default()).unwrap();
            assert!(row.passed, "{} failed: {}", row.scenario, row.error);
        }
    }

    #[test]
    fn test_loose_tolerance_fails_recursive_scenarios() {
        let config = RombergConfig::default().with_tolerance(1e-1);
        let row = run(&SCENARIOS[4], config).unwrap();
        assert_eq!(row.scenario, "sine");
        assert!(!row.passed);
    }
}
