//! Integration tests validated against reference values.
//!
//! The fixture holds the scenarios and expected results of the C++
//! reference build. Each scenario runs through the public engine API.

use romberg_math::prelude::*;
use serde::Deserialize;
use std::fs;

/// Path to the reference scenario fixture
const REFERENCE_FILE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/reference_scenarios.json"
);

// ============================================================================
// JSON Structures for Test Data
// ============================================================================

#[derive(Debug, Deserialize)]
struct Fixture {
    metadata: Metadata,
    scenarios: Vec<Scenario>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)] // informational
struct Metadata {
    source: String,
    generated_date: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Method {
    Recursive,
    Tabulated,
}

#[derive(Debug, Deserialize)]
struct Scenario {
    name: String,
    function: String,
    lower: f64,
    upper: f64,
    method: Method,
    #[serde(default)]
    max_step: u32,
    expected: f64,
    tolerance: f64,
}

fn load_fixture() -> Fixture {
    let content = fs::read_to_string(REFERENCE_FILE).expect("Failed to read reference fixture");
    serde_json::from_str(&content).expect("Failed to parse reference fixture")
}

fn named_function(name: &str) -> fn(f64) -> f64 {
    match name {
        "one" => |_| 1.0,
        "x" => |x| x,
        "x2" => |x| x * x,
        "x3" => |x| x * x * x,
        "sin" => f64::sin,
        "cos" => f64::cos,
        "exp" => f64::exp,
        "recip" => |x| 1.0 / x,
        "quartic" => |x| x.powi(4) + 2.0 * x * x + 1.0,
        "sincos" => |x| x.sin() * x.cos(),
        other => panic!("Unknown fixture function: {other}"),
    }
}

fn run(scenario: &Scenario) -> f64 {
    let engine = Romberg::new(
        scenario.lower,
        scenario.upper,
        1e-10,
        named_function(&scenario.function),
    )
    .unwrap_or_else(|e| panic!("{}: construction failed: {e}", scenario.name));

    let result = match scenario.method {
        Method::Recursive => engine.recursive(),
        Method::Tabulated => engine.dynamic_programming(scenario.max_step),
    };
    result.unwrap_or_else(|e| panic!("{}: integration failed: {e}", scenario.name))
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_fixture_loads() {
    let fixture = load_fixture();
    assert!(!fixture.metadata.source.is_empty());
    assert_eq!(fixture.scenarios.len(), 13);
}

#[test]
fn test_reference_scenarios() {
    let fixture = load_fixture();
    let mut failures = Vec::new();

    for scenario in &fixture.scenarios {
        let actual = run(scenario);
        let error = (actual - scenario.expected).abs();
        if error >= scenario.tolerance {
            failures.push(format!(
                "{}: expected {:.12e}, got {:.12e} (error {:.3e})",
                scenario.name, scenario.expected, actual, error
            ));
        }
    }

    assert!(failures.is_empty(), "Failed scenarios:\n{}", failures.join("\n"));
}

#[test]
fn test_recursive_scenarios_converge() {
    let fixture = load_fixture();

    for scenario in fixture
        .scenarios
        .iter()
        .filter(|s| matches!(s.method, Method::Recursive))
    {
        let engine = Romberg::new(
            scenario.lower,
            scenario.upper,
            1e-10,
            named_function(&scenario.function),
        )
        .unwrap();
        let report = engine.recursive_report().unwrap();

        assert!(report.converged, "{} did not converge", scenario.name);
        assert!(report.rows <= 10, "{} needed {} rows", scenario.name, report.rows);
        assert_eq!(report.evaluations, (1_u64 << (report.rows - 1)) + 1);
    }
}

#[test]
fn test_drivers_agree_on_reference_functions() {
    let fixture = load_fixture();

    for scenario in &fixture.scenarios {
        let engine = Romberg::new(
            scenario.lower,
            scenario.upper,
            1e-10,
            named_function(&scenario.function),
        )
        .unwrap();

        let recursive = engine.recursive().unwrap();
        let tabulated = engine.dynamic_programming(20).unwrap();
        assert!(
            (recursive - tabulated).abs() < 1e-8,
            "{}: recursive {recursive} vs tabulated {tabulated}",
            scenario.name
        );
    }
}

#[test]
fn test_shared_table_entries_identical() {
    // Entries reached by both drivers come from the same computation.
    let engine = Romberg::new(0.0, 2.0, 1e-10, |x: f64| x.exp() * x.cos()).unwrap();
    let report = engine.recursive_report().unwrap();
    let table = engine.table(report.rows - 1).unwrap();

    assert_eq!(table.last_diagonal(), Some(report.value));
    assert_eq!(
        engine.dynamic_programming(report.rows - 1).unwrap().to_bits(),
        report.value.to_bits()
    );
}
