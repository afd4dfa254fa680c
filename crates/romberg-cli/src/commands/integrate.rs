//! Integrate command implementation.
//!
//! Runs either driver on a catalogue function and reports the estimate,
//! convergence status and, when known, the error against the exact value.

use anyhow::Result;
use clap::{Args, ValueEnum};
use romberg_math::romberg::{Romberg, RombergReport};
use serde::Serialize;
use tracing::info;

use crate::catalogue;
use crate::cli::OutputFormat;
use crate::commands::IntervalArgs;
use crate::config::{CliConfig, EngineArgs};
use crate::output::{
    format_error, format_value, print_csv, print_header, print_json, print_output, print_warning,
    KeyValue,
};

/// Which Romberg driver to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Add rows until the tolerance is met
    #[default]
    Recursive,
    /// Build a fixed number of rows
    Tabulated,
}

/// Arguments for the integrate command.
#[derive(Args, Debug)]
pub struct IntegrateArgs {
    #[command(flatten)]
    pub interval: IntervalArgs,

    /// Driver to use
    #[arg(short, long, value_enum, default_value = "recursive")]
    pub method: Method,

    /// Last row index for the tabulated driver (2^N subintervals)
    #[arg(short = 'n', long, default_value = "20")]
    pub max_step: u32,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Integration result.
#[derive(Debug, Serialize)]
pub struct IntegrateOutput {
    pub function: &'static str,
    pub lower: f64,
    pub upper: f64,
    pub method: Method,
    pub value: f64,
    /// Only meaningful for the recursive driver.
    pub converged: Option<bool>,
    pub rows: u32,
    pub error_estimate: Option<f64>,
    pub evaluations: u64,
    pub exact: Option<f64>,
    pub abs_error: Option<f64>,
}

/// Execute the integrate command.
pub fn execute(args: IntegrateArgs, config: &CliConfig, format: OutputFormat) -> Result<()> {
    let function = catalogue::lookup(&args.interval.function)?;
    let (lower, upper) = args.interval.bounds()?;
    let engine_config = args.engine.resolve(&config.engine);

    info!(
        function = function.name,
        lower,
        upper,
        method = ?args.method,
        "integrating"
    );

    let engine = Romberg::with_config(lower, upper, engine_config, function)?;
    let exact = function.exact(lower, upper);

    let output = match args.method {
        Method::Recursive => {
            let report = engine.recursive_report()?;
            from_report(function.name, lower, upper, &report, exact)
        }
        Method::Tabulated => {
            let value = engine.dynamic_programming(args.max_step)?;
            IntegrateOutput {
                function: function.name,
                lower,
                upper,
                method: Method::Tabulated,
                value,
                converged: None,
                rows: args.max_step + 1,
                error_estimate: None,
                evaluations: (1_u64 << args.max_step) + 1,
                exact,
                abs_error: exact.map(|e| (value - e).abs()),
            }
        }
    };

    if output.converged == Some(false) {
        print_warning(&format!(
            "Tolerance {:.3e} not met within {} rows; returning best estimate",
            engine_config.tolerance, output.rows
        ));
    }

    match format {
        OutputFormat::Table => {
            print_header("Romberg Integration");
            print_output(&rows(&output), format)?;
        }
        OutputFormat::Json => print_json(&output)?,
        OutputFormat::Csv => print_csv(std::slice::from_ref(&output))?,
        OutputFormat::Minimal => println!("{}", format_value(output.value)),
    }

    Ok(())
}

fn from_report(
    function: &'static str,
    lower: f64,
    upper: f64,
    report: &RombergReport,
    exact: Option<f64>,
) -> IntegrateOutput {
    IntegrateOutput {
        function,
        lower,
        upper,
        method: Method::Recursive,
        value: report.value,
        converged: Some(report.converged),
        rows: report.rows,
        error_estimate: Some(report.error_estimate),
        evaluations: report.evaluations,
        exact,
        abs_error: exact.map(|e| (report.value - e).abs()),
    }
}

fn rows(output: &IntegrateOutput) -> Vec<KeyValue> {
    let mut rows = vec![
        KeyValue::new("Function", output.function),
        KeyValue::new(
            "Interval",
            format!("[{}, {}]", output.lower, output.upper),
        ),
        KeyValue::new("Method", format!("{:?}", output.method)),
        KeyValue::new("Value", format_value(output.value)),
    ];

    if let Some(converged) = output.converged {
        rows.push(KeyValue::new("Converged", converged.to_string()));
    }
    rows.push(KeyValue::new("Rows", output.rows.to_string()));
    if let Some(delta) = output.error_estimate {
        rows.push(KeyValue::new("Error Estimate", format_error(delta)));
    }
    rows.push(KeyValue::new("Evaluations", output.evaluations.to_string()));

    if let (Some(exact), Some(err)) = (output.exact, output.abs_error) {
        rows.push(KeyValue::new("Exact", format_value(exact)));
        rows.push(KeyValue::new("Abs Error", format_error(err)));
    }
    rows
}
