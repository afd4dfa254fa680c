//! Table command implementation.
//!
//! Prints the full Romberg triangle for a catalogue function.

use anyhow::Result;
use clap::Args;
use romberg_math::extrapolation::ExtrapolationTable;
use romberg_math::romberg::Romberg;
use serde::Serialize;
use tabled::Tabled;

use crate::catalogue;
use crate::cli::OutputFormat;
use crate::commands::IntervalArgs;
use crate::config::{CliConfig, EngineArgs};
use crate::output::{format_value, print_header, print_json, print_output};

/// Arguments for the table command.
#[derive(Args, Debug)]
pub struct TableArgs {
    #[command(flatten)]
    pub interval: IntervalArgs,

    /// Last row index (rows 0..=N are printed)
    #[arg(short = 'n', long, default_value = "5")]
    pub max_step: u32,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// One printed row of the triangle.
#[derive(Debug, Serialize, Tabled)]
pub struct TableRow {
    #[tabled(rename = "Row")]
    pub row: usize,
    #[tabled(rename = "Subintervals")]
    pub subintervals: u64,
    #[tabled(rename = "Trapezoid")]
    pub trapezoid: String,
    #[tabled(rename = "Diagonal")]
    pub diagonal: String,
    #[tabled(rename = "Entries")]
    pub entries: String,
}

/// Execute the table command.
pub fn execute(args: TableArgs, config: &CliConfig, format: OutputFormat) -> Result<()> {
    let function = catalogue::lookup(&args.interval.function)?;
    let (lower, upper) = args.interval.bounds()?;
    let engine_config = args.engine.resolve(&config.engine);

    let engine = Romberg::with_config(lower, upper, engine_config, function)?;
    let table = engine.table(args.max_step)?;

    match format {
        OutputFormat::Json => print_json(table.rows())?,
        OutputFormat::Minimal => {
            if let Some(diagonal) = table.last_diagonal() {
                println!("{}", format_value(diagonal));
            }
        }
        OutputFormat::Table | OutputFormat::Csv => {
            if format == OutputFormat::Table {
                print_header(&format!(
                    "Romberg table for {} on [{}, {}]",
                    function.formula, lower, upper
                ));
            }
            print_output(&table_rows(&table), format)?;
        }
    }

    Ok(())
}

fn table_rows(table: &ExtrapolationTable) -> Vec<TableRow> {
    table
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| TableRow {
            row: i,
            subintervals: 1_u64 << i,
            trapezoid: format!("{:.12}", row[0]),
            diagonal: format!("{:.12}", row[row.len() - 1]),
            entries: row
                .iter()
                .map(|v| format!("{:.12}", v))
                .collect::<Vec<_>>()
                .join(" "),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_rows() {
        let mut table = ExtrapolationTable::new();
        table.push_trapezoid(0.5);
        table.push_trapezoid(0.375);

        let rows = table_rows(&table);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].subintervals, 2);
        assert_eq!(rows[1].trapezoid, "0.375000000000");
        assert_eq!(rows[1].diagonal, "0.333333333333");
        assert_eq!(rows[1].entries.split(' ').count(), 2);
    }
}
