//! Functions command implementation.

use anyhow::Result;
use clap::Args;

use crate::catalogue::{self, FunctionRow};
use crate::cli::OutputFormat;
use crate::output::{print_header, print_output};

/// Arguments for the functions command.
#[derive(Args, Debug)]
pub struct FunctionsArgs {
    /// Only list functions with a known exact integral
    #[arg(long)]
    pub exact_only: bool,
}

/// Execute the functions command.
pub fn execute(args: FunctionsArgs, format: OutputFormat) -> Result<()> {
    let rows: Vec<FunctionRow> = catalogue::all()
        .iter()
        .map(FunctionRow::from)
        .filter(|row| !args.exact_only || row.exact_known)
        .collect();

    if format == OutputFormat::Table {
        print_header("Built-in Integrands");
    }
    print_output(&rows, format)
}
