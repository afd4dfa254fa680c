//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{CheckArgs, FunctionsArgs, IntegrateArgs, TableArgs};

/// Romberg - numerical integration by Richardson-extrapolated trapezoids
#[derive(Parser)]
#[command(name = "romberg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Engine configuration file (TOML)
    #[arg(short, long, env = "ROMBERG_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Integrate a catalogue function over an interval
    Integrate(IntegrateArgs),

    /// Print the Romberg extrapolation table
    Table(TableArgs),

    /// List the built-in integrands
    Functions(FunctionsArgs),

    /// Run the reference scenarios with both drivers
    Check(CheckArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
