//! Romberg CLI - command-line front end for the Romberg quadrature engine.
//!
//! # Usage
//!
//! ```bash
//! # Integrate sin(x) over [0, pi] until successive diagonals agree to 1e-12
//! romberg integrate --function sin --lower 0 --upper 3.141592653589793 --tolerance 1e-12
//!
//! # Fixed-depth integration with 2^20 subintervals
//! romberg integrate --function quartic --lower 0 --upper 1 --method tabulated --max-step 20
//!
//! # Show the extrapolation triangle
//! romberg table --function exp --lower 0 --upper 1 --max-step 5
//!
//! # Run the reference scenarios
//! romberg check
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod catalogue;
mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use config::CliConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let config = match cli.config.as_deref() {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };
    debug!(?config, "loaded configuration");

    let format = cli.format;

    // Execute command
    match cli.command {
        Commands::Integrate(args) => commands::integrate::execute(args, &config, format)?,
        Commands::Table(args) => commands::table::execute(args, &config, format)?,
        Commands::Functions(args) => commands::functions::execute(args, format)?,
        Commands::Check(args) => commands::check::execute(args, &config, format, cli.quiet)?,
    }

    Ok(())
}

/// Logs go to stderr so they never mix with command output.
fn init_logging(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
