//! CLI configuration.
//!
//! The configuration file is TOML with a single `[engine]` table mirroring
//! [`RombergConfig`]:
//!
//! ```toml
//! [engine]
//! tolerance = 1e-12
//! max_rows = 30
//! min_rows = 3
//! reject_non_finite = true
//! ```
//!
//! Missing keys fall back to the engine defaults. Command-line flags
//! override whatever the file sets.

use std::path::Path;

use clap::Args;
use romberg_math::romberg::RombergConfig;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Engine settings.
    #[serde(default)]
    pub engine: RombergConfig,
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.engine.validate().map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(config)
    }
}

/// Engine overrides shared by the integrating commands.
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// Convergence tolerance between successive diagonal entries
    #[arg(short, long)]
    pub tolerance: Option<f64>,

    /// Row cap for the recursive driver
    #[arg(long)]
    pub max_rows: Option<u32>,

    /// Rows required before convergence may be declared
    #[arg(long)]
    pub min_rows: Option<u32>,

    /// Accept NaN/infinite samples instead of failing
    #[arg(long)]
    pub allow_non_finite: bool,
}

impl EngineArgs {
    /// Applies the overrides on top of `base`.
    pub fn resolve(&self, base: &RombergConfig) -> RombergConfig {
        let mut config = *base;
        if let Some(tolerance) = self.tolerance {
            config = config.with_tolerance(tolerance);
        }
        if let Some(max_rows) = self.max_rows {
            config = config.with_max_rows(max_rows);
        }
        if let Some(min_rows) = self.min_rows {
            config = config.with_min_rows(min_rows);
        }
        if self.allow_non_finite {
            config = config.with_reject_non_finite(false);
        }
        config
    }
}
