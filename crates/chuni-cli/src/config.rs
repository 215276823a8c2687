//! Calculator settings from a TOML file plus command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chuni_core::CalculatorConfig;
use tracing::{debug, warn};

use crate::cli::Args;

/// Load settings from `path`, falling back to defaults when there is no file.
pub fn load_config(path: Option<&Path>) -> Result<CalculatorConfig> {
    let Some(path) = path else {
        return Ok(CalculatorConfig::default());
    };

    if !path.exists() {
        warn!("Config file {} not found, using defaults", path.display());
        return Ok(CalculatorConfig::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: CalculatorConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    debug!("Loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

/// Apply flags given on the command line on top of `config`.
pub fn apply_overrides(config: CalculatorConfig, args: &Args) -> CalculatorConfig {
    let mut builder = CalculatorConfig::builder()
        .precision(config.precision)
        .top_capacity(config.top_capacity)
        .justice_critical_ratio(config.justice_critical_ratio)
        .miss_fraction(config.miss_fraction);

    if let Some(precision) = args.precision {
        builder = builder.precision(precision);
    }
    if let Some(ratio) = args.ratio {
        builder = builder.justice_critical_ratio(ratio);
    }
    if let Some(fraction) = args.miss_fraction {
        builder = builder.miss_fraction(fraction);
    }
    builder.build()
}

/// Settings for this run: the config file, then the flags.
pub fn resolve(args: &Args) -> Result<CalculatorConfig> {
    let config = load_config(args.config.as_deref())?;
    Ok(apply_overrides(config, args))
}
