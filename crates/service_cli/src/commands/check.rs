//! Check command implementation
//!
//! Loads the configuration, applies environment overrides, validates it and
//! runs one smoke evaluation with the resulting engine.

use std::io::{self, Write};
use std::path::Path;

use pricer_models::engine::PricingEngine;
use tracing::{info, warn};

use super::Scenario;
use crate::config::{CliConfig, ConfigError};
use crate::Result;

/// Run the check command
pub fn run(config_path: &Path) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(config_path, &mut out)
}

fn execute<W: Write>(config_path: &Path, out: &mut W) -> Result<()> {
    info!("Checking configuration...");

    if config_path.exists() {
        writeln!(out, "Configuration file: {}", config_path.display())?;
    } else {
        writeln!(
            out,
            "Configuration file: {} (not found, using defaults)",
            config_path.display()
        )?;
    }

    let config = CliConfig::load_or_default(config_path)?.with_env_override();
    if let Err(err) = config.validate() {
        if let ConfigError::Validation(errors) = &err {
            for error in errors {
                writeln!(out, "  ✘ {}", error)?;
            }
        }
        warn!("Configuration is invalid");
        return Err(err.into());
    }
    writeln!(out, "  ✔ Configuration valid")?;

    let engine = PricingEngine::new(config.engine_config())?;
    writeln!(
        out,
        "  ✔ Engine: step {:e}, domain [{}, {}] x {}",
        engine.step(),
        engine.config().domain.low,
        engine.config().domain.high,
        engine.config().domain.count
    )?;

    let mut scenario = Scenario::resolve(&config, None, None, &[])?;
    let result = engine.evaluate(&mut scenario.params, scenario.n);
    writeln!(
        out,
        "  ✔ Smoke evaluation ({}, N = {}): price {:.2}, revenue {:.2}",
        result.model, result.n, result.price, result.revenue
    )?;
    if let Some(degradation) = result.degradation {
        writeln!(out, "  ! {}", degradation)?;
    }

    info!("Check complete");
    Ok(())
}
