//! Evaluate command implementation
//!
//! Evaluates the selected model at one population and prints price, revenue,
//! derivatives and the condition flags.

use std::io::{self, Write};

use pricer_models::engine::PricingEngine;
use tracing::info;

use super::Scenario;
use crate::config::CliConfig;
use crate::output::{self, OutputFormat};
use crate::Result;

/// Run the evaluate command
pub fn run(
    config: &CliConfig,
    model: Option<&str>,
    n: Option<f64>,
    assignments: &[String],
    format: &str,
) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(config, model, n, assignments, format, &mut out)
}

fn execute<W: Write>(
    config: &CliConfig,
    model: Option<&str>,
    n: Option<f64>,
    assignments: &[String],
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    config.validate()?;
    let mut scenario = Scenario::resolve(config, model, n, assignments)?;
    let engine = PricingEngine::new(config.engine_config())?;

    info!("Evaluating {:?} at N = {}", scenario.params, scenario.n);
    let result = engine.evaluate(&mut scenario.params, scenario.n);

    output::write_evaluation(out, format, &scenario.params, &result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    #[test]
    fn test_evaluate_defaults_as_json() {
        let mut buffer = Vec::new();
        execute(&CliConfig::default(), None, None, &[], OutputFormat::Json, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let price = value["result"]["price"].as_f64().unwrap();
        approx::assert_relative_eq!(price, 56.53, epsilon = 0.01);
    }

    #[test]
    fn test_evaluate_zero_n0_is_clamped() {
        let mut buffer = Vec::new();
        let sets = vec!["N0=0".to_string()];
        let mut config = CliConfig::default();
        config.parameters.insert("N0".to_string(), 0.0);
        // the config value is out of range, so validation rejects it
        assert!(matches!(
            execute(&config, None, None, &[], OutputFormat::Table, &mut buffer),
            Err(CliError::Config(_))
        ));

        // --set clamps N0 to 1 before evaluation
        execute(&CliConfig::default(), None, None, &sets, OutputFormat::Json, &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["parameters"]["N0"], 1.0);
        assert!(value["result"]["degradation"].is_null());
    }

    #[test]
    fn test_evaluate_rejects_csv() {
        let mut buffer = Vec::new();
        assert!(execute(&CliConfig::default(), None, None, &[], OutputFormat::Csv, &mut buffer).is_err());
    }
}
